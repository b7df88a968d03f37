//! HTML sanitization for user-authored blog content.
//!
//! The editing surface hands back raw, user-controlled markup; before that
//! markup is previewed, stored, or re-displayed it is reduced to a
//! constrained dialect by policy-driven tree filtering. Filtering is a
//! strict reduction and never raises: malformed input is recovered by the
//! HTML parser's own error handling, forbidden elements lose their whole
//! subtree, unknown elements are unwrapped around their children, and
//! attributes outside the allow-list are dropped.

mod policy;

pub use policy::SanitizePolicy;

use std::sync::LazyLock;

static DEFAULT_CLEANER: LazyLock<ammonia::Builder<'static>> =
    LazyLock::new(|| SanitizePolicy::DEFAULT.cleaner());

/// Sanitize untrusted HTML with [`SanitizePolicy::DEFAULT`].
///
/// Pure and deterministic; safe for empty, malformed, or deeply nested
/// input. Idempotent: feeding the output back in returns it unchanged.
pub fn sanitize(html: &str) -> String {
    DEFAULT_CLEANER.clean(html).to_string()
}

/// Sanitize untrusted HTML with an explicit policy.
pub fn sanitize_with(policy: &SanitizePolicy, html: &str) -> String {
    policy.cleaner().clean(html).to_string()
}
