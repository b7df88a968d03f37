//! Declarative allow-list policy and its mapping onto an ammonia cleaner.

use std::collections::HashSet;

use ammonia::Builder;

/// Allow-list governing which markup survives sanitization.
///
/// The list is closed: a tag or attribute absent from it is dropped, not
/// neutralized. Forbidden entries always win over allowed entries, so a
/// policy that lists the same name on both sides still filters it out.
#[derive(Debug, Clone, Copy)]
pub struct SanitizePolicy {
    /// Tags kept as-is. Any other tag is unwrapped: the element goes away
    /// but its children are spliced into its place.
    pub allowed_tags: &'static [&'static str],
    /// Attributes kept on any surviving element (global, not per-tag).
    pub allowed_attributes: &'static [&'static str],
    /// Tags removed together with their entire subtree.
    pub forbidden_tags: &'static [&'static str],
    /// Attribute names stripped regardless of the allow-list.
    pub forbidden_attributes: &'static [&'static str],
    /// URL schemes permitted in `href` and `src` values. Relative URLs
    /// pass through untouched.
    pub allowed_url_schemes: &'static [&'static str],
}

impl SanitizePolicy {
    /// The blog content policy: common formatting, lists, tables, links
    /// and images; no scripting surface, no event handlers, and only
    /// http/https/mailto URLs.
    pub const DEFAULT: Self = Self {
        allowed_tags: &[
            "p", "br", "strong", "b", "em", "i", "u", "s", "strike",
            "h1", "h2", "h3", "h4", "h5", "h6",
            "ul", "ol", "li",
            "blockquote", "pre", "code",
            "a", "img",
            "table", "thead", "tbody", "tr", "th", "td",
            "div", "span",
        ],
        allowed_attributes: &[
            "href", "src", "alt", "title", "class", "style", "target", "rel",
        ],
        forbidden_tags: &["script", "style", "iframe", "object", "embed", "form", "input"],
        forbidden_attributes: &[
            "onclick", "onerror", "onload", "onmouseover", "onmouseout",
            "onfocus", "onblur", "onchange", "onsubmit",
        ],
        allowed_url_schemes: &["http", "https", "mailto"],
    };

    /// Build the ammonia cleaner this policy describes.
    pub fn cleaner(&self) -> Builder<'static> {
        let forbidden_tags: HashSet<&'static str> =
            self.forbidden_tags.iter().copied().collect();
        let forbidden_attributes: HashSet<&'static str> =
            self.forbidden_attributes.iter().copied().collect();

        // Subtracting the forbidden sets up front keeps the forbidden-wins
        // invariant and the disjointness ammonia requires between kept and
        // content-cleaned tags.
        let tags: HashSet<&'static str> = self
            .allowed_tags
            .iter()
            .copied()
            .filter(|tag| !forbidden_tags.contains(tag))
            .collect();
        let attributes: HashSet<&'static str> = self
            .allowed_attributes
            .iter()
            .copied()
            .filter(|attr| !forbidden_attributes.contains(attr))
            .collect();

        let mut builder = Builder::new();
        builder
            .tags(tags)
            .clean_content_tags(forbidden_tags)
            .generic_attributes(attributes)
            .url_schemes(self.allowed_url_schemes.iter().copied().collect())
            // `rel` is allow-listed directly, which rules out ammonia's
            // automatic rel injection on links.
            .link_rel(None);
        builder
    }
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_has_disjoint_tag_sets() {
        let policy = SanitizePolicy::DEFAULT;
        for tag in policy.forbidden_tags {
            assert!(
                !policy.allowed_tags.contains(tag),
                "tag '{tag}' appears in both the allowed and forbidden sets"
            );
        }
    }

    #[test]
    fn forbidden_wins_when_policy_overlaps() {
        let policy = SanitizePolicy {
            allowed_tags: &["p", "script"],
            allowed_attributes: &["href", "onclick"],
            forbidden_tags: &["script"],
            forbidden_attributes: &["onclick"],
            allowed_url_schemes: &["https"],
        };
        let cleaned = policy
            .cleaner()
            .clean("<p onclick=\"x()\">ok</p><script>bad()</script>")
            .to_string();
        assert!(!cleaned.contains("script"));
        assert!(!cleaned.contains("bad()"));
        assert!(!cleaned.contains("onclick"));
        assert!(cleaned.contains("ok"));
    }

    #[test]
    fn scheme_filter_follows_policy() {
        let policy = SanitizePolicy {
            allowed_url_schemes: &["https"],
            ..SanitizePolicy::DEFAULT
        };
        let cleaned = policy
            .cleaner()
            .clean("<a href=\"http://example.com\">a</a><a href=\"https://example.com\">b</a>")
            .to_string();
        assert!(!cleaned.contains("http://example.com"));
        assert!(cleaned.contains("https://example.com"));
    }
}
