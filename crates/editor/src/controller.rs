//! Synchronization between the host-owned content value and the surface.
//!
//! The host owns an immutable HTML string (the controlled value) and the
//! surface owns live, mutable markup. The controller keeps the two from
//! diverging for longer than a single edit event, without ever letting the
//! host see unsanitized content and without rewriting the surface when the
//! content it shows is already current.

use serde::Deserialize;
use tracing::trace;

use bozza_sanitize::sanitize;

use crate::command::Command;
use crate::surface::Surface;

/// Host-facing configuration. The content value itself is not an option;
/// it flows through [`EditorController::set_value`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Shown only while the surface is empty.
    pub placeholder: String,
    /// Refuses both formatting commands and keystroke input.
    pub disabled: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            placeholder: "Enter your content".to_string(),
            disabled: false,
        }
    }
}

/// The single notification the controller produces. The owner consumes it
/// synchronously and may store the payload back as the controlled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChanged {
    /// Sanitized markup. The raw surface form never leaves the controller.
    pub html: String,
}

/// Idle: the surface reflects the external value. Echoing: a self-triggered
/// write, or the emission that will provoke one, is still in flight; value
/// changes arriving in this window are the controller's own output coming
/// back around and must not rewrite the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncState {
    Idle,
    Echoing,
}

/// Stateful adapter between a live editable surface and a controlled
/// string value.
#[derive(Debug)]
pub struct EditorController<S> {
    surface: S,
    options: EditorOptions,
    state: SyncState,
}

impl<S: Surface> EditorController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, EditorOptions::default())
    }

    pub fn with_options(surface: S, options: EditorOptions) -> Self {
        Self {
            surface,
            options,
            state: SyncState::Idle,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The embedding runtime applies user edits through this handle; the
    /// controller itself only writes during value synchronization.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// True when the placeholder should be rendered over the surface.
    pub fn placeholder_visible(&self) -> bool {
        self.surface.is_attached() && self.surface.markup().is_empty()
    }

    /// External value change: push the sanitized value into the surface.
    ///
    /// The write happens only when the sanitized value differs from what
    /// the surface already shows. Rewriting identical content would reset
    /// the cursor and discard in-progress IME composition, so the equality
    /// check is mandatory, not an optimization.
    pub fn set_value(&mut self, value: &str) {
        if !self.surface.is_attached() {
            return;
        }
        if self.state == SyncState::Echoing {
            trace!("value sync suppressed inside echo window");
            return;
        }
        let sanitized = sanitize(value);
        if sanitized == self.surface.markup() {
            trace!("value sync skipped, surface already current");
            return;
        }
        self.state = SyncState::Echoing;
        self.surface.set_markup(&sanitized);
        // The write itself is synchronous; the state stays Echoing until
        // the turn ends so the surface's own change notification cannot
        // re-enter this path.
    }

    /// User-driven input: read the raw surface markup and emit its
    /// sanitized form.
    ///
    /// The surface is deliberately left alone mid-edit even when its raw
    /// markup diverges from the sanitized form; only the value sent upward
    /// is filtered.
    pub fn input(&mut self) -> Option<ContentChanged> {
        self.end_of_turn();
        if !self.surface.is_attached() || self.options.disabled {
            return None;
        }
        Some(self.emit())
    }

    /// Formatting command: apply it to the live selection, then perform
    /// the same read-sanitize-emit sequence as keystroke input.
    ///
    /// A command invoked without its required input (link insertion with
    /// the URL prompt cancelled) does nothing at all.
    pub fn command(&mut self, command: Command) -> Option<ContentChanged> {
        self.end_of_turn();
        if !self.surface.is_attached() || self.options.disabled {
            return None;
        }
        if command.missing_required_input() {
            trace!("command dropped, required input missing");
            return None;
        }
        self.surface.exec(&command);
        Some(self.emit())
    }

    /// Deferred reset of the echo window, the single-shot stand-in for a
    /// zero-delay timer.
    ///
    /// The embedding loop calls this after each synchronous dispatch
    /// completes; the user-event entry points also run it first, so the
    /// reset is guaranteed to land before any user-generated event is
    /// processed even if the host never calls it.
    pub fn end_of_turn(&mut self) {
        if self.state == SyncState::Echoing {
            trace!("echo window closed");
            self.state = SyncState::Idle;
        }
    }

    fn emit(&mut self) -> ContentChanged {
        let html = sanitize(self.surface.markup());
        // Stay in the echo window until the turn ends: the owner's
        // synchronous echo of this exact value must not rewrite the
        // surface mid-edit.
        self.state = SyncState::Echoing;
        ContentChanged { html }
    }
}
