//! Rich-text editing core for the bozza blog front-end.
//!
//! A live editable surface produces raw, user-controlled markup; everything
//! that leaves this crate has passed through the sanitizer first. The
//! controller keeps a host-owned content value and the surface in sync in
//! both directions without feedback loops, and routes every formatting
//! command through the same read-sanitize-emit path as keystroke input.
//!
//! The whole crate runs on a single-threaded, event-driven model: every
//! transition executes synchronously inside the entry point that triggered
//! it, and nothing here blocks, suspends, or retries.

pub mod command;
pub mod controller;
pub mod draft;
pub mod surface;

pub use command::{BlockFormat, Command};
pub use controller::{ContentChanged, EditorController, EditorOptions};
pub use draft::{CreatePost, DraftError, PostDraft, UpdatePost};
pub use surface::{MarkupSurface, Surface};
