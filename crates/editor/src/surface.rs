//! The live editable region, modeled as an owned markup buffer.

use std::ops::Range;

use crate::command::Command;

/// Seam between the controller and whatever renders the editable region.
///
/// A programmatic write replaces the whole markup and loses the cursor.
/// User keystrokes are applied by the embedding runtime directly and then
/// reported to the controller as input events; both mutations happen on the
/// same single-threaded event loop, never concurrently.
pub trait Surface {
    /// False once the underlying node is gone. Every controller transition
    /// against a detached surface is a no-op, never a fault.
    fn is_attached(&self) -> bool;

    /// Current serialized markup.
    fn markup(&self) -> &str;

    /// Programmatic write, used only for external value synchronization.
    fn set_markup(&mut self, html: &str);

    /// Apply a formatting command to the live selection via the surface's
    /// native editing primitive. Returns false when nothing changed.
    fn exec(&mut self, command: &Command) -> bool;
}

/// In-memory surface: a markup string plus a byte-range selection.
///
/// The embedder keeps the selection inside text content; commands wrap the
/// selected range in the command's markup. A counter of programmatic writes
/// stands in for "the cursor was reset" so tests and headless hosts can
/// observe rewrites that a real surface would pay for in lost caret state.
#[derive(Debug, Default)]
pub struct MarkupSurface {
    markup: String,
    selection: Option<Range<usize>>,
    detached: bool,
    writes: u64,
}

impl MarkupSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a byte range of the markup. Ranges that fall outside the
    /// buffer or off a character boundary are ignored rather than panicking.
    pub fn select(&mut self, range: Range<usize>) {
        let valid = range.start <= range.end
            && self.markup.is_char_boundary(range.start)
            && self.markup.is_char_boundary(range.end);
        if valid {
            self.selection = Some(range);
        }
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// User keystrokes: replace the selection (or append at the end when
    /// there is none) with `text`, leaving the caret collapsed after it.
    pub fn insert_text(&mut self, text: &str) {
        if self.detached {
            return;
        }
        let range = self
            .selection
            .clone()
            .unwrap_or_else(|| self.markup.len()..self.markup.len());
        self.markup.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = Some(caret..caret);
    }

    /// Model the editable node being removed from the document.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Number of programmatic writes so far (cursor-reset proxy).
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    fn wrap_selection(&mut self, open: &str, close: &str) -> bool {
        let Some(range) = self.selection.clone() else {
            return false;
        };
        if range.is_empty() {
            return false;
        }
        self.markup.insert_str(range.end, close);
        self.markup.insert_str(range.start, open);
        // Keep the selection over the wrapped text.
        self.selection = Some(range.start + open.len()..range.end + open.len());
        true
    }
}

impl Surface for MarkupSurface {
    fn is_attached(&self) -> bool {
        !self.detached
    }

    fn markup(&self) -> &str {
        &self.markup
    }

    fn set_markup(&mut self, html: &str) {
        if self.detached {
            return;
        }
        self.markup.clear();
        self.markup.push_str(html);
        // Whole-content replacement loses the live selection.
        self.selection = None;
        self.writes += 1;
    }

    fn exec(&mut self, command: &Command) -> bool {
        if self.detached {
            return false;
        }
        match command {
            Command::Bold => self.wrap_selection("<strong>", "</strong>"),
            Command::Italic => self.wrap_selection("<em>", "</em>"),
            Command::Underline => self.wrap_selection("<u>", "</u>"),
            Command::Strikethrough => self.wrap_selection("<s>", "</s>"),
            Command::FormatBlock(format) => {
                let tag = format.tag();
                self.wrap_selection(&format!("<{tag}>"), &format!("</{tag}>"))
            }
            Command::BulletList => self.wrap_selection("<ul><li>", "</li></ul>"),
            Command::OrderedList => self.wrap_selection("<ol><li>", "</li></ol>"),
            Command::InsertLink(Some(url)) => {
                let href = escape_attribute(url);
                self.wrap_selection(&format!("<a href=\"{href}\">"), "</a>")
            }
            // A cancelled prompt never reaches the surface; stay inert if
            // it does.
            Command::InsertLink(None) => false,
        }
    }
}

/// Escape a value for placement inside a double-quoted attribute.
fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::command::BlockFormat;

    #[test]
    fn insert_text_appends_without_selection() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("hello");
        surface.insert_text(" world");
        assert_eq!(surface.markup(), "hello world");
        assert_eq!(surface.write_count(), 0);
    }

    #[test]
    fn insert_text_replaces_selection() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("hello world");
        surface.select(0..5);
        surface.insert_text("goodbye");
        assert_eq!(surface.markup(), "goodbye world");
        assert_eq!(surface.selection(), Some(7..7));
    }

    #[test]
    fn invalid_selection_ignored() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("short");
        surface.select(0..3);
        surface.select(0..100);
        assert_eq!(surface.selection(), Some(0..3));
    }

    #[test]
    fn set_markup_bumps_write_count_and_drops_selection() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("text");
        surface.select(0..4);
        surface.set_markup("<p>text</p>");
        assert_eq!(surface.write_count(), 1);
        assert_eq!(surface.selection(), None);
        assert_eq!(surface.markup(), "<p>text</p>");
    }

    #[test]
    fn bold_wraps_selection() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("make this bold");
        surface.select(10..14);
        assert!(surface.exec(&Command::Bold));
        assert_eq!(surface.markup(), "make this <strong>bold</strong>");
    }

    #[test]
    fn heading_wraps_selection_and_selection_tracks_text() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("title body");
        surface.select(0..5);
        assert!(surface.exec(&Command::FormatBlock(BlockFormat::Heading1)));
        assert_eq!(surface.markup(), "<h1>title</h1> body");
        let sel = surface.selection().unwrap();
        assert_eq!(&surface.markup()[sel], "title");
    }

    #[test]
    fn list_command_wraps_selection_in_item() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("first");
        surface.select(0..5);
        assert!(surface.exec(&Command::BulletList));
        assert_eq!(surface.markup(), "<ul><li>first</li></ul>");
    }

    #[test]
    fn link_url_is_attribute_escaped() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("here");
        surface.select(0..4);
        let url = "https://example.com/?a=1&b=\"2\"";
        assert!(surface.exec(&Command::InsertLink(Some(url.to_string()))));
        assert_eq!(
            surface.markup(),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">here</a>"
        );
    }

    #[test]
    fn commands_need_a_nonempty_selection() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("text");
        assert!(!surface.exec(&Command::Bold));
        surface.select(2..2);
        assert!(!surface.exec(&Command::Bold));
        assert_eq!(surface.markup(), "text");
    }

    #[test]
    fn detached_surface_is_inert() {
        let mut surface = MarkupSurface::new();
        surface.insert_text("text");
        surface.select(0..4);
        surface.detach();
        assert!(!surface.is_attached());
        assert!(!surface.exec(&Command::Bold));
        surface.set_markup("<p>other</p>");
        surface.insert_text("more");
        assert_eq!(surface.markup(), "text");
        assert_eq!(surface.write_count(), 0);
    }
}
