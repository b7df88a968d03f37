//! Toolbar formatting commands.

/// Block-level format applied by [`Command::FormatBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
}

impl BlockFormat {
    /// Tag the format wraps the selection in.
    pub fn tag(self) -> &'static str {
        match self {
            BlockFormat::Paragraph => "p",
            BlockFormat::Heading1 => "h1",
            BlockFormat::Heading2 => "h2",
            BlockFormat::Heading3 => "h3",
        }
    }
}

/// A formatting command applied to the live selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    FormatBlock(BlockFormat),
    BulletList,
    OrderedList,
    /// Wrap the selection in a link. `None` models a cancelled URL prompt:
    /// the command then has no effect at all, not even an emission.
    InsertLink(Option<String>),
}

impl Command {
    /// True when the command was invoked without the input it requires.
    pub fn missing_required_input(&self) -> bool {
        matches!(self, Command::InsertLink(None))
    }
}
