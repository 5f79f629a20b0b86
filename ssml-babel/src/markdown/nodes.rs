//! Node payloads handed to a [`Renderer`](super::Renderer).
//!
//! Every variant carries its children already rendered (in the renderer's own output
//! language) plus the node-specific metadata the Markdown source provides. Text, code and
//! image alt payloads are XML-escaped; `href`/`title` are the raw values from the source.

/// Column alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlignment {
    None,
    Left,
    Center,
    Right,
}

/// A document-structure node, one variant per kind the engine emits.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// ATX or setext heading. `raw` is the heading's plain text.
    Heading { text: String, level: u8, raw: String },
    /// Fenced or indented code block; `language` is the first word of the info string.
    Code {
        code: String,
        language: Option<String>,
    },
    Blockquote { quote: String },
    Paragraph { text: String },
    /// Thematic break (`---`, `***`).
    Hr,
    List {
        body: String,
        ordered: bool,
        start: usize,
    },
    /// `task` is `Some(checked)` for task-list items; `text` then starts with the
    /// rendered checkbox.
    ListItem { text: String, task: Option<bool> },
    Table { header: String, body: String },
    TableRow { content: String },
    TableCell {
        content: String,
        header: bool,
        align: CellAlignment,
    },
    Checkbox { checked: bool },
    Strong { text: String },
    Em { text: String },
    /// Hard line break.
    LineBreak,
    Strikethrough { text: String },
    Link {
        href: Option<String>,
        title: Option<String>,
        text: String,
    },
    /// `text` is the image's alt text.
    Image {
        href: Option<String>,
        title: Option<String>,
        text: String,
    },
    Text { text: String },
    Codespan { code: String },
    /// Raw HTML from the Markdown source, block or inline. Not escaped.
    Html { html: String },
}
