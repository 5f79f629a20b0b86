//! Markdown engine
//!
//! Parses CommonMark (with the GFM table, strikethrough, autolink and task-list extensions)
//! and drives a [`Renderer`] over the resulting tree in document order.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for parsing. The engine walks comrak's arena AST depth-first,
//! renders each node's children first, then hands the node kind plus its rendered children
//! to the renderer. The renderer's return values are concatenated to build the output.
//!
//! # Node Mapping Table
//!
//! | comrak NodeValue          | Node            | Notes                                          |
//! |---------------------------|-----------------|------------------------------------------------|
//! | Heading                   | Heading         | `raw` = plain heading text                     |
//! | CodeBlock                 | Code            | trailing newline dropped                       |
//! | BlockQuote                | Blockquote      |                                                |
//! | Paragraph                 | Paragraph       | inlined (no node) inside tight list items      |
//! | ThematicBreak             | Hr              |                                                |
//! | List                      | List            |                                                |
//! | Item / TaskItem           | ListItem        | task items get a leading Checkbox              |
//! | Table / TableRow / Cell   | Table / TableRow / TableCell | header rows feed `Table::header`  |
//! | Strong / Emph             | Strong / Em     |                                                |
//! | LineBreak                 | LineBreak       |                                                |
//! | SoftBreak                 | Text (`\n`)     |                                                |
//! | Strikethrough             | Strikethrough   |                                                |
//! | Link / Image              | Link / Image    | empty url/title become `None`                  |
//! | Text                      | Text            | XML-escaped                                    |
//! | Code                      | Codespan        | XML-escaped                                    |
//! | HtmlBlock / HtmlInline    | Html            | passed through verbatim                        |
//! | FrontMatter               | (nothing)       |                                                |
//! | anything else             | (children)      | footnotes, superscript, description lists, ... |
//!
//! A renderer is a plain value passed by `&mut` for one call. There is no global renderer
//! registration: state a renderer keeps (counters, collected metadata) belongs to that
//! single rendering.

mod nodes;
mod parser;

pub use nodes::{CellAlignment, Node};
pub use parser::render_markdown;

/// Per-kind rendering callback driven by [`render_markdown`].
pub trait Renderer {
    /// Render one node whose children are already rendered into its payload.
    fn render(&mut self, node: Node) -> String;
}
