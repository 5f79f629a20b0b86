//! SSML rendering
//!
//! [`SsmlRenderer`] is the dispatch table from Markdown node kind to speech markup. It
//! owns a [`ReferenceTracker`], so a renderer value must only ever serve a single
//! conversion: build one per call, render, then read the tracker out.
//!
//! # Element Mapping Table
//!
//! | Node            | SSML                                                                          |
//! |-----------------|-------------------------------------------------------------------------------|
//! | Heading         | `<break time="2s"/><emphasis level="strong">…</emphasis><break time="0.5s"/>` |
//! | Code, Codespan  | `<say-as interpret-as="verbatim">…</say-as>` (spelled out)                    |
//! | Blockquote      | `<p>…</p>`                                                                    |
//! | Paragraph       | `<p>…</p><break time="0.75s"/>`                                               |
//! | Hr              | `<break time="3s"/>`                                                          |
//! | List, ListItem  | `<p>…</p>`                                                                    |
//! | Table/Row/Cell  | `<p>…</p>` (tables flatten to paragraphs)                                     |
//! | Checkbox        | checked / unchecked phrase                                                    |
//! | Strong          | `<emphasis level="strong">…</emphasis>`                                       |
//! | Em              | `<s class="em">…</s>` (marker class only)                                     |
//! | Strikethrough   | `<s class="del">…</s>`                                                        |
//! | LineBreak       | nothing                                                                       |
//! | Link            | `<s class="link">label</s>`                                                   |
//! | Image           | `<p>label</p>`                                                                |
//! | Text, Html      | unchanged                                                                     |
//!
//! Raw HTML is passed through without sanitization; the authoring pipeline upstream is
//! trusted.

pub mod phrases;
pub mod references;

use crate::markdown::{Node, Renderer};

pub use phrases::Phrases;
pub use references::{is_url, Link, ReferenceTracker};

/// Renders Markdown nodes to SSML fragments for one conversion.
#[derive(Debug)]
pub struct SsmlRenderer<'p> {
    phrases: &'p Phrases,
    references: ReferenceTracker,
}

impl<'p> SsmlRenderer<'p> {
    pub fn new(phrases: &'p Phrases) -> Self {
        Self {
            phrases,
            references: ReferenceTracker::new(),
        }
    }

    pub fn references(&self) -> &ReferenceTracker {
        &self.references
    }

    pub fn into_references(self) -> ReferenceTracker {
        self.references
    }
}

impl Renderer for SsmlRenderer<'_> {
    fn render(&mut self, node: Node) -> String {
        match node {
            // Block - - - - - - - - - - - - - - - - - - - -
            Node::Html { html } => html,
            Node::Heading { text, level, raw } => {
                self.references.outline_heading(level, &raw);
                format!(
                    r#"<break time="2s"/><emphasis level="strong">{text}</emphasis><break time="0.5s"/>"#
                )
            }
            Node::Code { code, .. } => verbatim(&code),
            Node::Blockquote { quote } => paragraph(&quote),
            Node::Paragraph { text } => format!(r#"<p>{text}</p><break time="0.75s"/>"#),
            Node::Hr => r#"<break time="3s"/>"#.to_string(),
            Node::List { body, .. } => paragraph(&body),
            Node::ListItem { text, .. } => paragraph(&text),
            Node::Table { header, body } => paragraph(&format!("{header}{body}")),
            Node::TableRow { content } => paragraph(&content),
            Node::TableCell { content, .. } => paragraph(&content),
            Node::Checkbox { checked } => self.phrases.checkbox(checked).to_string(),

            // Inline - - - - - - - - - - - - - - - - - - - -
            Node::Strong { text } => format!(r#"<emphasis level="strong">{text}</emphasis>"#),
            Node::Em { text } => format!(r#"<s class="em">{text}</s>"#),
            Node::LineBreak => String::new(),
            Node::Strikethrough { text } => format!(r#"<s class="del">{text}</s>"#),
            Node::Link { href, title, text } => {
                let label = self.references.speak_link(href, title, text, self.phrases);
                format!(r#"<s class="link">{label}</s>"#)
            }
            Node::Image { href, title, text } => {
                let label = self.references.speak_image(
                    href.as_deref(),
                    title.as_deref(),
                    &text,
                    self.phrases,
                );
                paragraph(&label)
            }
            Node::Text { text } => text,
            Node::Codespan { code } => verbatim(&code),
        }
    }
}

fn paragraph(content: &str) -> String {
    format!("<p>{content}</p>")
}

fn verbatim(code: &str) -> String {
    format!(r#"<say-as interpret-as="verbatim">{code}</say-as>"#)
}
