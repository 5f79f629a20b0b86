//! Markdown parsing and tree walk
//!
//! Pipeline: Markdown string → Comrak AST → Renderer callbacks → output string

use super::nodes::{CellAlignment, Node};
use super::Renderer;
use crate::markup::escape_text;
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse `source` and render it with `renderer`, returning the concatenated output.
pub fn render_markdown<R: Renderer + ?Sized>(source: &str, renderer: &mut R) -> String {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);
    render_node(root, renderer)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

fn render_children<'a, R: Renderer + ?Sized>(node: &'a AstNode<'a>, renderer: &mut R) -> String {
    node.children()
        .map(|child| render_node(child, renderer))
        .collect()
}

fn render_node<'a, R: Renderer + ?Sized>(node: &'a AstNode<'a>, renderer: &mut R) -> String {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document => render_children(node, renderer),

        NodeValue::FrontMatter(_) => String::new(),

        NodeValue::Heading(heading) => {
            let text = render_children(node, renderer);
            let raw = escape_text(collect_text_from_children(node).trim());
            renderer.render(Node::Heading {
                text,
                level: heading.level,
                raw,
            })
        }

        NodeValue::CodeBlock(code_block) => {
            let literal = &code_block.literal;
            let code = literal.strip_suffix('\n').unwrap_or(literal);
            let language = code_block.info.split_whitespace().next().map(str::to_string);
            renderer.render(Node::Code {
                code: escape_text(code),
                language,
            })
        }

        NodeValue::BlockQuote => {
            let quote = render_children(node, renderer);
            renderer.render(Node::Blockquote { quote })
        }

        NodeValue::Paragraph => {
            let text = render_children(node, renderer);
            if in_tight_list_item(node) {
                text
            } else {
                renderer.render(Node::Paragraph { text })
            }
        }

        NodeValue::ThematicBreak => renderer.render(Node::Hr),

        NodeValue::List(list) => {
            let body = render_children(node, renderer);
            renderer.render(Node::List {
                body,
                ordered: matches!(list.list_type, ListType::Ordered),
                start: list.start,
            })
        }

        NodeValue::Item(_) => {
            let text = render_children(node, renderer);
            renderer.render(Node::ListItem { text, task: None })
        }

        NodeValue::TaskItem(symbol) => {
            let checked = symbol.is_some();
            let checkbox = renderer.render(Node::Checkbox { checked });
            let content = render_children(node, renderer);
            renderer.render(Node::ListItem {
                text: format!("{checkbox} {content}"),
                task: Some(checked),
            })
        }

        NodeValue::Table(_) => {
            let mut header = String::new();
            let mut body = String::new();
            for row in node.children() {
                let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
                let rendered = render_node(row, renderer);
                if is_header {
                    header.push_str(&rendered);
                } else {
                    body.push_str(&rendered);
                }
            }
            renderer.render(Node::Table { header, body })
        }

        NodeValue::TableRow(_) => {
            let content = render_children(node, renderer);
            renderer.render(Node::TableRow { content })
        }

        NodeValue::TableCell => {
            let (header, align) = get_table_cell_info(node);
            let content = render_children(node, renderer);
            renderer.render(Node::TableCell {
                content,
                header,
                align,
            })
        }

        NodeValue::Strong => {
            let text = render_children(node, renderer);
            renderer.render(Node::Strong { text })
        }

        NodeValue::Emph => {
            let text = render_children(node, renderer);
            renderer.render(Node::Em { text })
        }

        NodeValue::Strikethrough => {
            let text = render_children(node, renderer);
            renderer.render(Node::Strikethrough { text })
        }

        NodeValue::LineBreak => renderer.render(Node::LineBreak),

        NodeValue::SoftBreak => renderer.render(Node::Text {
            text: "\n".to_string(),
        }),

        NodeValue::Link(link) => {
            let text = render_children(node, renderer);
            renderer.render(Node::Link {
                href: non_empty(&link.url),
                title: non_empty(&link.title),
                text,
            })
        }

        NodeValue::Image(link) => {
            let alt = collect_text_from_children(node);
            renderer.render(Node::Image {
                href: non_empty(&link.url),
                title: non_empty(&link.title),
                text: escape_text(alt.trim()),
            })
        }

        NodeValue::Text(text) => renderer.render(Node::Text {
            text: escape_text(text),
        }),

        NodeValue::Code(code) => renderer.render(Node::Codespan {
            code: escape_text(&code.literal),
        }),

        NodeValue::HtmlBlock(html) => renderer.render(Node::Html {
            html: html.literal.clone(),
        }),

        NodeValue::HtmlInline(html) => renderer.render(Node::Html { html: html.clone() }),

        // Extension kinds without a speech mapping contribute their children
        _ => render_children(node, renderer),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Paragraphs of a tight list's items render as their bare inline content.
fn in_tight_list_item<'a>(node: &'a AstNode<'a>) -> bool {
    let Some(item) = node.parent() else {
        return false;
    };
    if !matches!(
        item.data.borrow().value,
        NodeValue::Item(_) | NodeValue::TaskItem(_)
    ) {
        return false;
    }
    match item.parent() {
        Some(list) => matches!(&list.data.borrow().value, NodeValue::List(l) if l.tight),
        None => false,
    }
}

/// Collect text content from a node's children (heading outlines, image alt text)
fn collect_text_from_children<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        collect_text_content(child, &mut text);
    }
    text
}

fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}

fn get_table_cell_info<'a>(node: &'a AstNode<'a>) -> (bool, CellAlignment) {
    let parent = match node.parent() {
        Some(p) => p,
        None => return (false, CellAlignment::None),
    };

    let is_header = matches!(parent.data.borrow().value, NodeValue::TableRow(true));

    let mut col_index = 0;
    let mut curr = node.previous_sibling();
    while let Some(sibling) = curr {
        col_index += 1;
        curr = sibling.previous_sibling();
    }

    let grandparent = match parent.parent() {
        Some(p) => p,
        None => return (is_header, CellAlignment::None),
    };

    let align = match &grandparent.data.borrow().value {
        NodeValue::Table(table) => match table.alignments.get(col_index) {
            Some(TableAlignment::Left) => CellAlignment::Left,
            Some(TableAlignment::Right) => CellAlignment::Right,
            Some(TableAlignment::Center) => CellAlignment::Center,
            _ => CellAlignment::None,
        },
        _ => CellAlignment::None,
    };

    (is_header, align)
}
