//! HTML → Markdown normalization
//!
//! Pipeline: HTML string → RcDom (html5ever) → Markdown string
//!
//! The output only needs to be good enough for the SSML renderer: headings, paragraphs,
//! emphasis, code, quotes, lists, tables, links and images survive; presentational markup
//! (`span`, `font`, `u`, ...) is unwrapped; `head`, `script` and `style` content is dropped.
//! Text is whitespace-collapsed and Markdown punctuation is backslash-escaped so it cannot
//! be re-interpreted as syntax.

use crate::error::ConvertError;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));
static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-line pattern is a valid regex"));
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)([.)])").expect("ordered marker pattern is a valid regex"));

/// Convert an HTML document or fragment to Markdown.
///
/// Parse failures are reported as [`ConvertError::HtmlNormalization`]; they are not
/// recovered by falling back to the raw HTML.
pub fn html_to_markdown(html: &str) -> Result<String, ConvertError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ConvertError::HtmlNormalization(e.to_string()))?;

    Ok(tidy(&children(&dom.document)))
}

fn children(handle: &Handle) -> String {
    handle
        .children
        .borrow()
        .iter()
        .map(node)
        .collect()
}

fn node(handle: &Handle) -> String {
    match &handle.data {
        NodeData::Document => children(handle),
        NodeData::Text { contents } => {
            escape_markdown(&WHITESPACE.replace_all(&contents.borrow(), " "))
        }
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs.borrow();
            element(handle, name.local.as_ref(), &attrs)
        }
        // Comments, doctypes and processing instructions carry nothing speakable
        _ => String::new(),
    }
}

fn element(handle: &Handle, tag: &str, attrs: &[Attribute]) -> String {
    match tag {
        "head" | "script" | "style" | "title" | "template" | "noscript" => String::new(),

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level: usize = tag[1..].parse().unwrap_or(1);
            let content = single_line(&children(handle));
            if content.is_empty() {
                String::new()
            } else {
                block(&format!("{} {content}", "#".repeat(level)))
            }
        }

        "p" | "div" | "section" | "article" | "header" | "footer" | "main" | "aside"
        | "nav" | "figure" | "figcaption" | "address" | "dd" | "dt" => {
            let content = children(handle);
            let first_line = !opens_with_block(&content);
            block(&escape_line_starts(content.trim(), first_line))
        }

        "br" => "\\\n".to_string(),

        "hr" => block("* * *"),

        "strong" | "b" => wrap_inline(&children(handle), "**"),
        "em" | "i" | "cite" | "dfn" => wrap_inline(&children(handle), "*"),
        "del" | "s" | "strike" => wrap_inline(&children(handle), "~~"),

        "code" | "kbd" | "samp" | "tt" => {
            code_span(&collect_text(handle).replace('\n', " "))
        }

        "pre" => code_block(handle),

        "blockquote" => {
            let content = tidy(&children(handle));
            if content.is_empty() {
                return String::new();
            }
            let quoted: Vec<String> = content
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {line}")
                    }
                })
                .collect();
            block(&quoted.join("\n"))
        }

        "ul" | "ol" => list(handle, tag == "ol", attrs),

        "a" => {
            let text = children(handle);
            match attr(attrs, "href") {
                Some(href) if !href.is_empty() => {
                    format!("[{}]({})", text.trim(), destination(&href, attr(attrs, "title")))
                }
                _ => text,
            }
        }

        "img" => {
            let Some(src) = attr(attrs, "src") else {
                return String::new();
            };
            let alt = attr(attrs, "alt")
                .map(|alt| escape_markdown(&single_line(&alt)))
                .unwrap_or_default();
            format!("![{alt}]({})", destination(&src, attr(attrs, "title")))
        }

        "table" => table(handle),

        _ => children(handle),
    }
}

fn code_block(handle: &Handle) -> String {
    let language = handle
        .children
        .borrow()
        .iter()
        .find_map(|child| match &child.data {
            NodeData::Element { name, attrs, .. } if name.local.as_ref() == "code" => {
                attr(&attrs.borrow(), "class").and_then(|class| {
                    class
                        .split_whitespace()
                        .find_map(|c| c.strip_prefix("language-").map(str::to_string))
                })
            }
            _ => None,
        })
        .unwrap_or_default();

    let code = collect_text(handle);

    let fence = if code.contains("```") { "~~~" } else { "```" };
    let code = code.strip_suffix('\n').unwrap_or(&code);
    block(&format!("{fence}{language}\n{code}\n{fence}"))
}

fn list(handle: &Handle, ordered: bool, attrs: &[Attribute]) -> String {
    let start: usize = attr(attrs, "start")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(1);

    let mut items = Vec::new();
    for child in handle.children.borrow().iter() {
        let is_item = matches!(
            &child.data,
            NodeData::Element { name, .. } if name.local.as_ref() == "li"
        );
        if !is_item {
            continue;
        }

        let marker = if ordered {
            format!("{}. ", start + items.len())
        } else {
            "- ".to_string()
        };
        let raw = children(child);
        let content = escape_line_starts(&tidy(&raw), !opens_with_block(&raw));
        let indent = " ".repeat(marker.len());
        let mut lines = content.lines();
        let mut item = format!("{marker}{}", lines.next().unwrap_or_default());
        for line in lines {
            item.push('\n');
            if !line.is_empty() {
                item.push_str(&indent);
                item.push_str(line);
            }
        }
        items.push(item);
    }

    if items.is_empty() {
        String::new()
    } else {
        block(&items.join("\n"))
    }
}

fn table(handle: &Handle) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    collect_rows(handle, &mut rows);
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let render_row = |cells: &[String]| {
        let mut padded: Vec<&str> = cells.iter().map(String::as_str).collect();
        padded.resize(columns, "");
        format!("| {} |", padded.join(" | "))
    };

    let mut lines = vec![render_row(&rows[0])];
    lines.push(format!("|{}", " --- |".repeat(columns)));
    for row in &rows[1..] {
        lines.push(render_row(row));
    }
    block(&lines.join("\n"))
}

fn collect_rows(handle: &Handle, rows: &mut Vec<Vec<String>>) {
    for child in handle.children.borrow().iter() {
        let NodeData::Element { name, .. } = &child.data else {
            continue;
        };
        match name.local.as_ref() {
            "thead" | "tbody" | "tfoot" => collect_rows(child, rows),
            "tr" => {
                let mut cells = Vec::new();
                for cell in child.children.borrow().iter() {
                    if let NodeData::Element { name, .. } = &cell.data {
                        if matches!(name.local.as_ref(), "td" | "th") {
                            let content = single_line(&children(cell));
                            cells.push(content.replace('|', "\\|"));
                        }
                    }
                }
                rows.push(cells);
            }
            _ => {}
        }
    }
}

fn attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| a.name.local.as_ref() == name)
        .map(|a| a.value.to_string())
}

/// Concatenated text of all descendants, untouched.
fn collect_text(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text_into(handle, &mut out);
    out
}

fn collect_text_into(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if name.local.as_ref() == "br" => out.push('\n'),
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text_into(child, out);
            }
        }
    }
}

fn block(content: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("\n\n{content}\n\n")
    }
}

/// Wrap inline content in a delimiter, keeping surrounding whitespace outside it.
fn wrap_inline(content: &str, delimiter: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }
    let leading = if content.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if content.ends_with(char::is_whitespace) { " " } else { "" };
    format!("{leading}{delimiter}{trimmed}{delimiter}{trailing}")
}

/// The fence is one backtick longer than the longest backtick run inside the code.
fn code_span(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    if longest_run == 0 {
        format!("`{code}`")
    } else {
        let fence = "`".repeat(longest_run + 1);
        format!("{fence} {code} {fence}")
    }
}

fn destination(href: &str, title: Option<String>) -> String {
    let href = if href.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        // Angle-bracket destinations cannot span lines
        let href = href
            .replace('<', "%3C")
            .replace('>', "%3E")
            .replace('\n', "%0A")
            .replace('\r', "%0D");
        format!("<{href}>")
    } else {
        href.to_string()
    };
    match title {
        Some(title) if !title.is_empty() => {
            let title = title.replace('\\', "\\\\").replace('"', "\\\"");
            format!("{href} \"{title}\"")
        }
        _ => href,
    }
}

fn single_line(content: &str) -> String {
    WHITESPACE
        .replace_all(&content.replace("\\\n", " "), " ")
        .trim()
        .to_string()
}

fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '~' | '#' | '&'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Whether rendered children begin with a nested block rather than inline text.
fn opens_with_block(content: &str) -> bool {
    content.trim_start_matches(' ').starts_with('\n')
}

/// Escape block markers on the first line (when it is inline text) and on every line
/// that follows a hard break.
fn escape_line_starts(content: &str, first_line: bool) -> String {
    let mut escape_next = first_line;
    let mut lines = Vec::new();
    for line in content.split('\n') {
        if escape_next {
            lines.push(escape_line_start(line.trim_start()));
        } else {
            lines.push(line.to_string());
        }
        escape_next = line.ends_with('\\');
    }
    lines.join("\n")
}

/// Escape block markers a line could otherwise start with (`- `, `+ `, `1. `), and lines
/// of `-`/`=` that would read as a thematic break or setext underline.
fn escape_line_start(content: &str) -> String {
    if content.starts_with(['-', '='])
        && content.chars().all(|c| matches!(c, '-' | '=' | ' '))
    {
        return format!("\\{content}");
    }
    if let Some(rest) = content.strip_prefix('-').or_else(|| content.strip_prefix('+')) {
        let marker = &content[..1];
        if rest.is_empty() || rest.starts_with(' ') {
            return format!("\\{marker}{rest}");
        }
    }
    if let Some(caps) = ORDERED_MARKER.captures(content) {
        let whole = &caps[0];
        let rest = &content[whole.len()..];
        if rest.is_empty() || rest.starts_with(' ') {
            return format!("{}\\{}{rest}", &caps[1], &caps[2]);
        }
    }
    content.to_string()
}

/// Blank out whitespace-only lines and collapse runs of blank lines.
fn tidy(markdown: &str) -> String {
    let lines: Vec<&str> = markdown
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect();
    BLANK_RUNS
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}
