//! Escaping helpers for emitted markup.
//!
//! SSML is XML, so literal document text must never carry raw `<`, `>` or `&` into the
//! output stream. Attribute values additionally escape `"`.

/// Escape text content for an XML text node.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a double-quoted XML attribute.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
