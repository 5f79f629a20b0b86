//! HTML input tests

use proptest::prelude::*;
use ssml_babel::html::strip_tags;
use ssml_babel::{html_to_markdown, is_html, md_to_ssml, Phrases};

fn ssml(source: &str) -> String {
    md_to_ssml(Some(source), &Phrases::default())
        .expect("conversion to succeed")
        .expect("content to be present")
        .ssml
}

#[test]
fn test_html_renders_like_equivalent_markdown() {
    assert_eq!(
        ssml("<h1>Title</h1><p>Hello <strong>world</strong>.</p>"),
        ssml("# Title\n\nHello **world**.")
    );
}

#[test]
fn test_html_links_are_labelled() {
    let result = md_to_ssml(
        Some(r#"<p><a href="https://a.example">https://a.example</a></p>"#),
        &Phrases::default(),
    )
    .unwrap()
    .unwrap();
    assert!(result.ssml.contains(r#"<s class="link">URL Link 1</s>"#));
    assert_eq!(
        result.info.links[0].href.as_deref(),
        Some("https://a.example")
    );
}

#[test]
fn test_html_lists_and_tables() {
    assert_eq!(
        ssml("<ul><li>one</li><li>two</li></ul>"),
        "<p><p>one</p><p>two</p></p>"
    );
    let table = ssml(
        "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>",
    );
    assert_eq!(table, "<p><p><p>A</p></p><p><p>1</p></p></p>");
}

#[test]
fn test_html_text_stays_literal() {
    assert_eq!(html_to_markdown("<p>1 * 2</p>").unwrap(), r"1 \* 2");
    assert_eq!(
        ssml("<p>1 * 2</p>"),
        r#"<p>1 * 2</p><break time="0.75s"/>"#
    );
}

#[test]
fn test_hard_break_lines_stay_text() {
    assert_eq!(ssml("<p>a<br>- b</p>"), r#"<p>a- b</p><break time="0.75s"/>"#);
    let numbered = ssml("<p>a<br>1. b</p>");
    assert!(numbered.contains("1. b"));
    assert!(!numbered.contains('\\'));
    assert!(!numbered.contains("<p><p>"));
}

#[test]
fn test_dash_only_paragraph_is_spoken() {
    assert_eq!(
        ssml("<p>a</p><p>---</p><p>b</p>"),
        concat!(
            r#"<p>a</p><break time="0.75s"/>"#,
            r#"<p>---</p><break time="0.75s"/>"#,
            r#"<p>b</p><break time="0.75s"/>"#
        )
    );
}

#[test]
fn test_code_with_backtick_runs() {
    assert_eq!(
        ssml("<p><code>a``b</code></p>"),
        r#"<p><say-as interpret-as="verbatim">a``b</say-as></p><break time="0.75s"/>"#
    );
}

proptest! {
    #[test]
    fn html_iff_stripping_shortens(text in "[a-z<> /=\"]*|\\PC*") {
        let stripped = strip_tags(&text);
        prop_assert_eq!(is_html(&text), stripped.len() < text.len());
        if !is_html(&text) {
            prop_assert_eq!(stripped, text);
        }
    }

    #[test]
    fn text_without_angle_brackets_is_not_html(text in "[^<>]*") {
        prop_assert!(!is_html(&text));
    }

    #[test]
    fn paragraph_wrapped_text_is_html(text in "[a-z ]*") {
        let wrapped = format!("<p>{text}</p>");
        prop_assert!(is_html(&wrapped));
    }
}
