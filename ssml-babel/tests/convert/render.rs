//! Rendering tests: one SSML template per Markdown construct

use ssml_babel::{md_to_ssml, render_markdown, Phrases, SsmlRenderer};

fn ssml(source: &str) -> String {
    md_to_ssml(Some(source), &Phrases::default())
        .expect("conversion to succeed")
        .expect("content to be present")
        .ssml
}

#[test]
fn test_heading_and_paragraph() {
    assert_eq!(
        ssml("# Title\n\nHello **world**."),
        concat!(
            r#"<break time="2s"/><emphasis level="strong">Title</emphasis><break time="0.5s"/>"#,
            r#"<p>Hello <emphasis level="strong">world</emphasis>.</p><break time="0.75s"/>"#
        )
    );
}

#[test]
fn test_inline_markers() {
    assert_eq!(
        ssml("*a* ~~b~~ `c`"),
        concat!(
            r#"<p><s class="em">a</s> <s class="del">b</s> "#,
            r#"<say-as interpret-as="verbatim">c</say-as></p><break time="0.75s"/>"#
        )
    );
}

#[test]
fn test_code_block_is_spelled_out() {
    assert_eq!(
        ssml("```sh\nls -a\n```"),
        r#"<say-as interpret-as="verbatim">ls -a</say-as>"#
    );
}

#[test]
fn test_blockquote_and_rule() {
    assert_eq!(
        ssml("> q"),
        r#"<p><p>q</p><break time="0.75s"/></p>"#
    );
    assert_eq!(
        ssml("a\n\n---\n\nb"),
        r#"<p>a</p><break time="0.75s"/><break time="3s"/><p>b</p><break time="0.75s"/>"#
    );
}

#[test]
fn test_tight_list_items_are_paragraphs() {
    assert_eq!(ssml("- one\n- two"), "<p><p>one</p><p>two</p></p>");
}

#[test]
fn test_task_items_speak_their_state() {
    let out = ssml("- [x] done\n- [ ] todo");
    assert!(out.contains("チェック済"));
    assert!(out.contains("未チェック"));
    assert!(out.contains("done"));
    assert!(out.contains("todo"));
    assert!(!out.contains("[x]"));
}

#[test]
fn test_table_flattens_header_and_body() {
    assert_eq!(
        ssml("| A | B |\n|---|---|\n| 1 | 2 |"),
        "<p><p><p>A</p><p>B</p></p><p><p>1</p><p>2</p></p></p>"
    );
}

#[test]
fn test_text_is_xml_escaped() {
    assert_eq!(
        ssml("a < b & c"),
        r#"<p>a &lt; b &amp; c</p><break time="0.75s"/>"#
    );
}

#[test]
fn test_raw_html_passes_through() {
    let phrases = Phrases::default();
    let mut renderer = SsmlRenderer::new(&phrases);
    let out = render_markdown("Say <audio src=\"ding.mp3\"/> now", &mut renderer);
    assert!(out.contains(r#"<audio src="ding.mp3"/>"#));
}

#[test]
fn test_custom_phrases() {
    let phrases = Phrases {
        url_link: "Link number {n}".to_string(),
        checked: "done:".to_string(),
        ..Phrases::default()
    };
    let result = md_to_ssml(Some("[http://a.example](http://a.example)\n\n- [x] task"), &phrases)
        .unwrap()
        .unwrap();
    assert!(result.ssml.contains(r#"<s class="link">Link number 1</s>"#));
    assert!(result.ssml.contains("done:"));
}
