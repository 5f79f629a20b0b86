//! Reference tests: link/image labels, counters and HTML previews

use ssml_babel::{md_to_ssml, ConversionResult, Converter, Link, Phrases};

fn convert(source: &str) -> ConversionResult {
    md_to_ssml(Some(source), &Phrases::default())
        .expect("conversion to succeed")
        .expect("content to be present")
}

#[test]
fn test_heading_outline() {
    let result = convert("# A\n\n## B");
    assert_eq!(
        result.info.thumb_html,
        [
            r#"<div style="margin-left:0em;font-weight:bold">A</div>"#,
            r#"<div style="margin-left:1em;font-weight:bold">B</div>"#,
        ]
    );
}

#[test]
fn test_link_text_is_spoken() {
    let result = convert(r#"[Example](http://x "http://x")"#);
    assert_eq!(
        result.ssml,
        r#"<p><s class="link">Example</s></p><break time="0.75s"/>"#
    );
    assert_eq!(
        result.info.links,
        [Link {
            href: Some("http://x".to_string()),
            title: Some("http://x".to_string()),
            text: "Example".to_string(),
        }]
    );
    assert_eq!(
        result.info.thumb_html,
        [r#"<a href="http://x" title="http://x">Example</a>"#]
    );
}

#[test]
fn test_url_only_links_are_numbered() {
    let result =
        convert("[http://a.example](http://a.example) and [http://b.example](http://b.example)");
    assert_eq!(
        result.ssml,
        concat!(
            r#"<p><s class="link">URL Link 1</s> and <s class="link">URL Link 2</s></p>"#,
            r#"<break time="0.75s"/>"#
        )
    );
    assert_eq!(result.info.links.len(), 2);
}

#[test]
fn test_counters_reset_between_conversions() {
    let converter = Converter::new();
    for _ in 0..2 {
        let result = converter
            .convert(Some("[http://a.example](http://a.example)"))
            .unwrap()
            .unwrap();
        assert!(result.ssml.contains("URL Link 1"));
        assert!(!result.ssml.contains("URL Link 2"));
    }
}

#[test]
fn test_conversions_do_not_share_references() {
    let first = convert("[one](http://1.example)");
    let second = convert("# Only a heading");
    assert_eq!(first.info.links.len(), 1);
    assert!(second.info.links.is_empty());
    assert_eq!(second.info.thumb_html.len(), 1);
}

#[test]
fn test_image_label_precedence() {
    let result = convert(r#"![](a.png) ![](b.png "Chart") ![Cat](c.png) ![](d.png)"#);
    assert!(result.ssml.contains("<p>Image 1</p>"));
    assert!(result.ssml.contains("<p>「Chart」のイメージ</p>"));
    assert!(result.ssml.contains("<p>Cat</p>"));
    assert!(result.ssml.contains("<p>Image 2</p>"));
    assert_eq!(
        result.info.thumb_html[0],
        r#"<figure><img src="a.png"/><figcaption>Image 1</figcaption></figure>"#
    );
    assert_eq!(result.info.thumb_html.len(), 4);
    assert!(result.info.links.is_empty());
}

#[test]
fn test_previews_keep_document_order() {
    let result = convert("# H\n\n[l](http://l.example) ![i](i.png)");
    assert_eq!(result.info.thumb_html.len(), 3);
    assert!(result.info.thumb_html[0].starts_with("<div"));
    assert!(result.info.thumb_html[1].starts_with("<a"));
    assert!(result.info.thumb_html[2].starts_with("<figure>"));
}
