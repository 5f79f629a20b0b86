//! Episode composition tests

use chrono::DateTime;
use ssml_babel::podcast::{ending_ssml, opening_ssml};
use ssml_babel::{
    add_bgm, compose_podcast, AudioSpec, Channel, ConvertError, MediaIdSource, PodcastContent,
    PodcastOptions,
};

/// Hands out `id1`, `id2`, ... so envelopes are predictable.
#[derive(Default)]
struct SequentialIds(usize);

impl MediaIdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("id{}", self.0)
    }
}

fn options() -> PodcastOptions {
    PodcastOptions::new(
        AudioSpec::new("o.mp3")
            .with_intro(7.0)
            .with_afterglow(7.0)
            .with_fadeout(3.0)
            .with_sound_level(-10.0),
        AudioSpec::new("e.mp3")
            .with_intro(1.0)
            .with_afterglow(10.0)
            .with_fadeout(5.0)
            .with_sound_level(-6.0),
    )
}

fn episode(channel: Option<Channel>, body: &str) -> PodcastContent {
    PodcastContent {
        channel,
        title: "Ep".to_string(),
        desc_md_or_html_or_text: body.to_string(),
        publish_date: DateTime::parse_from_rfc3339("2021-03-04T09:05:00+09:00").unwrap(),
    }
}

fn channel(ending_md: Option<&str>) -> Channel {
    Channel {
        title: "Ch".to_string(),
        description: "Desc".to_string(),
        ending_md: ending_md.map(str::to_string),
    }
}

#[test]
fn test_full_episode() {
    let content = episode(Some(channel(Some("Bye"))), "Hello");
    let result = compose_podcast(&content, &options(), &mut SequentialIds::default()).unwrap();

    assert_eq!(
        result.ssml,
        concat!(
            "<speak>",
            r#"<par><media xml:id="bgm_id1" begin="7s"><speak>"#,
            r#"<emphasis level="strong">Ch</emphasis><break time="1s"/>"#,
            r#"Desc<break time="3s"/>"#,
            r#"2021年3月4日 9時5分<break time="0.5s"/>"#,
            r#"<emphasis level="strong">Ep</emphasis>"#,
            r#"</speak></media>"#,
            r#"<media end="bgm_id1.end+7s" fadeOutDur="3s" soundLevel="-10dB"><audio src="o.mp3"/></media></par>"#,
            r#"<break time="3s"/>"#,
            r#"<p>Hello</p><break time="0.75s"/>"#,
            r#"<par><media xml:id="bgm_id2" begin="1s"><speak><p>Bye</p><break time="0.75s"/></speak></media>"#,
            r#"<media end="bgm_id2.end+10s" fadeOutDur="5s" soundLevel="-6dB"><audio src="e.mp3"/></media></par>"#,
            "</speak>"
        )
    );
}

#[test]
fn test_episode_without_channel() {
    let content = episode(None, "Hello");
    let result = compose_podcast(&content, &options(), &mut SequentialIds::default()).unwrap();

    assert!(result
        .ssml
        .starts_with(r#"<speak><par><media xml:id="bgm_id1" begin="7s"><speak>2021年3月4日"#));
    assert!(result
        .ssml
        .ends_with(r#"<p>Hello</p><break time="0.75s"/></speak>"#));
    assert!(!result.ssml.contains("bgm_id2"));
}

#[test]
fn test_info_covers_body_only() {
    let content = episode(
        Some(channel(Some("[ending](http://e.example)"))),
        "[body](http://b.example)",
    );
    let result = compose_podcast(&content, &options(), &mut SequentialIds::default()).unwrap();

    assert_eq!(result.info.links.len(), 1);
    assert_eq!(
        result.info.links[0].href.as_deref(),
        Some("http://b.example")
    );
    assert!(result.ssml.contains(r#"<s class="link">ending</s>"#));
}

#[test]
fn test_titles_are_escaped() {
    let mut content = episode(None, "Body");
    content.title = "Q&A <live>".to_string();
    let opening = opening_ssml(&content, &options(), &mut SequentialIds::default()).unwrap();
    assert!(opening.contains(r#"<emphasis level="strong">Q&amp;A &lt;live&gt;</emphasis>"#));
}

#[test]
fn test_empty_ending_is_skipped() {
    let content = episode(Some(channel(Some(""))), "Body");
    assert_eq!(
        ending_ssml(&content, &options(), &mut SequentialIds::default()),
        Ok(None)
    );
}

#[test]
fn test_opening_equals_its_envelope() {
    let content = episode(None, "Body");
    let opening = opening_ssml(&content, &options(), &mut SequentialIds::default()).unwrap();
    let expected = add_bgm(
        r#"<speak>2021年3月4日 9時5分<break time="0.5s"/><emphasis level="strong">Ep</emphasis></speak>"#,
        &options().opening,
        &mut SequentialIds::default(),
    );
    assert_eq!(opening, format!(r#"{expected}<break time="3s"/>"#));
}

#[test]
fn test_custom_date_format() {
    let content = episode(None, "Body");
    let options = options().with_date_format("%Y-%m-%d");
    let opening = opening_ssml(&content, &options, &mut SequentialIds::default()).unwrap();
    assert!(opening.contains(r#"2021-03-04<break time="0.5s"/>"#));

    let broken = PodcastOptions {
        date_format: "%Q".to_string(),
        ..options
    };
    assert_eq!(
        compose_podcast(&content, &broken, &mut SequentialIds::default()),
        Err(ConvertError::DateFormat("%Q".to_string()))
    );
}
