use super::*;

#[test]
fn slide_defaults_match_contract() {
    let slide: Slide = serde_json::from_str("{}").unwrap();
    assert_eq!(slide.kind(), SlideKind::Bullets);
    assert_eq!(slide.image_search, "abstract");
    assert_eq!(slide.duration_seconds, 10.0);
    assert!(slide.title.is_none());
    assert!(slide.content.is_none());
}

#[test]
fn slide_kind_mapping() {
    let mk = |ty: &str| Slide {
        slide_type: Some(ty.to_string()),
        ..Slide::default()
    };
    assert_eq!(mk("title").kind(), SlideKind::Title);
    assert_eq!(mk("bullets").kind(), SlideKind::Bullets);
    assert_eq!(mk("quote").kind(), SlideKind::Quote);
    assert_eq!(mk("chart").kind(), SlideKind::Other);
    assert_eq!(Slide::default().kind(), SlideKind::Bullets);
}

#[test]
fn content_accepts_text_or_items() {
    let text: Slide = serde_json::from_str(r#"{"content": "free text"}"#).unwrap();
    assert_eq!(
        text.content,
        Some(SlideContent::Text("free text".to_string()))
    );

    let items: Slide = serde_json::from_str(r#"{"content": ["a", "b"]}"#).unwrap();
    let content = items.content.unwrap();
    assert_eq!(content.as_items(), vec!["a", "b"]);
    assert_eq!(content.first_text(), Some("a"));
    assert_eq!(content.joined_text(), "a b");
}

#[test]
fn video_job_requires_all_fields() {
    let missing = VideoJobRequest {
        slides: vec![],
        audio_url: Some("https://example.com/a.mp3".to_string()),
        podcast_id: Some("p1".to_string()),
    };
    let err = VideoJob::from_request(&missing).unwrap_err();
    assert_eq!(
        err.to_string(),
        "input error: slides, audio_url, and podcast_id required"
    );

    let no_audio = VideoJobRequest {
        slides: vec![Slide::default()],
        audio_url: None,
        podcast_id: Some("p1".to_string()),
    };
    assert!(VideoJob::from_request(&no_audio).is_err());

    let blank_id = VideoJobRequest {
        slides: vec![Slide::default()],
        audio_url: Some("https://example.com/a.mp3".to_string()),
        podcast_id: Some(String::new()),
    };
    assert!(VideoJob::from_request(&blank_id).is_err());

    let ok = VideoJobRequest {
        slides: vec![Slide::default()],
        audio_url: Some("https://example.com/a.mp3".to_string()),
        podcast_id: Some("p1".to_string()),
    };
    let job = VideoJob::from_request(&ok).unwrap();
    assert_eq!(job.podcast_id, "p1");
    assert_eq!(job.slides.len(), 1);
}

#[test]
fn responses_serialize_without_empty_fields() {
    let ready = JobResponse::video_ready("https://cdn.example.com/v.mp4", 3 * 1024 * 1024);
    let json = serde_json::to_value(&ready).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["video_url"], "https://cdn.example.com/v.mp4");
    assert_eq!(json["size_mb"], 3.0);
    assert!(json.get("error").is_none());
    assert!(json.get("audio_base64").is_none());

    let failure = JobResponse::failure(&DeckcastError::assembly("encoder died"));
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["success"], false);
    // The response carries the bare message; the classified form stays in
    // the diagnostic trace.
    assert_eq!(json["error"], "encoder died");
    assert!(
        json["traceback"]
            .as_str()
            .unwrap()
            .contains("assembly error: encoder died")
    );
    assert!(json.get("video_url").is_none());
}

#[test]
fn dialogue_response_round_trips_base64() {
    use base64::Engine as _;
    let audio = vec![1u8, 2, 3, 4];
    let resp = JobResponse::dialogue_ready(&audio);
    assert_eq!(resp.size_bytes, Some(4));
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(resp.audio_base64.unwrap())
        .unwrap();
    assert_eq!(decoded, audio);
}
