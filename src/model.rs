//! Wire model for inbound job requests and the structured response payload.
//!
//! These types mirror the JSON the service accepts: a video job is an ordered
//! slide deck plus an audio reference and a job id; a dialogue job is an
//! ordered list of speaker-tagged turns.

use std::path::PathBuf;

use crate::foundation::error::{DeckcastError, DeckcastResult};

/// Layout family for a slide, derived from its free-form `slide_type` tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    #[default]
    Bullets,
    Quote,
    /// Anything unrecognized renders with the minimal fallback layout.
    Other,
}

/// Slide body content: either free text or an ordered list of bullet points.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SlideContent {
    Text(String),
    Items(Vec<String>),
}

impl SlideContent {
    /// View the content as an ordered list of items.
    pub fn as_items(&self) -> Vec<&str> {
        match self {
            SlideContent::Text(s) => vec![s.as_str()],
            SlideContent::Items(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Collapse the content into a single text value.
    ///
    /// For item lists this is the first item only; the fallback layout shows
    /// at most one line of body text.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            SlideContent::Text(s) => Some(s.as_str()),
            SlideContent::Items(items) => items.first().map(String::as_str),
        }
    }

    /// Join the content into one string for single-paragraph layouts.
    pub fn joined_text(&self) -> String {
        match self {
            SlideContent::Text(s) => s.clone(),
            SlideContent::Items(items) => items.join(" "),
        }
    }
}

/// One content unit of the deck.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Free-form layout tag; unknown values fall back to [`SlideKind::Other`].
    #[serde(default)]
    pub slide_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Only rendered by the title layout.
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: Option<SlideContent>,
    /// Background image search query.
    #[serde(default = "default_image_search")]
    pub image_search: String,
    /// Author-specified display time before scaling to the audio length.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
}

fn default_image_search() -> String {
    "abstract".to_string()
}

fn default_duration_seconds() -> f64 {
    10.0
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            slide_type: None,
            title: None,
            subtitle: None,
            content: None,
            image_search: default_image_search(),
            duration_seconds: default_duration_seconds(),
        }
    }
}

impl Slide {
    /// Resolve the layout family; missing tags default to bullets.
    pub fn kind(&self) -> SlideKind {
        match self.slide_type.as_deref() {
            Some("title") => SlideKind::Title,
            Some("bullets") | None => SlideKind::Bullets,
            Some("quote") => SlideKind::Quote,
            Some(_) => SlideKind::Other,
        }
    }
}

/// One speaker-attributed line submitted to dialogue synthesis.
///
/// Passed through to the TTS collaborator unmodified.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DialogueTurn {
    pub text: String,
    pub voice_id: String,
}

/// Inbound payload for a video assembly job.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct VideoJobRequest {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub podcast_id: Option<String>,
}

/// Inbound payload for dialogue audio synthesis.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DialogueRequest {
    #[serde(default)]
    pub dialogue: Vec<DialogueTurn>,
}

/// Where a job's narration audio comes from.
#[derive(Clone, Debug)]
pub enum AudioSource {
    /// Remote audio fetched into the job workspace before probing.
    Url(String),
    /// Audio already on disk (tests, pre-synthesized dialogue output).
    File(PathBuf),
}

/// A validated unit of work: ordered slides, an audio source, and a job id.
#[derive(Clone, Debug)]
pub struct VideoJob {
    pub podcast_id: String,
    pub slides: Vec<Slide>,
    pub audio: AudioSource,
}

impl VideoJob {
    /// Validate an inbound request into a job.
    ///
    /// Fails fast with an [`DeckcastError::Input`] before any external side
    /// effect when a required field is missing or empty.
    pub fn from_request(req: &VideoJobRequest) -> DeckcastResult<Self> {
        let audio_url = req.audio_url.as_deref().unwrap_or("");
        let podcast_id = req.podcast_id.as_deref().unwrap_or("");
        if req.slides.is_empty() || audio_url.is_empty() || podcast_id.is_empty() {
            return Err(DeckcastError::input(
                "slides, audio_url, and podcast_id required",
            ));
        }
        Ok(Self {
            podcast_id: podcast_id.to_string(),
            slides: req.slides.clone(),
            audio: AudioSource::Url(audio_url.to_string()),
        })
    }
}

/// Structured job outcome returned to the caller.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct JobResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

impl JobResponse {
    /// Successful video job: public URL plus output size in megabytes.
    pub fn video_ready(video_url: impl Into<String>, size_bytes: u64) -> Self {
        let size_mb = (size_bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0;
        Self {
            success: true,
            video_url: Some(video_url.into()),
            size_mb: Some(size_mb),
            audio_base64: None,
            size_bytes: None,
            error: None,
            traceback: None,
        }
    }

    /// Successful dialogue synthesis: base64 audio plus raw byte size.
    pub fn dialogue_ready(audio: &[u8]) -> Self {
        use base64::Engine as _;
        Self {
            success: true,
            video_url: None,
            size_mb: None,
            audio_base64: Some(base64::engine::general_purpose::STANDARD.encode(audio)),
            size_bytes: Some(audio.len() as u64),
            error: None,
            traceback: None,
        }
    }

    /// Failure outcome carrying the message and the full diagnostic chain.
    pub fn failure(err: &DeckcastError) -> Self {
        Self {
            success: false,
            video_url: None,
            size_mb: None,
            audio_base64: None,
            size_bytes: None,
            error: Some(err.message()),
            traceback: Some(err.trace()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
