//! Dialogue synthesis client.
//!
//! Submits the ordered speaker-tagged turns to the TTS collaborator and
//! returns the concatenated audio bytes. The turn list is opaque beyond
//! pass-through; an empty list is rejected before any network call.

use std::time::Duration;

use crate::config::TtsConfig;
use crate::foundation::error::{DeckcastError, DeckcastResult};
use crate::model::DialogueTurn;

const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(serde::Serialize)]
struct DialogueBody<'a> {
    inputs: &'a [DialogueTurn],
}

/// Client for the dialogue-synthesis collaborator.
pub struct DialogueSynthesizer {
    http: reqwest::blocking::Client,
    cfg: TtsConfig,
}

impl DialogueSynthesizer {
    pub fn new(cfg: TtsConfig) -> DeckcastResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(SYNTHESIS_TIMEOUT)
            .build()
            .map_err(|e| DeckcastError::collaborator(format!("failed to build tts client: {e}")))?;
        Ok(Self { http, cfg })
    }

    /// Synthesize the dialogue into one concatenated audio stream.
    pub fn synthesize(&self, dialogue: &[DialogueTurn]) -> DeckcastResult<Vec<u8>> {
        if dialogue.is_empty() {
            return Err(DeckcastError::input("no dialogue provided"));
        }

        let response = self
            .http
            .post(format!("{}/v1/text-to-dialogue", self.cfg.base_url))
            .header("xi-api-key", &self.cfg.api_key)
            .json(&DialogueBody { inputs: dialogue })
            .send()
            .map_err(|e| DeckcastError::collaborator(format!("dialogue synthesis request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeckcastError::collaborator(format!(
                "dialogue synthesis returned {status}: {}",
                body.trim()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| DeckcastError::collaborator(format!("dialogue synthesis body: {e}")))?;
        if bytes.is_empty() {
            return Err(DeckcastError::collaborator(
                "dialogue synthesis returned no audio",
            ));
        }
        Ok(bytes.to_vec())
    }
}
