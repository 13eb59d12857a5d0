//! Job-status database client.
//!
//! Records the terminal outcome of a video job against its row: the public
//! video URL on success, or a `failed` marker on the failure path (where the
//! update itself is best-effort).

use std::time::Duration;

use crate::config::StorageConfig;
use crate::foundation::error::{DeckcastError, DeckcastResult};

const UPDATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Terminal video status recorded against the job row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Ready,
    Failed,
}

#[derive(serde::Serialize)]
struct StatusUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<&'a str>,
    video_status: VideoStatus,
}

/// Client for the job-status database collaborator.
pub struct StatusClient {
    http: reqwest::blocking::Client,
    cfg: StorageConfig,
}

impl StatusClient {
    pub fn new(cfg: StorageConfig) -> DeckcastResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(UPDATE_TIMEOUT)
            .build()
            .map_err(|e| {
                DeckcastError::collaborator(format!("failed to build status client: {e}"))
            })?;
        Ok(Self { http, cfg })
    }

    /// Mark the job ready with its public video URL.
    pub fn mark_ready(&self, podcast_id: &str, video_url: &str) -> DeckcastResult<()> {
        self.update(
            podcast_id,
            StatusUpdate {
                video_url: Some(video_url),
                video_status: VideoStatus::Ready,
            },
        )
    }

    /// Mark the job failed. Callers on the failure path treat errors from
    /// this call as secondary (logged, not propagated).
    pub fn mark_failed(&self, podcast_id: &str) -> DeckcastResult<()> {
        self.update(
            podcast_id,
            StatusUpdate {
                video_url: None,
                video_status: VideoStatus::Failed,
            },
        )
    }

    fn update(&self, podcast_id: &str, update: StatusUpdate<'_>) -> DeckcastResult<()> {
        let url = format!("{}/rest/v1/{}", self.cfg.base_url, self.cfg.table);

        let response = self
            .http
            .patch(&url)
            .query(&[("id", format!("eq.{podcast_id}"))])
            .bearer_auth(&self.cfg.service_key)
            .header("apikey", &self.cfg.service_key)
            .header("Prefer", "return=minimal")
            .json(&update)
            .send()
            .map_err(|e| DeckcastError::collaborator(format!("status update request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeckcastError::collaborator(format!(
                "status update for '{podcast_id}' returned {status}: {}",
                body.trim()
            )));
        }
        Ok(())
    }
}
