//! Object storage client: upload the assembled video and derive its public
//! retrieval URL.

use std::time::Duration;

use crate::config::StorageConfig;
use crate::foundation::error::{DeckcastError, DeckcastResult};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the object-storage collaborator.
pub struct StorageClient {
    http: reqwest::blocking::Client,
    cfg: StorageConfig,
}

impl StorageClient {
    pub fn new(cfg: StorageConfig) -> DeckcastResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| {
                DeckcastError::collaborator(format!("failed to build storage client: {e}"))
            })?;
        Ok(Self { http, cfg })
    }

    /// Upload `bytes` under `filename` and return the public URL.
    pub fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> DeckcastResult<String> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.cfg.base_url, self.cfg.bucket, filename
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.cfg.service_key)
            .header("apikey", &self.cfg.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(bytes)
            .send()
            .map_err(|e| DeckcastError::collaborator(format!("storage upload request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeckcastError::collaborator(format!(
                "storage upload of '{filename}' returned {status}: {}",
                body.trim()
            )));
        }

        Ok(self.public_url(filename))
    }

    /// Public retrieval URL for an object in the configured bucket.
    pub fn public_url(&self, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.cfg.base_url, self.cfg.bucket, filename
        )
    }
}
