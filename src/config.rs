//! Runtime configuration.
//!
//! Clients are constructed from these values and injected into the pipeline;
//! nothing here is a process-wide singleton, so jobs stay independently
//! testable with per-test endpoints.

use std::env;
use std::path::PathBuf;

use crate::foundation::error::{DeckcastError, DeckcastResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub image_search: ImageSearchConfig,
    pub tts: TtsConfig,
    pub storage: StorageConfig,
    /// Optional directory searched first for layout fonts.
    pub font_dir: Option<PathBuf>,
}

/// Image-search collaborator endpoint and credentials.
#[derive(Debug, Clone)]
pub struct ImageSearchConfig {
    pub base_url: String,
    pub access_key: String,
}

/// Dialogue-synthesis collaborator endpoint and credentials.
#[derive(Debug, Clone)]
pub struct TtsConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Object storage + job-status database endpoint and credentials.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub service_key: String,
    pub bucket: String,
    pub table: String,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// `.env` files are honored when present. Only the credentials required
    /// by the collaborators a job actually touches need to be set; endpoint
    /// URLs default to the hosted services.
    pub fn from_env() -> DeckcastResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            image_search: ImageSearchConfig {
                base_url: env_or("DECKCAST_IMAGE_SEARCH_URL", "https://api.unsplash.com"),
                access_key: required_env("UNSPLASH_ACCESS_KEY")?,
            },
            tts: TtsConfig {
                base_url: env_or("DECKCAST_TTS_URL", "https://api.elevenlabs.io"),
                api_key: required_env("ELEVENLABS_API_KEY")?,
            },
            storage: StorageConfig {
                base_url: required_env("SUPABASE_URL")?,
                service_key: required_env("SUPABASE_SERVICE_KEY")?,
                bucket: env_or("DECKCAST_STORAGE_BUCKET", "podcast-audio"),
                table: env_or("DECKCAST_STATUS_TABLE", "podcasts"),
            },
            font_dir: env::var("DECKCAST_FONT_DIR").ok().map(PathBuf::from),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required_env(key: &str) -> DeckcastResult<String> {
    env::var(key)
        .map_err(|_| DeckcastError::input(format!("missing required environment variable {key}")))
}
