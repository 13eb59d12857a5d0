//! Per-slide background resolution.
//!
//! One landscape image-search request per slide; the full image is fetched
//! and resized (not cropped) to the canvas. Background resolution must never
//! fail a job: every failure path, from transport errors to undecodable
//! bytes, yields the solid fallback color instead.

use std::time::Duration;

use image::RgbaImage;

use crate::config::ImageSearchConfig;
use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::foundation::error::{DeckcastError, DeckcastResult};

/// Solid fallback color: dark slate.
const FALLBACK_RGB: [u8; 3] = [44, 62, 80];

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, serde::Deserialize)]
struct SearchResult {
    urls: SearchUrls,
}

#[derive(Debug, serde::Deserialize)]
struct SearchUrls {
    regular: String,
}

/// Resolves a search term to a canvas-sized background image.
pub struct BackgroundResolver {
    http: reqwest::blocking::Client,
    cfg: ImageSearchConfig,
}

impl BackgroundResolver {
    pub fn new(cfg: ImageSearchConfig) -> DeckcastResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(|e| {
                DeckcastError::collaborator(format!("failed to build image-search client: {e}"))
            })?;
        Ok(Self { http, cfg })
    }

    /// Resolve `query` to a 1920x1080 background.
    ///
    /// Infallible by contract: search/network/decode failures fall back to
    /// the solid color.
    pub fn resolve(&self, query: &str) -> RgbaImage {
        match self.search_and_fetch(query) {
            Ok(img) => img,
            Err(err) => {
                tracing::warn!(query, %err, "background search failed, using fallback color");
                fallback_background()
            }
        }
    }

    fn search_and_fetch(&self, query: &str) -> DeckcastResult<RgbaImage> {
        let response = self
            .http
            .get(format!("{}/search/photos", self.cfg.base_url))
            .query(&[
                ("query", query),
                ("orientation", "landscape"),
                ("per_page", "1"),
            ])
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.cfg.access_key),
            )
            .send()
            .map_err(|e| DeckcastError::collaborator(format!("image search request: {e}")))?;

        if !response.status().is_success() {
            return Err(DeckcastError::collaborator(format!(
                "image search returned {}",
                response.status()
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .map_err(|e| DeckcastError::collaborator(format!("image search response: {e}")))?;
        let image_url = parsed
            .results
            .into_iter()
            .next()
            .map(|r| r.urls.regular)
            .ok_or_else(|| {
                DeckcastError::collaborator(format!("image search for '{query}' had no results"))
            })?;

        let bytes = self
            .http
            .get(&image_url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(|e| DeckcastError::collaborator(format!("image fetch: {e}")))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| DeckcastError::render(format!("image decode: {e}")))?;

        // Stretch to the canvas; aspect ratio is intentionally discarded.
        Ok(decoded
            .resize_exact(
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                image::imageops::FilterType::Triangle,
            )
            .to_rgba8())
    }
}

/// The solid-color background used whenever search cannot produce an image.
pub fn fallback_background() -> RgbaImage {
    RgbaImage::from_pixel(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        image::Rgba([FALLBACK_RGB[0], FALLBACK_RGB[1], FALLBACK_RGB[2], 255]),
    )
}
