use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::DeckcastResult;
use crate::render::FrameRGBA;
use std::path::PathBuf;

/// Configuration provided to a [`FrameSink`] before any frames are pushed.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Optional encoded audio input muxed from time zero.
    pub audio: Option<AudioInput>,
}

/// Encoded audio file (mp3/aac/wav container as fetched) muxed into the
/// output unmodified.
#[derive(Debug, Clone)]
pub struct AudioInput {
    /// Path to the audio file inside the job workspace.
    pub path: PathBuf,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing
/// [`FrameIndex`] order between `begin` and `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> DeckcastResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> DeckcastResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> DeckcastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> DeckcastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> DeckcastResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> DeckcastResult<()> {
        Ok(())
    }
}
