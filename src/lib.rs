//! Deckcast turns a structured slide deck plus narration audio into an MP4.
//!
//! The pipeline is job-oriented:
//!
//! - Resolve a background image per slide (solid-color fallback on failure)
//! - Rasterize each slide onto the fixed 1920x1080 canvas
//! - Scale nominal slide durations so the deck spans the audio exactly
//! - Stream frames + audio through `ffmpeg` into a single MP4
//! - Upload the result and record the job status
#![forbid(unsafe_code)]

pub mod assemble;
pub mod background;
pub mod collab;
pub mod config;
pub mod encode;
pub mod foundation;
pub mod media;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod schedule;

pub use crate::assemble::{ScheduledFrame, VIDEO_FPS, assemble};
pub use crate::background::BackgroundResolver;
pub use crate::config::Config;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{AudioInput, FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas, Fps, FrameIndex};
pub use crate::foundation::error::{DeckcastError, DeckcastResult};
pub use crate::model::{
    DialogueRequest, DialogueTurn, JobResponse, Slide, SlideContent, SlideKind, VideoJobRequest,
};
pub use crate::pipeline::Pipeline;
pub use crate::render::{FontLibrary, FrameRGBA, SlideRenderer, TextLayoutEngine};
