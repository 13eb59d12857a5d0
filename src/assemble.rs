//! Video assembly: drive scheduled frames into a sink at a fixed frame rate.
//!
//! Frame boundaries come from the cumulative scheduled time, so slides are
//! shown back-to-back with no gap or overlap and per-slide rounding never
//! accumulates into drift.

use crate::encode::sink::{AudioInput, FrameSink, SinkConfig};
use crate::foundation::core::{CANVAS_HEIGHT, CANVAS_WIDTH, Fps, FrameIndex};
use crate::foundation::error::{DeckcastError, DeckcastResult};
use crate::render::FrameRGBA;

/// Fixed output frame rate.
pub const VIDEO_FPS: Fps = Fps { num: 30, den: 1 };

/// A rendered frame paired with its computed display duration.
#[derive(Clone, Debug)]
pub struct ScheduledFrame {
    pub frame: FrameRGBA,
    /// Seconds this frame stays on screen (post-scheduling, real-valued).
    pub display_seconds: f64,
}

/// Stream `frames` into `sink` at `fps`, muxing `audio` from time zero.
///
/// Each frame `i` spans `[round(cum_i * fps), round(cum_{i+1} * fps))` in
/// output frames, where `cum` is the running sum of display durations; the
/// final boundary rounds up so the video track is never shorter than the
/// scheduled total (the sink's `-shortest` then bounds the container at the
/// audio length).
pub fn assemble(
    frames: &[ScheduledFrame],
    audio: AudioInput,
    fps: Fps,
    sink: &mut dyn FrameSink,
) -> DeckcastResult<()> {
    if frames.is_empty() {
        return Err(DeckcastError::assembly("no frames to assemble"));
    }
    if frames
        .iter()
        .any(|f| !f.display_seconds.is_finite() || f.display_seconds < 0.0)
    {
        return Err(DeckcastError::assembly(
            "scheduled display durations must be finite and non-negative",
        ));
    }

    sink.begin(SinkConfig {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        fps,
        audio: Some(audio),
    })?;

    let mut cumulative = 0.0f64;
    let mut next_idx = 0u64;
    for scheduled in frames {
        cumulative += scheduled.display_seconds;
        let end = fps.secs_to_frames_round(cumulative);
        while next_idx < end {
            sink.push_frame(FrameIndex(next_idx), &scheduled.frame)?;
            next_idx += 1;
        }
    }

    // The last slide holds through any final partial frame.
    let total = fps.secs_to_frames_ceil(cumulative);
    if let Some(last) = frames.last() {
        while next_idx < total {
            sink.push_frame(FrameIndex(next_idx), &last.frame)?;
            next_idx += 1;
        }
    }

    if next_idx == 0 {
        return Err(DeckcastError::assembly(
            "scheduled durations produced an empty video",
        ));
    }

    sink.end()
}

#[cfg(test)]
#[path = "../tests/unit/assemble.rs"]
mod tests;
