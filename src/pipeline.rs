//! Job orchestration.
//!
//! Sequences the pipeline stages for one job and owns the failure policy:
//! input validation fails fast with no external side effects; any later
//! stage error triggers a best-effort `failed` status update (whose own
//! failure is logged and swallowed) and a structured failure response. No
//! error escapes the orchestrator boundary.

use image::RgbaImage;
use rayon::prelude::*;

use crate::assemble::{self, ScheduledFrame, VIDEO_FPS};
use crate::background::BackgroundResolver;
use crate::collab::status::StatusClient;
use crate::collab::storage::StorageClient;
use crate::collab::tts::DialogueSynthesizer;
use crate::config::Config;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::AudioInput;
use crate::foundation::core::Fps;
use crate::foundation::error::{DeckcastError, DeckcastResult};
use crate::media;
use crate::model::{
    AudioSource, DialogueRequest, JobResponse, VideoJob, VideoJobRequest,
};
use crate::render::{FontLibrary, FrameRGBA, SlideRenderer};
use crate::schedule;

/// Runs jobs end to end against injected collaborators.
pub struct Pipeline {
    resolver: BackgroundResolver,
    fonts: FontLibrary,
    tts: DialogueSynthesizer,
    storage: StorageClient,
    status: StatusClient,
    fps: Fps,
}

impl Pipeline {
    /// Construct a pipeline from configuration.
    ///
    /// Fails when a collaborator client cannot be built or no usable layout
    /// font exists on the machine.
    pub fn new(config: &Config) -> DeckcastResult<Self> {
        Ok(Self {
            resolver: BackgroundResolver::new(config.image_search.clone())?,
            fonts: FontLibrary::load(config.font_dir.as_deref())?,
            tts: DialogueSynthesizer::new(config.tts.clone())?,
            storage: StorageClient::new(config.storage.clone())?,
            status: StatusClient::new(config.storage.clone())?,
            fps: VIDEO_FPS,
        })
    }

    /// Run a video job, returning the structured outcome.
    ///
    /// Never returns an error: failures become `{success: false, error,
    /// traceback}` after the best-effort status update.
    #[tracing::instrument(skip(self, req), fields(podcast_id = req.podcast_id.as_deref()))]
    pub fn run_video(&self, req: &VideoJobRequest) -> JobResponse {
        match self.try_run_video(req) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%err, "video job failed");
                // Input errors fail fast before any external side effect, so
                // there is no job row state to correct.
                if !matches!(err, DeckcastError::Input(_))
                    && let Some(podcast_id) = req.podcast_id.as_deref()
                    && !podcast_id.is_empty()
                    && let Err(update_err) = self.status.mark_failed(podcast_id)
                {
                    tracing::warn!(%update_err, "failed-status update did not go through");
                }
                JobResponse::failure(&err)
            }
        }
    }

    /// Run a dialogue synthesis job, returning the structured outcome.
    pub fn run_dialogue(&self, req: &DialogueRequest) -> JobResponse {
        match self.tts.synthesize(&req.dialogue) {
            Ok(audio) => {
                tracing::info!(size_bytes = audio.len(), "dialogue synthesized");
                JobResponse::dialogue_ready(&audio)
            }
            Err(err) => {
                tracing::warn!(%err, "dialogue synthesis failed");
                JobResponse::failure(&err)
            }
        }
    }

    fn try_run_video(&self, req: &VideoJobRequest) -> DeckcastResult<JobResponse> {
        use anyhow::Context as _;

        let job = VideoJob::from_request(req)?;
        tracing::info!(slides = job.slides.len(), "starting video job");

        // All intermediate artifacts live here and are removed on every exit
        // path when the TempDir drops.
        let workspace = tempfile::tempdir().context("create job workspace")?;

        let audio_path = match &job.audio {
            AudioSource::Url(url) => {
                let path = workspace.path().join("audio.mp3");
                media::fetch_audio(url, &path)?;
                path
            }
            AudioSource::File(path) => path.clone(),
        };
        let audio_duration = media::probe_audio_duration(&audio_path)?;
        tracing::info!(audio_duration, "audio ready");

        let backgrounds: Vec<RgbaImage> = job
            .slides
            .iter()
            .map(|slide| self.resolver.resolve(&slide.image_search))
            .collect();

        // Per-slide rendering is independent; fan out with order preserved.
        let fonts = self.fonts.clone();
        let frames: Vec<FrameRGBA> = job
            .slides
            .par_iter()
            .zip(backgrounds.par_iter())
            .map_init(
                move || SlideRenderer::new(fonts.clone()),
                |renderer, (slide, background)| renderer.render(slide, background),
            )
            .collect::<DeckcastResult<Vec<_>>>()?;
        tracing::info!(frames = frames.len(), "slides rendered");

        let nominal: Vec<f64> = job.slides.iter().map(|s| s.duration_seconds).collect();
        let durations = schedule::schedule(&nominal, audio_duration)?;
        let scheduled: Vec<ScheduledFrame> = frames
            .into_iter()
            .zip(durations)
            .map(|(frame, display_seconds)| ScheduledFrame {
                frame,
                display_seconds,
            })
            .collect();

        let out_path = workspace.path().join("output.mp4");
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out_path));
        assemble::assemble(
            &scheduled,
            AudioInput {
                path: audio_path.clone(),
            },
            self.fps,
            &mut sink,
        )?;

        let video_bytes = std::fs::read(&out_path)
            .map_err(|e| DeckcastError::assembly(format!("read assembled video: {e}")))?;
        let size_bytes = video_bytes.len() as u64;
        tracing::info!(size_bytes, "video assembled");

        let filename = format!("{}_video.mp4", job.podcast_id);
        let video_url = self.storage.upload(&filename, video_bytes, "video/mp4", true)?;

        self.status.mark_ready(&job.podcast_id, &video_url)?;
        tracing::info!(%video_url, "video job complete");

        Ok(JobResponse::video_ready(video_url, size_bytes))
    }
}
