//! Audio source handling: fetch into the job workspace and probe duration.

use std::path::Path;
use std::time::Duration;

use crate::foundation::error::{DeckcastError, DeckcastResult};

/// Timeout for fetching the narration audio.
const AUDIO_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Download the narration audio to `dest`.
pub fn fetch_audio(url: &str, dest: &Path) -> DeckcastResult<()> {
    let http = reqwest::blocking::Client::builder()
        .timeout(AUDIO_FETCH_TIMEOUT)
        .build()
        .map_err(|e| DeckcastError::collaborator(format!("failed to build audio client: {e}")))?;

    let bytes = http
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.bytes())
        .map_err(|e| DeckcastError::collaborator(format!("audio fetch from '{url}': {e}")))?;

    if bytes.is_empty() {
        return Err(DeckcastError::collaborator(format!(
            "audio fetch from '{url}' returned no data"
        )));
    }

    std::fs::write(dest, &bytes).map_err(|e| {
        DeckcastError::collaborator(format!("write audio to '{}': {e}", dest.display()))
    })?;
    Ok(())
}

/// Probe the duration of an audio file in seconds through `ffprobe`.
pub fn probe_audio_duration(path: &Path) -> DeckcastResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(|e| DeckcastError::collaborator(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(DeckcastError::collaborator(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| DeckcastError::collaborator(format!("ffprobe json parse failed: {e}")))?;
    let duration = parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|d| d.trim().parse::<f64>().ok())
        .ok_or_else(|| {
            DeckcastError::collaborator(format!(
                "ffprobe reported no duration for '{}'",
                path.display()
            ))
        })?;

    if !duration.is_finite() || duration <= 0.0 {
        return Err(DeckcastError::collaborator(format!(
            "audio duration must be positive, got {duration}"
        )));
    }
    Ok(duration)
}

/// Return `true` when `ffmpeg` and `ffprobe` can be invoked from `PATH`.
pub fn media_tools_available() -> bool {
    crate::encode::ffmpeg::is_ffmpeg_on_path()
        && std::process::Command::new("ffprobe")
            .arg("-version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
}
