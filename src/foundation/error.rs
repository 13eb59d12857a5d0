/// Convenience alias used across the crate.
pub type DeckcastResult<T> = Result<T, DeckcastError>;

/// Error taxonomy for the video generation pipeline.
///
/// Variants map to how a failure is handled at the orchestrator boundary:
/// `Input` fails fast before any side effect, `Collaborator` covers external
/// service calls (background search failures are recovered with a fallback
/// before they ever surface here), `Render` and `Scheduling` are
/// pipeline-stage failures, and `Assembly` covers the encoder/muxer.
#[derive(thiserror::Error, Debug)]
pub enum DeckcastError {
    #[error("input error: {0}")]
    Input(String),

    #[error("collaborator error: {0}")]
    Collaborator(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("scheduling error: {0}")]
    Scheduling(String),

    #[error("assembly error: {0}")]
    Assembly(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckcastError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn scheduling(msg: impl Into<String>) -> Self {
        Self::Scheduling(msg.into())
    }

    pub fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly(msg.into())
    }

    /// The bare message without the taxonomy prefix.
    ///
    /// Response payloads carry this; the classified form stays in logs and
    /// diagnostic traces.
    pub fn message(&self) -> String {
        match self {
            Self::Input(msg)
            | Self::Collaborator(msg)
            | Self::Render(msg)
            | Self::Scheduling(msg)
            | Self::Assembly(msg) => msg.clone(),
            Self::Other(err) => err.to_string(),
        }
    }

    /// Render the full source chain for diagnostic responses.
    pub fn trace(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(src) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&src.to_string());
            source = std::error::Error::source(src);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
