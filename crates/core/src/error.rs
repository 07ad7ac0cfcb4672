use std::path::PathBuf;

use thiserror::Error;

use crate::session::Step;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between "operator typed a command" and
/// "response text printed". Raised at the point of detection and rendered
/// only by the command surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config file {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("service '{name}' not found in config")]
    ServiceNotFound { name: String },

    #[error("{0}")]
    InvalidUsage(String),

    /// Any failure inside the five-step browser protocol. The only variant
    /// that wraps a lower-level cause; `step` records how far the session got.
    #[error("automation failed during {step}: {source}")]
    Automation {
        step: Step,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    pub(crate) fn automation(step: Step, source: impl Into<anyhow::Error>) -> Self {
        Error::Automation {
            step,
            source: source.into(),
        }
    }
}
