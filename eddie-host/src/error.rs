//! Host errors
//!
//! Everything here is fatal: `main` logs it and exits with status 1.

use eddie_core::{ControllerError, IndicatorError, VocabularyError};
use eddie_display::DisplayError;
use eddie_hal_firmata::LinkError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("board link: {0}")]
    Link(#[from] LinkError),

    #[error("vocabulary: {0}")]
    Vocabulary(VocabularyError),

    #[error("{0}")]
    Controller(ControllerError),

    #[error("cannot start {name} thread: {source}")]
    Thread {
        name: &'static str,
        source: std::io::Error,
    },

    #[error("board did not report its firmware within {0} s")]
    BoardTimeout(u64),

    #[error("board link lost")]
    LinkLost,
}

impl From<VocabularyError> for HostError {
    fn from(e: VocabularyError) -> Self {
        HostError::Vocabulary(e)
    }
}

impl From<ControllerError> for HostError {
    fn from(e: ControllerError) -> Self {
        HostError::Controller(e)
    }
}

impl From<DisplayError> for HostError {
    fn from(e: DisplayError) -> Self {
        HostError::Controller(ControllerError::Display(e))
    }
}

impl From<IndicatorError> for HostError {
    fn from(e: IndicatorError) -> Self {
        HostError::Controller(ControllerError::Indicator(e))
    }
}
