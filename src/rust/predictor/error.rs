use ort::Error as OrtError;

use crate::artifact_manager::ArtifactError;
use crate::encoder::EncodeError;
use crate::survey::{IncompleteInputError, RegistryError};

/// Failure anywhere between a complete answer set and a predicted code.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Answers did not fit their fields
    #[error(transparent)]
    Encoding(#[from] EncodeError),
    /// Scaler could not be loaded or rejected the feature vector
    #[error("Scaler error: {0}")]
    Scaler(String),
    /// Model could not be loaded or failed to run
    #[error("Model error: {0}")]
    Model(String),
}

impl From<OrtError> for PipelineError {
    fn from(err: OrtError) -> Self {
        PipelineError::Model(err.to_string())
    }
}

/// Outcome of a failed [`Predictor::predict`](super::Predictor::predict) call.
///
/// The `Display` output is the message shown to the respondent.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// One or more questions were left unanswered; nothing was computed
    #[error(transparent)]
    IncompleteInput(#[from] IncompleteInputError),
    /// Encoding, scaling or model inference failed
    #[error("Error during prediction: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Errors raised while assembling a [`Predictor`](super::Predictor).
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No scaler configured")]
    MissingScaler,
    #[error("No model configured")]
    MissingModel,
    #[error("{0} already set")]
    AlreadySet(&'static str),
    #[error("{component} expects {actual} features but the registry produces {expected}")]
    WidthMismatch {
        component: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
