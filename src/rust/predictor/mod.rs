mod builder;
mod error;
mod model;
mod pipeline;
mod scaler;

pub use builder::PredictorBuilder;
pub use error::{BuildError, PipelineError, PredictError};
pub use model::{Model, OnnxClassifier};
pub use pipeline::{Prediction, Predictor};
pub use scaler::{IdentityScaler, Scaler, StandardScaler};

/// Information about a predictor's configuration
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    /// Path to the ONNX model file, if loaded from disk
    pub model_path: Option<String>,
    /// Path to the scaler parameters, if loaded from disk
    pub scaler_path: Option<String>,
    /// Number of survey questions
    pub num_fields: usize,
    /// Length of the encoded feature vector
    pub feature_width: usize,
    /// Classification names the model can produce
    pub class_labels: Vec<String>,
}
