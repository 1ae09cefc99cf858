use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use ndarray::Array2;
use ort::session::Session;
use ort::value::{Tensor, ValueType};

use super::error::PipelineError;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// A trained classifier mapping a scaled feature batch to a class code.
pub trait Model: Send + Sync + fmt::Debug {
    /// Returns the predicted code for the first row of `features`.
    fn predict(&self, features: &Array2<f32>) -> Result<i64, PipelineError>;

    /// Number of input columns the model was trained on, if known.
    fn input_width(&self) -> Option<usize> {
        None
    }
}

/// Classifier exported to ONNX, run through ONNX Runtime.
///
/// The model is expected to:
/// - take a single `float` tensor of shape `[batch, features]`
/// - emit the predicted `int64` labels as its first output
///
/// which is the layout produced when converting scikit-learn classifiers.
#[derive(Debug)]
pub struct OnnxClassifier {
    model_path: String,
    session: Session,
    input_name: String,
    input_width: Option<usize>,
}

impl OnnxClassifier {
    pub fn from_file<P: AsRef<Path>>(path: P, config: &RuntimeConfig) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::Model(format!("Model file not found: {}", path.display())));
        }

        let session = create_session_builder(config)?
            .commit_from_file(path)
            .map_err(|e| {
                log::error!("Failed to load model {:?}: {}", path, e);
                PipelineError::Model(format!("Failed to load model: {}", e))
            })?;
        Self::validate_model(&session)?;

        let input = &session.inputs[0];
        let input_name = input.name.clone();
        let input_width = match &input.input_type {
            ValueType::Tensor { dimensions, .. } => {
                dimensions.last().and_then(|&d| usize::try_from(d).ok())
            }
            _ => None,
        };
        log::info!(
            "Loaded model {:?} (input '{}', width {:?})",
            path,
            input_name,
            input_width
        );

        Ok(Self {
            model_path: path.to_string_lossy().to_string(),
            session,
            input_name,
            input_width,
        })
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    fn validate_model(session: &Session) -> Result<(), PipelineError> {
        if session.inputs.len() != 1 {
            return Err(PipelineError::Model(format!(
                "Model must have exactly 1 input (the feature tensor), found {}",
                session.inputs.len()
            )));
        }
        if session.outputs.is_empty() {
            return Err(PipelineError::Model(
                "Model must have at least 1 output for labels".to_string(),
            ));
        }
        Ok(())
    }
}

impl Model for OnnxClassifier {
    fn predict(&self, features: &Array2<f32>) -> Result<i64, PipelineError> {
        let input = Tensor::from_array(features.as_standard_layout().into_owned())
            .map_err(|e| PipelineError::Model(format!("Failed to create input tensor: {}", e)))?;

        let mut input_tensors = HashMap::new();
        input_tensors.insert(self.input_name.as_str(), input);

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| PipelineError::Model(format!("Failed to run model: {}", e)))?;
        let labels = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| PipelineError::Model(format!("Failed to extract labels: {}", e)))?;

        labels
            .iter()
            .next()
            .copied()
            .ok_or_else(|| PipelineError::Model("Model returned no labels".to_string()))
    }

    fn input_width(&self) -> Option<usize> {
        self.input_width
    }
}
