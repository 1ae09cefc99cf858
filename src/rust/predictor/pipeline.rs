use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use super::error::{PipelineError, PredictError};
use super::model::Model;
use super::scaler::Scaler;
use crate::encoder::{encode, FeatureVector};
use crate::survey::{decode, AnswerSet, DegreeClass, FieldRegistry, CLASSIFICATION_TABLE};

/// A decoded model prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Raw code returned by the model
    pub code: i64,
    /// Classification for the code, `None` when the code is unknown
    pub class: Option<DegreeClass>,
    /// Classification name, or `"Unknown"`
    pub label: &'static str,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted degree classification: {}", self.label)
    }
}

/// Validates, encodes, scales and classifies survey answers.
///
/// # Thread Safety
///
/// `Predictor` is `Send + Sync`: the registry, scaler and model are
/// shared read-only behind `Arc`, so one instance can serve concurrent
/// requests without locking.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use degree_predictor::{AnswerSet, ArtifactManager, Predictor};
///
/// let predictor = Predictor::builder()
///     .with_artifacts(&ArtifactManager::new_default()?)?
///     .build()?;
///
/// let answers: AnswerSet = serde_json::from_str(&std::fs::read_to_string("answers.json")?)?;
/// match predictor.predict(&answers) {
///     Ok(prediction) => println!("{}", prediction),
///     Err(e) => eprintln!("{}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Predictor {
    pub(crate) registry: Arc<FieldRegistry>,
    pub(crate) scaler: Arc<dyn Scaler>,
    pub(crate) model: Arc<dyn Model>,
    pub(crate) scaler_path: Option<String>,
    pub(crate) model_path: Option<String>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Predictor>();
    }
};

impl Predictor {
    /// Creates a new PredictorBuilder for fluent construction
    pub fn builder() -> super::builder::PredictorBuilder {
        super::builder::PredictorBuilder::new()
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns information about the predictor's configuration
    pub fn info(&self) -> super::PredictorInfo {
        super::PredictorInfo {
            model_path: self.model_path.clone(),
            scaler_path: self.scaler_path.clone(),
            num_fields: self.registry.len(),
            feature_width: self.registry.width(),
            class_labels: CLASSIFICATION_TABLE
                .iter()
                .map(|(_, class)| class.label().to_string())
                .collect(),
        }
    }

    /// Checks completeness and encodes, without running the model.
    pub fn encode(&self, answers: &AnswerSet) -> Result<FeatureVector, PredictError> {
        answers.validate(&self.registry)?;
        encode(&self.registry, answers).map_err(|e| PredictError::Pipeline(PipelineError::Encoding(e)))
    }

    /// Predicts the degree classification for one respondent.
    ///
    /// Incomplete answers are rejected before anything is encoded, so the
    /// scaler and model only ever see full feature vectors. Nothing is
    /// retried or cached.
    pub fn predict(&self, answers: &AnswerSet) -> Result<Prediction, PredictError> {
        let features = self.encode(answers)?;
        debug!("Feature vector: {}", features.view());

        let scaled = self.scaler.transform(&features.into_batch())?;
        let code = self.model.predict(&scaled)?;
        let label = decode(code);
        info!("Model predicted code {} ({})", code, label);

        Ok(Prediction {
            code,
            class: DegreeClass::from_code(code),
            label,
        })
    }
}
