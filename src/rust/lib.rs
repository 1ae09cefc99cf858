//! Predicts a graduate's degree classification from survey answers.
//!
//! Answers are validated for completeness, encoded into a fixed-width
//! feature vector following the survey's field registry, normalized by a
//! fitted scaler and classified by a pre-trained ONNX model. The predicted
//! code is decoded back to a classification name.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use degree_predictor::{AnswerSet, ArtifactManager, Predictor};
//!
//! let predictor = Predictor::builder()
//!     .with_artifacts(&ArtifactManager::new_default()?)?
//!     .build()?;
//!
//! let answers = AnswerSet::new()
//!     .with("AgeAtEnrollment", "21 - 23 years")
//!     .with("Gender", "Female")
//!     .with("TransportMode", vec!["Public bus / train"]);
//!     // ... one answer per survey question
//!
//! let prediction = predictor.predict(&answers)?;
//! println!("{}", prediction);
//! # Ok(())
//! # }
//! ```
//!
//! # Encoding Only
//!
//! The encoder needs no model and can be used on its own:
//!
//! ```
//! use degree_predictor::{encode, AnswerSet, FieldRegistry};
//!
//! let registry = FieldRegistry::survey();
//! let answers = AnswerSet::blank(registry);
//! assert!(answers.validate(registry).is_err());
//! assert!(encode(registry, &answers).is_err());
//! assert_eq!(registry.width(), 53);
//! ```

pub mod artifact_manager;
pub mod encoder;
pub mod predictor;
mod runtime;
pub mod survey;

pub use artifact_manager::{ArtifactError, ArtifactManager, ArtifactManifest};
pub use encoder::{encode, EncodeError, FeatureVector};
pub use predictor::{
    BuildError, IdentityScaler, Model, OnnxClassifier, PipelineError, PredictError, Prediction, Predictor,
    PredictorBuilder, PredictorInfo, Scaler, StandardScaler,
};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use survey::{
    decode, AnswerSet, DegreeClass, FieldDefinition, FieldKind, FieldRegistry, IncompleteInputError, RawAnswer,
    RegistryError, NOT_ANSWERED, UNKNOWN_LABEL,
};

pub fn init_logger() {
    env_logger::init();
}
