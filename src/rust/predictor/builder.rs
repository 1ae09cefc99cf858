use std::path::Path;
use std::sync::Arc;

use log::info;

use super::error::BuildError;
use super::model::{Model, OnnxClassifier};
use super::pipeline::Predictor;
use super::scaler::{Scaler, StandardScaler};
use crate::artifact_manager::ArtifactManager;
use crate::runtime::RuntimeConfig;
use crate::survey::FieldRegistry;

/// A builder for constructing a Predictor with a fluent interface.
#[derive(Default, Debug)]
pub struct PredictorBuilder {
    registry: Option<FieldRegistry>,
    scaler: Option<Arc<dyn Scaler>>,
    model: Option<Arc<dyn Model>>,
    scaler_path: Option<String>,
    model_path: Option<String>,
    runtime_config: RuntimeConfig,
}

impl PredictorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ONNX Runtime configuration used by [`with_model_file`](Self::with_model_file)
    /// and [`with_artifacts`](Self::with_artifacts). Set it before loading a model.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Replaces the built-in survey registry.
    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_scaler(mut self, scaler: impl Scaler + 'static) -> Result<Self, BuildError> {
        if self.scaler.is_some() {
            return Err(BuildError::AlreadySet("Scaler"));
        }
        self.scaler = Some(Arc::new(scaler));
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Model + 'static) -> Result<Self, BuildError> {
        if self.model.is_some() {
            return Err(BuildError::AlreadySet("Model"));
        }
        self.model = Some(Arc::new(model));
        Ok(self)
    }

    /// Loads [`StandardScaler`] parameters from a JSON file.
    pub fn with_scaler_file<P: AsRef<Path>>(self, path: P) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let scaler = StandardScaler::from_file(path)?;
        let mut builder = self.with_scaler(scaler)?;
        builder.scaler_path = Some(path.to_string_lossy().to_string());
        Ok(builder)
    }

    /// Loads an ONNX classifier with the current runtime configuration.
    pub fn with_model_file<P: AsRef<Path>>(self, path: P) -> Result<Self, BuildError> {
        let model = OnnxClassifier::from_file(path, &self.runtime_config)?;
        let model_path = model.model_path().to_string();
        let mut builder = self.with_model(model)?;
        builder.model_path = Some(model_path);
        Ok(builder)
    }

    /// Loads the scaler and model from an artifacts directory.
    pub fn with_artifacts(self, manager: &ArtifactManager) -> Result<Self, BuildError> {
        manager.require_artifacts()?;
        info!("Loading artifacts from {:?}", manager.artifacts_dir());
        self.with_scaler_file(manager.get_scaler_path())?
            .with_model_file(manager.get_model_path())
    }

    /// Builds the predictor, checking that the scaler and model accept
    /// vectors of the registry's width when they declare one.
    pub fn build(self) -> Result<Predictor, BuildError> {
        let scaler = self.scaler.ok_or(BuildError::MissingScaler)?;
        let model = self.model.ok_or(BuildError::MissingModel)?;
        let registry = match self.registry {
            Some(registry) => registry,
            None => FieldRegistry::survey().clone(),
        };

        let expected = registry.width();
        for (component, width) in [("Scaler", scaler.input_width()), ("Model", model.input_width())] {
            if let Some(actual) = width {
                if actual != expected {
                    return Err(BuildError::WidthMismatch {
                        component,
                        expected,
                        actual,
                    });
                }
            }
        }
        info!("Predictor ready: {} fields, {} features", registry.len(), expected);

        Ok(Predictor {
            registry: Arc::new(registry),
            scaler,
            model,
            scaler_path: self.scaler_path,
            model_path: self.model_path,
        })
    }
}
