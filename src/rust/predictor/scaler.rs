use std::fmt;
use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::Deserialize;

use super::error::PipelineError;

/// Feature normalization applied before the model sees a vector.
pub trait Scaler: Send + Sync + fmt::Debug {
    fn transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, PipelineError>;

    /// Number of columns the scaler was fitted on, if known.
    fn input_width(&self) -> Option<usize> {
        None
    }
}

/// Pass-through scaler for models that normalize their own inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, PipelineError> {
        Ok(features.clone())
    }
}

#[derive(Debug, Deserialize)]
struct ScalerParams {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

/// Standardizes each column as `(x - mean) / scale` with parameters
/// exported from a fitted scaler.
///
/// Loaded from JSON of the form `{"mean": [...], "scale": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f32>,
    scale: Array1<f32>,
}

impl StandardScaler {
    /// Zero scale entries (constant columns) are treated as 1.
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, PipelineError> {
        if mean.is_empty() {
            return Err(PipelineError::Scaler("Scaler has no columns".into()));
        }
        if mean.len() != scale.len() {
            return Err(PipelineError::Scaler(format!(
                "Scaler mean has {} columns but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect::<Array1<f32>>();
        Ok(Self {
            mean: Array1::from(mean),
            scale,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let params: ScalerParams = serde_json::from_str(json)
            .map_err(|e| PipelineError::Scaler(format!("Invalid scaler parameters: {}", e)))?;
        Self::new(params.mean, params.scale)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            PipelineError::Scaler(format!("Failed to read scaler file {}: {}", path.display(), e))
        })?;
        let scaler = Self::from_json(&json)?;
        log::info!("Loaded scaler with {} columns from {:?}", scaler.mean.len(), path);
        Ok(scaler)
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &Array2<f32>) -> Result<Array2<f32>, PipelineError> {
        if features.ncols() != self.mean.len() {
            return Err(PipelineError::Scaler(format!(
                "X has {} features, but the scaler is expecting {} features as input",
                features.ncols(),
                self.mean.len()
            )));
        }
        Ok((features - &self.mean) / &self.scale)
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.mean.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_standardizes_columns() {
        let scaler = StandardScaler::from_json(r#"{"mean": [1.0, 10.0], "scale": [2.0, 0.0]}"#).unwrap();
        let scaled = scaler.transform(&array![[3.0, 12.0]]).unwrap();
        assert_eq!(scaled, array![[1.0f32, 2.0]]);
        assert_eq!(scaler.input_width(), Some(2));
    }

    #[test]
    fn test_shape_mismatch() {
        let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
        let err = scaler.transform(&array![[1.0, 2.0]]).unwrap_err();
        assert!(err.to_string().contains("expecting 3 features"));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(StandardScaler::new(vec![], vec![]).is_err());
        assert!(StandardScaler::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(matches!(
            StandardScaler::from_json("{\"mean\": [1.0]}"),
            Err(PipelineError::Scaler(_))
        ));
    }

    #[test]
    fn test_identity_scaler() {
        let features = array![[1.0, 2.0, 3.0]];
        assert_eq!(IdentityScaler.transform(&features).unwrap(), features);
        assert_eq!(IdentityScaler.input_width(), None);
    }
}
