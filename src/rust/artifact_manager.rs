use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

/// File name of the ONNX classifier inside the artifacts directory.
pub const MODEL_FILE: &str = "model.onnx";
/// File name of the fitted scaler parameters inside the artifacts directory.
pub const SCALER_FILE: &str = "scaler.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),
    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Manifest error: {0}")]
    ManifestError(#[from] serde_json::Error),
    #[error("Artifact verification failed")]
    VerificationFailed,
    #[error("Hash mismatch: expected {expected}, got {actual} for {file_type} file")]
    HashMismatch {
        file_type: String,
        expected: String,
        actual: String,
    },
}

/// Where to fetch a trained model and scaler from, with their SHA-256 digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub name: String,
    pub model_url: String,
    pub scaler_url: String,
    pub model_hash: String,
    pub scaler_hash: String,
}

impl ArtifactManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Clone, Debug)]
pub struct ArtifactManager {
    artifacts_dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl ArtifactManager {
    /// Creates a new ArtifactManager with the default artifacts directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::get_default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn get_default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("DEGREE_PREDICTOR_HOME") {
            return PathBuf::from(path).join("artifacts");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("degree-predictor").join("artifacts");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("degree-predictor").join("artifacts");
        }

        // 4. If all else fails, use system temp directory
        env::temp_dir().join("degree-predictor").join("artifacts")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> io::Result<Self> {
        let artifacts_dir = artifacts_dir.as_ref().to_path_buf();
        fs::create_dir_all(&artifacts_dir)?;
        Ok(Self {
            artifacts_dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn get_model_path(&self) -> PathBuf {
        self.artifacts_dir.join(MODEL_FILE)
    }

    pub fn get_scaler_path(&self) -> PathBuf {
        self.artifacts_dir.join(SCALER_FILE)
    }

    pub fn are_artifacts_present(&self) -> bool {
        let model_path = self.get_model_path();
        let scaler_path = self.get_scaler_path();
        log::debug!("Model path: {:?} (exists: {})", model_path, model_path.exists());
        log::debug!("Scaler path: {:?} (exists: {})", scaler_path, scaler_path.exists());
        model_path.exists() && scaler_path.exists()
    }

    /// Fails with [`ArtifactError::NotFound`] naming the first missing file.
    pub fn require_artifacts(&self) -> Result<(), ArtifactError> {
        for path in [self.get_model_path(), self.get_scaler_path()] {
            if !path.exists() {
                return Err(ArtifactError::NotFound(path.display().to_string()));
            }
        }
        Ok(())
    }

    pub fn verify_file(&self, path: &Path, expected_hash: &str) -> Result<bool, ArtifactError> {
        let bytes = fs::read(path)?;
        let hash = sha256_hex(&bytes);
        log::debug!("{:?}: sha256 {} (expected {})", path, hash, expected_hash);
        Ok(hash.eq_ignore_ascii_case(expected_hash))
    }

    pub fn verify_artifacts(&self, manifest: &ArtifactManifest) -> Result<bool, ArtifactError> {
        if !self.are_artifacts_present() {
            log::info!("One or both artifacts do not exist");
            return Ok(false);
        }

        let model_ok = self.verify_file(&self.get_model_path(), &manifest.model_hash)?;
        let scaler_ok = self.verify_file(&self.get_scaler_path(), &manifest.scaler_hash)?;
        log::info!(
            "Verification of '{}': model {}, scaler {}",
            manifest.name,
            model_ok,
            scaler_ok
        );
        Ok(model_ok && scaler_ok)
    }

    pub async fn download_artifacts(&self, manifest: &ArtifactManifest) -> Result<(), ArtifactError> {
        let _lock = self.download_lock.lock().await;
        fs::create_dir_all(&self.artifacts_dir)?;

        let model_result = self
            .fetch_if_stale(&manifest.model_url, &self.get_model_path(), &manifest.model_hash, "model")
            .await;
        let scaler_result = match model_result {
            Ok(()) => {
                self.fetch_if_stale(&manifest.scaler_url, &self.get_scaler_path(), &manifest.scaler_hash, "scaler")
                    .await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = scaler_result {
            log::error!("Failed to fetch artifacts for '{}': {}", manifest.name, e);
            let _ = self.remove_artifacts();
            return Err(e);
        }
        log::info!("Artifacts for '{}' ready to use", manifest.name);
        Ok(())
    }

    async fn fetch_if_stale(
        &self,
        url: &str,
        path: &Path,
        expected_hash: &str,
        file_type: &str,
    ) -> Result<(), ArtifactError> {
        if path.exists() {
            if self.verify_file(path, expected_hash)? {
                log::info!("Existing {} file verified successfully", file_type);
                return Ok(());
            }
            log::warn!("{} file verification failed, redownloading", file_type);
        }
        self.download_and_verify_file(url, path, expected_hash, file_type).await
    }

    async fn download_and_verify_file(
        &self,
        url: &str,
        path: &Path,
        expected_hash: &str,
        file_type: &str,
    ) -> Result<(), ArtifactError> {
        log::info!("Downloading {} file from {} to {:?}", file_type, url, path);
        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        log::info!("Downloaded {} bytes", bytes.len());

        let hash = sha256_hex(&bytes);
        if !hash.eq_ignore_ascii_case(expected_hash) {
            log::error!("{} hash mismatch: expected {}, got {}", file_type, expected_hash, hash);
            return Err(ArtifactError::HashMismatch {
                file_type: file_type.to_string(),
                expected: expected_hash.to_string(),
                actual: hash,
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &bytes)?;

        if !self.verify_file(path, expected_hash)? {
            return Err(ArtifactError::VerificationFailed);
        }
        Ok(())
    }

    pub fn remove_artifacts(&self) -> Result<(), ArtifactError> {
        for path in [self.get_model_path(), self.get_scaler_path()] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    /// Downloads the artifacts if they are missing and re-downloads them
    /// if they no longer match the manifest digests.
    pub async fn ensure_artifacts(&self, manifest: &ArtifactManifest) -> Result<(), ArtifactError> {
        if self.verify_artifacts(manifest)? {
            log::info!("Artifacts for '{}' verified", manifest.name);
            return Ok(());
        }
        self.remove_artifacts()?;
        self.download_artifacts(manifest).await
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
