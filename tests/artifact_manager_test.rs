use std::fs;
use std::path::PathBuf;

use degree_predictor::{ArtifactError, ArtifactManager, ArtifactManifest, BuildError, Predictor};
use sha2::{Digest, Sha256};

const SCALER_JSON: &str = r#"{"mean": [0.0, 1.0], "scale": [1.0, 2.0]}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("degree-predictor-it").join(name);
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

fn manifest(model_url: &str, model_hash: String, scaler_hash: String) -> ArtifactManifest {
    ArtifactManifest {
        name: "degree-classifier".to_string(),
        model_url: model_url.to_string(),
        scaler_url: "not a url".to_string(),
        model_hash,
        scaler_hash,
    }
}

#[tokio::test]
async fn test_verified_artifacts_skip_download() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ArtifactManager::new(scratch_dir("verified"))?;
    fs::write(manager.get_model_path(), b"model bytes")?;
    fs::write(manager.get_scaler_path(), SCALER_JSON)?;

    // URLs are unusable, so success means nothing was fetched
    let manifest = manifest("not a url", digest(b"model bytes"), digest(SCALER_JSON.as_bytes()));
    assert!(manager.verify_artifacts(&manifest)?);
    manager.ensure_artifacts(&manifest).await?;
    assert!(manager.are_artifacts_present());
    Ok(())
}

#[tokio::test]
async fn test_tampered_artifact_fails_verification() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ArtifactManager::new(scratch_dir("tampered"))?;
    fs::write(manager.get_model_path(), b"model bytes")?;
    fs::write(manager.get_scaler_path(), "{}")?;

    let manifest = manifest("not a url", digest(b"model bytes"), digest(SCALER_JSON.as_bytes()));
    assert!(!manager.verify_artifacts(&manifest)?);
    Ok(())
}

#[test]
fn test_failed_download_leaves_nothing_behind() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ArtifactManager::new(scratch_dir("failed-download"))?;
    let manifest = manifest("not a url", digest(b"model"), digest(b"scaler"));

    let result = tokio_test::block_on(manager.download_artifacts(&manifest));
    assert!(matches!(result, Err(ArtifactError::DownloadError(_))));
    assert!(!manager.get_model_path().exists());
    assert!(!manager.get_scaler_path().exists());
    Ok(())
}

#[test]
fn test_manifest_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("manifest");
    fs::create_dir_all(&dir)?;
    let path = dir.join("manifest.json");
    fs::write(
        &path,
        r#"{
            "name": "degree-classifier",
            "model_url": "https://example.com/model.onnx",
            "scaler_url": "https://example.com/scaler.json",
            "model_hash": "aa",
            "scaler_hash": "bb"
        }"#,
    )?;

    let manifest = ArtifactManifest::from_file(&path)?;
    assert_eq!(manifest.name, "degree-classifier");
    assert_eq!(manifest.scaler_url, "https://example.com/scaler.json");

    fs::write(&path, r#"{"name": "incomplete"}"#)?;
    assert!(matches!(
        ArtifactManifest::from_file(&path),
        Err(ArtifactError::ManifestError(_))
    ));
    Ok(())
}

#[test]
fn test_predictor_reports_missing_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ArtifactManager::new(scratch_dir("missing"))?;
    let err = Predictor::builder().with_artifacts(&manager).unwrap_err();
    match err {
        BuildError::Artifact(ArtifactError::NotFound(path)) => assert!(path.ends_with("model.onnx")),
        other => panic!("expected missing artifact, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_remove_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let manager = ArtifactManager::new(scratch_dir("remove"))?;
    fs::write(manager.get_model_path(), b"model")?;
    fs::write(manager.get_scaler_path(), SCALER_JSON)?;
    assert!(manager.are_artifacts_present());

    manager.remove_artifacts()?;
    assert!(!manager.are_artifacts_present());
    manager.remove_artifacts()?;
    Ok(())
}
