use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;
use std::sync::Mutex;

/// Whether the process-wide ONNX Runtime environment has been committed.
static ENVIRONMENT_READY: Mutex<bool> = Mutex::new(false);

/// ONNX Runtime settings used when loading the classification model.
///
/// Thread counts of 0 leave the choice to ONNX Runtime. The model is a
/// small tabular classifier, so one thread per pool is usually enough for
/// request-at-a-time serving; see [`RuntimeConfig::single_threaded`].
#[derive(Debug)]
pub struct RuntimeConfig {
    pub inter_threads: usize,
    pub intra_threads: usize,
    pub optimization_level: GraphOptimizationLevel,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            inter_threads: 0,
            intra_threads: 0,
            optimization_level: GraphOptimizationLevel::Level3,
        }
    }
}

impl RuntimeConfig {
    /// One inter-op and one intra-op thread with full graph optimization.
    pub fn single_threaded() -> Self {
        Self {
            inter_threads: 1,
            intra_threads: 1,
            ..Self::default()
        }
    }
}

impl Clone for RuntimeConfig {
    fn clone(&self) -> Self {
        Self {
            inter_threads: self.inter_threads,
            intra_threads: self.intra_threads,
            optimization_level: copy_level(&self.optimization_level),
        }
    }
}

// GraphOptimizationLevel is not Clone
fn copy_level(level: &GraphOptimizationLevel) -> GraphOptimizationLevel {
    match level {
        GraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
        GraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
        GraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
        GraphOptimizationLevel::Disable => GraphOptimizationLevel::Disable,
    }
}

/// Commits the process-wide ONNX Runtime environment on first use.
///
/// Concurrent first callers wait on the lock, so the environment is
/// committed exactly once. A failed commit is retried on the next call.
pub fn ensure_initialized() -> OrtResult<()> {
    let mut ready = ENVIRONMENT_READY.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if !*ready {
        ort::init().with_name("degree-predictor").commit()?;
        log::info!("ONNX Runtime environment initialized");
        *ready = true;
    }
    Ok(())
}

/// Session builder for the classification model with `config` applied.
pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let mut builder = Session::builder()?;

    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }
    builder = builder.with_optimization_level(copy_level(&config.optimization_level))?;

    Ok(builder)
}
