use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use degree_predictor::{
    encode, AnswerSet, ArtifactManager, ArtifactManifest, FieldRegistry, PipelineError, PredictError, Prediction,
    Predictor,
};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding model.onnx and scaler.json
    #[arg(short, long, global = true)]
    artifacts: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every survey question with its options
    Questions,
    /// Print a JSON answers template with every question unanswered
    Template,
    /// Print the feature vector slots of every question
    Layout,
    /// Download and verify the model and scaler listed in a manifest
    Fetch {
        /// JSON manifest with artifact URLs and SHA-256 digests
        #[arg(short, long)]
        manifest: PathBuf,
        /// Force a fresh download of the artifacts
        #[arg(short, long)]
        fresh: bool,
    },
    /// Predict the degree classification for a JSON answers file
    Predict {
        /// JSON object mapping each question to its answer
        #[arg(long)]
        answers: PathBuf,
    },
}

fn artifact_manager(dir: Option<PathBuf>) -> anyhow::Result<ArtifactManager> {
    let manager = match dir {
        Some(dir) => ArtifactManager::new(dir)?,
        None => ArtifactManager::new_default()?,
    };
    Ok(manager)
}

fn print_questions(registry: &FieldRegistry) {
    for field in registry.iter() {
        let hint = if field.kind.is_multi_label() {
            " (select all that apply)"
        } else {
            ""
        };
        println!("{}{}\n  [{}]", field.prompt, hint, field.name);
        for option in field.options() {
            println!("    - {}", option);
        }
    }
}

fn print_layout(registry: &FieldRegistry) {
    for field in registry.iter() {
        if let Some(range) = registry.slot_range(field.name) {
            println!("{:>3}..{:<3} {}", range.start, range.end, field.name);
        }
    }
    println!("Total width: {}", registry.width());
}

async fn fetch(manager: &ArtifactManager, manifest: PathBuf, fresh: bool) -> anyhow::Result<()> {
    let manifest = ArtifactManifest::from_file(&manifest)
        .with_context(|| format!("Failed to read manifest {}", manifest.display()))?;

    if fresh {
        info!("Fresh download requested - removing any existing artifacts...");
        manager.remove_artifacts()?;
    }
    manager.ensure_artifacts(&manifest).await?;
    println!("Artifacts ready in {}", manager.artifacts_dir().display());
    Ok(())
}

/// Prints the outcome and maps it to the process exit code.
fn report(result: Result<Prediction, PredictError>) -> ExitCode {
    match result {
        Ok(prediction) => {
            println!("{}", prediction);
            ExitCode::SUCCESS
        }
        Err(e @ PredictError::IncompleteInput(_)) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
        Err(e @ PredictError::Pipeline(_)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn predict(registry: &FieldRegistry, artifacts: Option<PathBuf>, answers: PathBuf) -> anyhow::Result<ExitCode> {
    let text = fs::read_to_string(&answers)
        .with_context(|| format!("Failed to read answers {}", answers.display()))?;
    let answers: AnswerSet = serde_json::from_str(&text).context("Answers file is not valid JSON")?;

    // Answers are checked before any artifact is touched
    if let Err(e) = answers.validate(registry) {
        return Ok(report(Err(e.into())));
    }
    if let Err(e) = encode(registry, &answers) {
        return Ok(report(Err(PipelineError::from(e).into())));
    }

    let manager = artifact_manager(artifacts)?;
    let predictor = Predictor::builder().with_artifacts(&manager)?.build()?;
    Ok(report(predictor.predict(&answers)))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    let registry = FieldRegistry::survey();

    match args.command {
        Command::Questions => print_questions(registry),
        Command::Template => {
            // Through a Value so keys print sorted
            let template = serde_json::to_value(AnswerSet::blank(registry))?;
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Command::Layout => print_layout(registry),
        Command::Fetch { manifest, fresh } => {
            fetch(&artifact_manager(args.artifacts)?, manifest, fresh).await?;
        }
        Command::Predict { answers } => {
            return predict(registry, args.artifacts, answers);
        }
    }
    Ok(ExitCode::SUCCESS)
}
