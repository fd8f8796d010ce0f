// src/main.rs
use std::path::PathBuf;

use analysis_extractor::input;
use analysis_extractor::report::ResponseEnvelope;
use analysis_extractor::storage::StorageManager;
use analysis_extractor::utils::{self, AppError};
use analysis_extractor::{AnalysisExtractor, ExtractorConfig};
use clap::Parser;

/// Command Line Interface for the analysis field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the raw model response (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory to store the result, report and metadata in (optional)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug mode - save a copy of the input with section markers annotated
    #[arg(short, long, requires = "output_dir")]
    debug: bool,

    /// Characters kept from a section that has no closing marker (default: 200)
    #[arg(long)]
    preview_limit: Option<usize>,

    /// Wrap the printed result in a {data, message, success} envelope
    #[arg(long)]
    envelope: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Resolve configuration: CLI flag over environment over defaults
    let mut config = ExtractorConfig::from_env()?;
    if let Some(limit) = args.preview_limit {
        tracing::debug!("Setting preview limit to {} from command-line argument", limit);
        config = config.with_preview_limit(limit);
    }

    // 4. Read the analysis text
    let analysis = match input::load_analysis(args.input.as_deref()).await {
        Ok(text) => text,
        Err(e) if args.envelope => {
            // Report the failure in the same shape callers parse on success
            let envelope: ResponseEnvelope<()> = ResponseEnvelope::error(e.to_string());
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    let name = input::source_name(args.input.as_deref());

    // 5. Extract
    let extractor = AnalysisExtractor::with_config(config);
    let result = extractor.extract(&analysis);

    // 6. Persist if requested
    if let Some(output_dir) = &args.output_dir {
        let storage = StorageManager::new(output_dir)?;

        let result_path = storage.save_result(&name, &result)?;
        tracing::info!("Saved result to: {}", result_path.display());

        match storage.save_report(&name, &result) {
            Ok(path) => tracing::info!("Saved report to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save report: {}", e),
        }

        match storage.save_metadata(&name, &result) {
            Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save metadata: {}", e),
        }

        if args.debug {
            let debug_path = storage.record_dir(&name)?.join(format!("{}_markers.txt", name));
            if let Err(e) = utils::marker_debug::save_marker_debug(&analysis, &debug_path) {
                tracing::warn!("Failed to create marker debug file: {}", e);
            }
        }
    }

    // 7. Print
    let output = if args.envelope {
        serde_json::to_string_pretty(&ResponseEnvelope::success(&result, "File processed successfully"))?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", output);

    tracing::info!("Processing finished for '{}' (score {})", name, result.score);
    Ok(())
}
