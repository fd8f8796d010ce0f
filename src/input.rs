// src/input.rs
use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::utils::AppError;

/// Record name used when the analysis is piped in.
pub const STDIN_SOURCE: &str = "stdin";

/// Reads raw model output from `path`, or from stdin when no path is given.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn load_analysis(path: Option<&Path>) -> Result<String, AppError> {
    let bytes = match path {
        Some(path) => {
            tracing::info!("Reading analysis from {}", path.display());
            tokio::fs::read(path)
                .await
                .map_err(|e| AppError::Input(format!("{}: {}", path.display(), e)))?
        }
        None => {
            tracing::info!("Reading analysis from stdin");
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .map_err(|e| AppError::Input(format!("stdin: {}", e)))?;
            buf
        }
    };

    tracing::debug!("Read {} bytes of analysis text", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Name under which results for this input are stored.
pub fn source_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| STDIN_SOURCE.to_string())
}
