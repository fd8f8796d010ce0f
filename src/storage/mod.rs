// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::ExtractionResult;
use crate::report::render_report;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory holding every file written for `name`: /base_dir/name/
    pub fn record_dir(&self, name: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(name);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the extraction result as JSON
    pub fn save_result(&self, name: &str, result: &ExtractionResult) -> Result<PathBuf, StorageError> {
        let file_path = self.record_dir(name)?.join(format!("{}_analysis.json", name));

        let json = serde_json::to_string_pretty(result)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved extraction result to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves the rendered plain-text report
    pub fn save_report(&self, name: &str, result: &ExtractionResult) -> Result<PathBuf, StorageError> {
        let file_path = self.record_dir(name)?.join(format!("{}_report.txt", name));

        fs::write(&file_path, render_report(result)).map_err(StorageError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_metadata(&self, name: &str, result: &ExtractionResult) -> Result<PathBuf, StorageError> {
        let file_path = self.record_dir(name)?.join(format!("{}_analysis_meta.json", name));

        let metadata = serde_json::json!({
            "source_name": name,
            "score": result.score,
            "summary_length": result.summary.chars().count(),
            "feedback_length": result.feedback.chars().count(),
            "has_revised_text": result.feedback_parts().corrected.is_some(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            summary: "Short essay on rivers.".to_string(),
            feedback: "Check plurals;Rivers flow to the sea.".to_string(),
            score: 71.0,
        }
    }

    #[test]
    fn test_new_creates_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("output");
        StorageManager::new(&base).unwrap();
        assert!(base.is_dir());
    }

    #[test]
    fn test_save_result_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_result("essay", &sample()).unwrap();
        assert_eq!(path, dir.path().join("essay").join("essay_analysis.json"));

        let saved: ExtractionResult = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, sample());
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_report("essay", &sample()).unwrap();
        let report = fs::read_to_string(path).unwrap();
        assert!(report.contains("REVISED TEXT:\nRivers flow to the sea."));
        assert!(report.ends_with("Score: 71%\n"));
    }

    #[test]
    fn test_save_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_metadata("essay", &sample()).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(meta["source_name"], "essay");
        assert_eq!(meta["score"], 71.0);
        assert_eq!(meta["summary_length"], 22);
        assert_eq!(meta["has_revised_text"], true);
        assert!(meta["extraction_timestamp"].is_string());
    }
}
