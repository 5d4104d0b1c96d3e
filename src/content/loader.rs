//! Loader for the RON (or JSON) tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_tuning_ron(file: &str, contents: &str) -> Result<TuningFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn parse_tuning_json(file: &str, contents: &str) -> Result<TuningFile, ContentLoadError> {
    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a tuning file, picking the format from its extension.
pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ContentLoadError> {
    let file_name = path.display().to_string();

    let parse: fn(&str, &str) -> Result<TuningFile, ContentLoadError> =
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => parse_tuning_ron,
            Some("json") => parse_tuning_json,
            other => {
                return Err(ContentLoadError {
                    file: file_name,
                    message: format!("Unsupported extension: {:?}", other),
                });
            }
        };

    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse(&file_name, &contents)
}
