//! File-loading helpers for the demo CLI and integration tests: read a
//! single JSON document, or every `*.json` file in a directory.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ConvertError;

/// Read and parse a single JSON file.
pub fn read_json_file(path: &Path) -> Result<Value, ConvertError> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConvertError::JsonParse {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Read every `*.json` file directly under `dir`, sorted by filename for
/// deterministic source-id assignment, and parse each as one document.
fn load_dir(dir: &Path) -> Result<Vec<Value>, ConvertError> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(|source| ConvertError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    paths.iter().map(|p| read_json_file(p)).collect()
}

/// Load every `*.json` file in `dir` as an example document.
pub fn load_examples_dir(dir: &Path) -> Result<Vec<Value>, ConvertError> {
    load_dir(dir)
}

/// Load every `*.json` file in `dir` as a schema fragment.
pub fn load_schemas_dir(dir: &Path) -> Result<Vec<Value>, ConvertError> {
    load_dir(dir)
}
