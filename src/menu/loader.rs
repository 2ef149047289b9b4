//! Reading menu descriptions from JSON

use std::fs;
use std::path::Path;

use crate::error::{DuiError, DuiResult};

use super::MenuItem;

/// Read and decode a menu description file
pub fn load_menu_file(path: &Path) -> DuiResult<MenuItem> {
    let content = fs::read_to_string(path).map_err(|source| DuiError::MenuRead {
        file: path.to_path_buf(),
        source,
    })?;
    let item = parse_menu(&content).map_err(|e| DuiError::MenuParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(file = %path.display(), root = %item.name, "loaded menu description");
    Ok(item)
}

/// Decode a menu description from a JSON string
pub fn parse_menu(json: &str) -> Result<MenuItem, serde_json::Error> {
    serde_json::from_str(json)
}
