//! Reading the journal export

use crate::domain::Export;
use crate::error::{DayvaultError, Result};
use std::fs;
use std::path::Path;

/// Load and parse a Day One JSON export
pub fn load_export(path: &Path) -> Result<Export> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DayvaultError::ExportNotFound(path.to_path_buf())
        } else {
            DayvaultError::Io(e)
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| DayvaultError::ExportParse {
        path: path.to_path_buf(),
        source,
    })
}
