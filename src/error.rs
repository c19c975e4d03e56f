//! Error types for dayvault

use crate::domain::MediaKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dayvault
#[derive(Debug, Error)]
pub enum DayvaultError {
    #[error("Export file not found: {0}")]
    ExportNotFound(PathBuf),

    #[error("Failed to parse export {path}: {source}")]
    ExportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Duplicate {kind} identifier: {identifier}")]
    DuplicateAttachment { kind: MediaKind, identifier: String },

    #[error("Unknown {kind} identifier: {identifier}")]
    UnknownAttachment { kind: MediaKind, identifier: String },

    #[error("Attachment {0} has no duration")]
    MissingDuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DayvaultError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DayvaultError::Config(_)
            | DayvaultError::TomlDeserialize(_)
            | DayvaultError::TomlSerialize(_) => 2,
            DayvaultError::ExportNotFound(_) | DayvaultError::ExportParse { .. } => 3,
            DayvaultError::DuplicateAttachment { .. } => 4,
            DayvaultError::InvalidTimestamp { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DayvaultError::ExportNotFound(path) => {
                format!(
                    "Export file not found: {}\n\n\
                    Suggestions:\n\
                    • Unzip the Day One export into the configured root folder\n\
                    • Check 'root' and 'journal_json' in dayvault.toml\n\
                    • Set DAYVAULT_ROOT or pass --root to point at the export folder",
                    path.display()
                )
            }
            DayvaultError::ExportParse { path, source } => {
                format!(
                    "Failed to parse export {}: {}\n\n\
                    The file must be a Day One JSON export with a top-level 'entries' array.",
                    path.display(),
                    source
                )
            }
            DayvaultError::DuplicateAttachment { kind, identifier } => {
                format!(
                    "Duplicate {} identifier: {}\n\n\
                    Two attachments in the export share the same identifier.\n\
                    No further entries were converted.",
                    kind, identifier
                )
            }
            DayvaultError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse config: {}\n\n\
                    Run 'dayvault init --force' to write a fresh default config.",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DayvaultError
pub type Result<T> = std::result::Result<T, DayvaultError>;
