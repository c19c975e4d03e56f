//! Media files in the export folder

use crate::domain::{MediaAttachment, MediaKind};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renames exported media from content-hash names to reference identifiers
pub trait MediaStore {
    /// Rename `<md5>.<ext>` to `<identifier>.<ext>`.
    ///
    /// Returns `Ok(false)` when the source is gone (already renamed).
    fn prepare(&self, kind: MediaKind, attachment: &MediaAttachment) -> Result<bool>;
}

/// Media folders (`photos`, `audios`, ...) under the export root
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: PathBuf) -> Self {
        MediaLibrary { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk name before renaming
    pub fn hashed_path(&self, kind: MediaKind, attachment: &MediaAttachment) -> PathBuf {
        self.file_path(kind, &attachment.md5, kind.extension(attachment))
    }

    /// On-disk name after renaming
    pub fn renamed_path(&self, kind: MediaKind, attachment: &MediaAttachment) -> PathBuf {
        self.file_path(kind, &attachment.identifier, kind.extension(attachment))
    }

    fn file_path(&self, kind: MediaKind, stem: &str, extension: &str) -> PathBuf {
        self.root
            .join(kind.folder())
            .join(format!("{}.{}", stem, extension))
    }
}

impl MediaStore for MediaLibrary {
    fn prepare(&self, kind: MediaKind, attachment: &MediaAttachment) -> Result<bool> {
        let from = self.hashed_path(kind, attachment);
        if !from.is_file() {
            debug!(path = %from.display(), "media already renamed or missing");
            return Ok(false);
        }

        let to = self.renamed_path(kind, attachment);
        info!("Renaming {} to {}", from.display(), to.display());
        fs::rename(&from, &to)?;
        Ok(true)
    }
}
