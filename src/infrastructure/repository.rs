//! File system placement of converted notes

use crate::domain::{OutputDocument, Placement};
use crate::error::{DayvaultError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The journal folder notes are written into
#[derive(Debug, Clone)]
pub struct VaultRepository {
    pub root: PathBuf,
}

impl VaultRepository {
    pub fn new(root: PathBuf) -> Self {
        VaultRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Delete the journal folder if present and create it empty
    pub fn reset(&self) -> Result<()> {
        if self.root.is_dir() {
            info!("Deleting existing folder: {}", self.root.display());
            fs::remove_dir_all(&self.root)?;
        } else if self.root.exists() {
            return Err(DayvaultError::Config(format!(
                "Journal folder is not a directory: {}",
                self.root.display()
            )));
        }

        info!("Creating journal folder: {}", self.root.display());
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Write a note at its planned location and return the full path.
    ///
    /// Never overwrites: an existing file at that path is an error.
    pub fn place(&self, document: &OutputDocument, placement: &Placement) -> Result<PathBuf> {
        let dir = self.root.join(&placement.dir);
        if !dir.is_dir() {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join(&placement.file_name);
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(document.contents().as_bytes())?;
        debug!(path = %path.display(), "wrote note");
        Ok(path)
    }
}
