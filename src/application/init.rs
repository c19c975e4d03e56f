//! Write a default config file

use crate::error::{DayvaultError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `dayvault.toml` with default values.
///
/// `path` may be a directory (the file is created inside it) or a file path.
pub fn init(path: &Path, force: bool) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    };

    if target.exists() && !force {
        return Err(DayvaultError::Config(format!(
            "Config already exists: {} (use --force to overwrite)",
            target.display()
        )));
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Config::default().save(&target)?;
    println!("Wrote default config to {}", target.display());

    Ok(target)
}
