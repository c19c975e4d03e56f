//! Configuration management

use crate::domain::{ExtractorSettings, OutputLayout};
use crate::error::{DayvaultError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "dayvault.toml";

/// Environment variable overriding `root`
pub const ROOT_ENV: &str = "DAYVAULT_ROOT";

/// Export folders holding attachments, never usable as the journal folder
const MEDIA_FOLDERS: &[&str] = &["photos", "audios", "videos", "pdfs"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder holding the export JSON and its media folders
    pub root: PathBuf,
    /// Output folder, relative to `root`; cleared on every run
    pub journal_folder: String,
    /// Export file name, relative to `root`
    pub journal_json: String,
    /// Body used for entries without text
    pub default_text: String,
    /// Title used when none can be derived from the text
    pub default_filename: String,
    pub tag_prefix: String,
    pub additional_tags: Vec<String>,
    pub max_filename_length: usize,
    pub use_date_folders: bool,
    pub tag_untagged_entries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            journal_folder: "journal".to_string(),
            journal_json: "Journal.json".to_string(),
            default_text: String::new(),
            default_filename: "Untitled".to_string(),
            tag_prefix: String::new(),
            additional_tags: Vec::new(),
            max_filename_length: 30,
            use_date_folders: true,
            tag_untagged_entries: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// Not validated here: `root` may still be overridden.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DayvaultError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DayvaultError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load an explicitly given config, or `dayvault.toml` if it exists, or defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Apply `DAYVAULT_ROOT`, then a command-line root (which wins)
    pub fn with_root_override(mut self, cli_root: Option<PathBuf>) -> Self {
        if let Some(root) = cli_root {
            self.root = root;
        } else if let Ok(root) = std::env::var(ROOT_ENV) {
            if !root.is_empty() {
                self.root = PathBuf::from(root);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_filename_length == 0 {
            return Err(DayvaultError::Config(
                "max_filename_length must be at least 1".to_string(),
            ));
        }

        if let Some(reason) = self.journal_folder_problem() {
            return Err(DayvaultError::Config(format!(
                "journal_folder '{}' is not allowed: {} (the folder is deleted on every run)",
                self.journal_folder, reason
            )));
        }

        Ok(())
    }

    /// Why `journal_folder` is unsafe to delete, if it is
    fn journal_folder_problem(&self) -> Option<&'static str> {
        let folder = Path::new(self.journal_folder.trim());

        let mut names = Vec::new();
        for component in folder.components() {
            match component {
                Component::Normal(name) => names.push(name.to_string_lossy().to_lowercase()),
                Component::CurDir => {}
                Component::ParentDir => return Some("it may not contain '..'"),
                Component::RootDir | Component::Prefix(_) => {
                    return Some("it must be relative to root")
                }
            }
        }

        let Some(first) = names.first() else {
            return Some("it must name a folder below root");
        };
        if MEDIA_FOLDERS.contains(&first.as_str()) {
            return Some("it may not be inside a media folder");
        }

        // symlinks can still lead out of root
        let journal = self.journal_dir();
        if journal.exists() {
            match (journal.canonicalize(), self.root.canonicalize()) {
                (Ok(journal), Ok(root)) if journal.starts_with(&root) && journal != root => {}
                _ => return Some("it resolves outside root"),
            }
        }

        None
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn journal_dir(&self) -> PathBuf {
        self.root.join(&self.journal_folder)
    }

    pub fn export_path(&self) -> PathBuf {
        self.root.join(&self.journal_json)
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::from_date_folders(self.use_date_folders)
    }

    pub fn extractor_settings(&self) -> ExtractorSettings {
        ExtractorSettings {
            tag_prefix: self.tag_prefix.clone(),
            additional_tags: self.additional_tags.clone(),
            default_filename: self.default_filename.clone(),
            max_filename_length: self.max_filename_length,
            tag_untagged_entries: self.tag_untagged_entries,
        }
    }
}
