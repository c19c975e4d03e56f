use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn dayvault_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayvault").unwrap();
    cmd.env_remove("DAYVAULT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `Journal.json` into the export root
pub fn write_export(root: &Path, json: &str) {
    fs::write(root.join("Journal.json"), json).unwrap();
}

/// Create a media file under its content-hash name
pub fn write_media(root: &Path, folder: &str, file_name: &str, contents: &[u8]) {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), contents).unwrap();
}

/// Markdown files under `dir`, relative and sorted
pub fn list_notes(dir: &Path) -> Vec<PathBuf> {
    let mut notes: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .map(|entry| entry.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    notes.sort();
    notes
}
