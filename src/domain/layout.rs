//! Output layout and filename generation

use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// How converted notes are arranged under the journal folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Every note directly in the journal folder
    Flat,
    /// `<YYYY>/<YYYY-MM>/` subfolders
    #[default]
    DatePartitioned,
}

impl OutputLayout {
    pub fn from_date_folders(use_date_folders: bool) -> Self {
        if use_date_folders {
            OutputLayout::DatePartitioned
        } else {
            OutputLayout::Flat
        }
    }

    /// Folder for a note, relative to the journal folder
    pub fn relative_dir(&self, date: NaiveDate) -> PathBuf {
        match self {
            OutputLayout::Flat => PathBuf::new(),
            OutputLayout::DatePartitioned => PathBuf::from(date.year().to_string())
                .join(date.format("%Y-%m").to_string()),
        }
    }
}

/// Filename candidates in the order they are tried.
///
/// `Title.md`, then `Title YYYY-MM-DD.md`, then `Title YYYY-MM-DD a.md`,
/// `b`, ... `z`, `aa`, `ab`, ...
#[derive(Debug, Clone)]
pub struct FilenameCandidates {
    title: String,
    date: String,
    attempt: usize,
}

impl FilenameCandidates {
    pub fn new(title: &str, date: NaiveDate) -> Self {
        FilenameCandidates {
            title: title.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            attempt: 0,
        }
    }
}

impl Iterator for FilenameCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let name = match self.attempt {
            0 => format!("{}.md", self.title),
            1 => format!("{} {}.md", self.title, self.date),
            n => format!("{} {} {}.md", self.title, self.date, letter_suffix(n - 2)),
        };
        self.attempt += 1;
        Some(name)
    }
}

/// 0 -> "a", 25 -> "z", 26 -> "aa", 27 -> "ab", ...
fn letter_suffix(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
