//! Note placement decided ahead of rendering
//!
//! Every entry's file name is fixed before any body is rewritten, so entry
//! links can point at the note that will actually hold the target.

use crate::domain::entry::Entry;
use crate::domain::layout::{FilenameCandidates, OutputLayout};
use crate::domain::metadata::MetadataExtractor;
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Where one note is written, relative to the journal folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub dir: PathBuf,
    pub file_name: String,
}

impl Placement {
    /// File name without the `.md` extension
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(".md")
            .unwrap_or(&self.file_name)
    }

    pub fn relative_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Placements for every entry of a run, in export order.
///
/// Names are compared case-insensitively, so `Trip.md` and `trip.md` never
/// land side by side on a case-insensitive file system.
#[derive(Debug, Default)]
pub struct PlacementPlan {
    layout: OutputLayout,
    placements: Vec<Placement>,
    by_uuid: HashMap<String, usize>,
    taken: HashSet<String>,
    stems: HashMap<String, usize>,
}

impl PlacementPlan {
    pub fn new(layout: OutputLayout) -> Self {
        PlacementPlan {
            layout,
            ..PlacementPlan::default()
        }
    }

    /// Assign every entry in export order
    pub fn build(
        entries: &[Entry],
        extractor: &MetadataExtractor,
        layout: OutputLayout,
    ) -> Result<Self> {
        let mut plan = PlacementPlan::new(layout);
        for entry in entries {
            let date = entry.local_created()?.date_naive();
            plan.assign(&entry.uuid, &extractor.title(entry), date);
        }
        Ok(plan)
    }

    /// First free candidate name for `title` in the folder for `date`
    pub fn assign(&mut self, uuid: &str, title: &str, date: NaiveDate) -> &Placement {
        let dir = self.layout.relative_dir(date);

        let taken = &mut self.taken;
        let file_name = FilenameCandidates::new(title, date)
            .find(|name| taken.insert(dir.join(name).to_string_lossy().to_lowercase()))
            .unwrap_or_else(|| format!("{}.md", title));

        let placement = Placement { dir, file_name };
        *self.stems.entry(placement.stem().to_lowercase()).or_default() += 1;
        self.by_uuid
            .entry(uuid.to_string())
            .or_insert(self.placements.len());
        self.placements.push(placement);
        &self.placements[self.placements.len() - 1]
    }

    /// Placement of the first entry with `uuid`
    pub fn get(&self, uuid: &str) -> Option<&Placement> {
        self.by_uuid.get(uuid).map(|&i| &self.placements[i])
    }

    /// Placements in the order they were assigned
    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Wikilink target for an entry.
    ///
    /// The bare stem when no other note shares it, otherwise the folder path
    /// plus stem so the link cannot resolve to a same-named note elsewhere.
    pub fn link_target(&self, uuid: &str) -> Option<String> {
        let placement = self.get(uuid)?;
        let stem = placement.stem();

        let shared = self
            .stems
            .get(&stem.to_lowercase())
            .is_some_and(|count| *count > 1);
        if !shared || placement.dir.as_os_str().is_empty() {
            return Some(stem.to_string());
        }

        let mut parts: Vec<String> = placement
            .dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        parts.push(stem.to_string());
        Some(parts.join("/"))
    }
}
