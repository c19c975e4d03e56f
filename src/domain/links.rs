//! Cross-entry link resolution

use crate::domain::placement::PlacementPlan;

/// Turns Day One entry links into vault wikilinks
pub struct LinkResolver<'p> {
    plan: &'p PlacementPlan,
}

impl<'p> LinkResolver<'p> {
    pub fn new(plan: &'p PlacementPlan) -> Self {
        LinkResolver { plan }
    }

    /// Wikilink to the note written for `target`, or `None` when the entry is
    /// not in the export
    pub fn resolve(&self, target: &str, label: Option<&str>) -> Option<String> {
        let link = self.plan.link_target(target)?;
        let stem = link.rsplit('/').next().unwrap_or(&link);

        let display = match label.map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => stem,
        };

        Some(if display == link {
            format!("[[{}]]", link)
        } else {
            format!("[[{}|{}]]", link, display)
        })
    }
}
