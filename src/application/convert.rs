//! Convert export use case
//!
//! Orchestrates a full run: load the export, reset the journal folder, then
//! turn every entry into a note in export order.

use crate::domain::{
    BodyOutcome, DocumentAssembler, Entry, LinkResolver, MediaKind, MediaRegistries,
    MetadataExtractor, PlacementPlan, UnresolvedReference,
};
use crate::error::Result;
use crate::infrastructure::timestamps::apply_entry_times;
use crate::infrastructure::{load_export, Config, MediaLibrary, MediaStore, VaultRepository};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Summary of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Notes written, in export order
    pub notes: Vec<PathBuf>,
    /// Entries written without a body
    pub fallbacks: usize,
    /// Placeholders left as-is because their target is unknown
    pub unresolved: usize,
    /// Media files renamed during this run
    pub renamed_media: usize,
}

impl ConversionReport {
    pub fn processed(&self) -> usize {
        self.notes.len()
    }
}

/// Service for converting an export into vault notes
pub struct ConvertService<S: MediaStore = MediaLibrary> {
    config: Config,
    media: S,
}

impl ConvertService<MediaLibrary> {
    /// Create a service renaming media under the configured root
    pub fn new(config: Config) -> Self {
        let media = MediaLibrary::new(config.root.clone());
        ConvertService { config, media }
    }
}

impl<S: MediaStore> ConvertService<S> {
    pub fn with_media_store(config: Config, media: S) -> Self {
        ConvertService { config, media }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute the conversion
    ///
    /// # Errors
    ///
    /// Aborts on an unreadable export, a duplicate attachment identifier, an
    /// invalid timestamp, or a failure writing a note. Problems with a single
    /// entry's body are reported in the returned [`ConversionReport`] instead.
    pub fn execute(&self) -> Result<ConversionReport> {
        self.config.validate()?;

        let export_path = self.config.export_path();
        info!("Loading export {}", export_path.display());
        let export = load_export(&export_path)?;

        let extractor = MetadataExtractor::new(self.config.extractor_settings());
        let plan = PlacementPlan::build(&export.entries, &extractor, self.config.layout())?;
        let links = LinkResolver::new(&plan);

        let vault = VaultRepository::new(self.config.journal_dir());
        vault.reset()?;

        let mut registries = MediaRegistries::new();
        let mut report = ConversionReport::default();

        info!(entries = export.entries.len(), "Begin processing entries");

        for (entry, placement) in export.entries.iter().zip(plan.iter()) {
            let created = entry.created()?;
            let modified = entry.modified()?;

            registries.register_entry(entry)?;

            let assembler = DocumentAssembler::new(
                &extractor,
                &registries,
                &links,
                &self.config.default_text,
            );

            let body = match self.prepare_media(entry) {
                Ok(renamed) => {
                    report.renamed_media += renamed;
                    BodyOutcome::Rendered(assembler.body(entry))
                }
                Err(error) => BodyOutcome::Fallback { error },
            };
            self.log_body_outcome(entry, &body);
            report.unresolved += body.unresolved().len();
            if body.is_fallback() {
                report.fallbacks += 1;
            }

            let document = assembler.assemble(entry, &body)?;
            let path = vault.place(&document, placement)?;
            apply_entry_times(&path, &created, &modified)?;

            report.notes.push(path);
            debug!(
                count = report.processed(),
                uuid = %entry.uuid,
                "entry converted"
            );
        }

        info!(
            processed = report.processed(),
            fallbacks = report.fallbacks,
            unresolved = report.unresolved,
            "Conversion complete"
        );
        Ok(report)
    }

    /// Rename this entry's media so embeds point at existing files
    fn prepare_media(&self, entry: &Entry) -> Result<usize> {
        let mut renamed = 0;
        for kind in MediaKind::ALL {
            for attachment in entry.attachments(kind) {
                if self.media.prepare(kind, attachment)? {
                    renamed += 1;
                }
            }
        }
        Ok(renamed)
    }

    fn log_body_outcome(&self, entry: &Entry, body: &BodyOutcome) {
        match body {
            BodyOutcome::Fallback { error } => {
                warn!(uuid = %entry.uuid, error = ?error, "Body skipped: {}", error);
            }
            BodyOutcome::Rendered(rendered) => {
                for reference in &rendered.unresolved {
                    match reference {
                        UnresolvedReference::Media { kind, identifier } => warn!(
                            uuid = %entry.uuid,
                            "No {} attachment '{}' in export; placeholder kept",
                            kind,
                            identifier
                        ),
                        UnresolvedReference::Entry { identifier } => warn!(
                            uuid = %entry.uuid,
                            "Linked entry '{}' not in export; link kept",
                            identifier
                        ),
                    }
                }
            }
        }
    }
}
