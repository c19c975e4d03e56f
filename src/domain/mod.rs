//! Domain layer - Export records and the entry-to-note transformation

pub mod document;
pub mod entry;
pub mod layout;
pub mod links;
pub mod media;
pub mod metadata;
pub mod placeholder;
pub mod placement;

pub use document::{BodyOutcome, DocumentAssembler, OutputDocument, UnresolvedReference};
pub use entry::{Entry, Export, Location, MediaAttachment, Weather};
pub use layout::{FilenameCandidates, OutputLayout};
pub use links::LinkResolver;
pub use media::{MediaKind, MediaRegistries, MediaRegistry};
pub use metadata::{ExtractorSettings, MetadataExtractor};
pub use placement::{Placement, PlacementPlan};
