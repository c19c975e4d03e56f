//! Markdown document assembly
//!
//! A converted note is a front-matter header, the rewritten entry text, and a
//! footer carrying the location. Body rewriting never aborts a run: a failure
//! while preparing the body turns into [`BodyOutcome::Fallback`] and the note is
//! written without it.

use crate::domain::entry::Entry;
use crate::domain::links::LinkResolver;
use crate::domain::media::{MediaKind, MediaRegistries};
use crate::domain::metadata::{self, MetadataExtractor};
use crate::domain::placeholder::{self, Token};
use crate::error::{DayvaultError, Result};

const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{1C6A}';

/// Sections of one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub header: String,
    pub body: String,
    pub footer: String,
}

impl OutputDocument {
    /// File contents; sections are joined without separators
    pub fn contents(&self) -> String {
        let mut out =
            String::with_capacity(self.header.len() + self.body.len() + self.footer.len());
        out.push_str(&self.header);
        out.push_str(&self.body);
        out.push_str(&self.footer);
        out
    }
}

/// A placeholder left untouched because its target is unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReference {
    Media { kind: MediaKind, identifier: String },
    Entry { identifier: String },
}

/// Entry text after placeholder rewriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenBody {
    pub text: String,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Result of preparing an entry's body
#[derive(Debug)]
pub enum BodyOutcome {
    Rendered(RewrittenBody),
    /// The body could not be prepared; the note is written without it
    Fallback { error: DayvaultError },
}

impl BodyOutcome {
    pub fn text(&self) -> &str {
        match self {
            BodyOutcome::Rendered(body) => &body.text,
            BodyOutcome::Fallback { .. } => "",
        }
    }

    pub fn unresolved(&self) -> &[UnresolvedReference] {
        match self {
            BodyOutcome::Rendered(body) => &body.unresolved,
            BodyOutcome::Fallback { .. } => &[],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, BodyOutcome::Fallback { .. })
    }
}

/// Strip escapes and expand Day One's line and paragraph separators
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => {}
            LINE_SEPARATOR => out.push('\n'),
            PARAGRAPH_SEPARATOR => out.push_str("\n\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the sections of a note from an entry
pub struct DocumentAssembler<'r> {
    extractor: &'r MetadataExtractor,
    registries: &'r MediaRegistries,
    links: &'r LinkResolver<'r>,
    default_text: &'r str,
}

impl<'r> DocumentAssembler<'r> {
    pub fn new(
        extractor: &'r MetadataExtractor,
        registries: &'r MediaRegistries,
        links: &'r LinkResolver<'r>,
        default_text: &'r str,
    ) -> Self {
        DocumentAssembler {
            extractor,
            registries,
            links,
            default_text,
        }
    }

    /// Front matter between `---` delimiters
    pub fn header(&self, entry: &Entry) -> Result<String> {
        let local = entry.local_created()?;
        // validated here so a bad value fails before anything is written
        entry.modified()?;

        let mut header = String::from("---\n");
        header.push_str(&format!("date: {}\n", local.format("%Y-%m-%d")));
        header.push_str(&format!("time: {}\n", local.format("%Y-%m-%dT%H:%M:%S")));
        header.push_str(&format!("created: {}\n", entry.creation_date));

        if let Some(modified) = &entry.modified_date {
            header.push_str(&format!("modified: {}\n", modified));
        }

        let weather = metadata::weather(entry);
        if !weather.is_empty() {
            header.push_str(&format!("weather: {}\n", weather));
        }

        let tags = self.extractor.tags(entry);
        if !tags.is_empty() {
            header.push_str(&format!("tags: {}\n", tags));
        }

        if let Some(loc) = &entry.location {
            header.push_str(&format!(
                "latitude: {}\n",
                metadata::format_coordinate(loc.latitude)
            ));
            header.push_str(&format!(
                "longitude: {}\n",
                metadata::format_coordinate(loc.longitude)
            ));
            if let Some(country) = &loc.country {
                header.push_str(&format!("country: {}\n", country));
            }
            if let Some(city) = &loc.locality_name {
                header.push_str(&format!("city: {}\n", city));
            }
        }

        header.push_str("locations: \n");
        header.push_str("---\n");
        Ok(header)
    }

    /// Normalized entry text with every placeholder resolved where possible
    pub fn body(&self, entry: &Entry) -> RewrittenBody {
        let text = normalize_text(entry.text.as_deref().unwrap_or(self.default_text));
        self.rewrite(&text)
    }

    /// Single pass over the scanned tokens; resolved text never contains
    /// placeholders, so every kind is rewritten exactly once.
    pub fn rewrite(&self, text: &str) -> RewrittenBody {
        let mut out = String::with_capacity(text.len());
        let mut unresolved = Vec::new();

        for token in placeholder::scan(text) {
            match token {
                Token::Literal(literal) => out.push_str(literal),
                Token::EntryLink { label, target, raw } => {
                    match self.links.resolve(target, label) {
                        Some(link) => out.push_str(&link),
                        None => {
                            out.push_str(raw);
                            unresolved.push(UnresolvedReference::Entry {
                                identifier: target.to_string(),
                            });
                        }
                    }
                }
                Token::Media {
                    kind,
                    reference,
                    raw,
                } => match self.registries.resolve(kind, reference) {
                    Ok(embed) => out.push_str(&embed),
                    Err(_) => {
                        out.push_str(raw);
                        unresolved.push(UnresolvedReference::Media {
                            kind,
                            identifier: reference.to_string(),
                        });
                    }
                },
            }
        }

        RewrittenBody {
            text: out,
            unresolved,
        }
    }

    /// Horizontal rule followed by the location link, if any
    pub fn footer(&self, entry: &Entry) -> String {
        let mut footer = String::from("\n\n---\n");
        footer.push_str(&metadata::location_coordinate(entry));
        footer
    }

    pub fn assemble(&self, entry: &Entry, body: &BodyOutcome) -> Result<OutputDocument> {
        Ok(OutputDocument {
            header: self.header(entry)?,
            body: body.text().to_string(),
            footer: self.footer(entry),
        })
    }
}
