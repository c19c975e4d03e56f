//! Attachment registries and embed rendering

use crate::domain::entry::{Entry, MediaAttachment};
use crate::domain::metadata;
use crate::error::{DayvaultError, Result};
use std::collections::HashMap;
use std::fmt;

/// Kind of attachment an entry can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photo,
    Audio,
    Video,
    Pdf,
}

impl MediaKind {
    /// All kinds, in the order their attachments are processed
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Photo,
        MediaKind::Audio,
        MediaKind::Pdf,
        MediaKind::Video,
    ];

    /// Subfolder of the export root holding files of this kind
    pub fn folder(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photos",
            MediaKind::Audio => "audios",
            MediaKind::Video => "videos",
            MediaKind::Pdf => "pdfs",
        }
    }

    /// File extension used on disk for an attachment of this kind.
    ///
    /// Audio is always exported as m4a regardless of the recorded type.
    pub fn extension<'a>(&self, attachment: &'a MediaAttachment) -> &'a str {
        match self {
            MediaKind::Audio => "m4a",
            MediaKind::Photo => attachment.file_type.as_deref().unwrap_or("jpeg"),
            MediaKind::Video => attachment.file_type.as_deref().unwrap_or("mov"),
            MediaKind::Pdf => attachment.file_type.as_deref().unwrap_or("pdf"),
        }
    }

    fn has_duration(&self) -> bool {
        matches!(self, MediaKind::Audio | MediaKind::Video)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Photo => "photo",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// Run-wide map of reference identifier to attachment for one kind.
///
/// Registries are never cleared; an identifier can only be registered once per run.
#[derive(Debug)]
pub struct MediaRegistry {
    kind: MediaKind,
    attachments: HashMap<String, MediaAttachment>,
}

impl MediaRegistry {
    pub fn new(kind: MediaKind) -> Self {
        MediaRegistry {
            kind,
            attachments: HashMap::new(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    pub fn register(&mut self, attachment: &MediaAttachment) -> Result<()> {
        if self.attachments.contains_key(&attachment.identifier) {
            return Err(DayvaultError::DuplicateAttachment {
                kind: self.kind,
                identifier: attachment.identifier.clone(),
            });
        }
        self.attachments
            .insert(attachment.identifier.clone(), attachment.clone());
        Ok(())
    }

    /// Render the embed for a registered reference
    pub fn resolve(&self, reference: &str) -> Result<String> {
        let attachment =
            self.attachments
                .get(reference)
                .ok_or_else(|| DayvaultError::UnknownAttachment {
                    kind: self.kind,
                    identifier: reference.to_string(),
                })?;
        Ok(self.render(attachment))
    }

    fn render(&self, attachment: &MediaAttachment) -> String {
        let embed = format!(
            "![[{}.{}]]",
            attachment.identifier,
            self.kind.extension(attachment)
        );

        if !self.kind.has_duration() {
            return embed;
        }
        match metadata::duration(attachment) {
            Ok(length) => format!("{} ({})", embed, length),
            Err(_) => embed,
        }
    }
}

/// One registry per attachment kind
#[derive(Debug)]
pub struct MediaRegistries {
    photos: MediaRegistry,
    audios: MediaRegistry,
    videos: MediaRegistry,
    pdfs: MediaRegistry,
}

impl Default for MediaRegistries {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaRegistries {
    pub fn new() -> Self {
        MediaRegistries {
            photos: MediaRegistry::new(MediaKind::Photo),
            audios: MediaRegistry::new(MediaKind::Audio),
            videos: MediaRegistry::new(MediaKind::Video),
            pdfs: MediaRegistry::new(MediaKind::Pdf),
        }
    }

    pub fn get(&self, kind: MediaKind) -> &MediaRegistry {
        match kind {
            MediaKind::Photo => &self.photos,
            MediaKind::Audio => &self.audios,
            MediaKind::Video => &self.videos,
            MediaKind::Pdf => &self.pdfs,
        }
    }

    fn get_mut(&mut self, kind: MediaKind) -> &mut MediaRegistry {
        match kind {
            MediaKind::Photo => &mut self.photos,
            MediaKind::Audio => &mut self.audios,
            MediaKind::Video => &mut self.videos,
            MediaKind::Pdf => &mut self.pdfs,
        }
    }

    /// Register every attachment of an entry, failing on the first duplicate
    pub fn register_entry(&mut self, entry: &Entry) -> Result<()> {
        for kind in MediaKind::ALL {
            let registry = self.get_mut(kind);
            for attachment in entry.attachments(kind) {
                registry.register(attachment)?;
            }
        }
        Ok(())
    }

    pub fn resolve(&self, kind: MediaKind, reference: &str) -> Result<String> {
        self.get(kind).resolve(reference)
    }
}
