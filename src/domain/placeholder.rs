//! Placeholder scanning for entry text
//!
//! Splits body text into literal spans and the placeholders Day One writes for
//! attachments (`![](dayone-moment://ID)`, `![](dayone-moment:/audio/ID)`, ...)
//! and for links to other entries (`[label](dayone://view?entryId=ID)`).

use crate::domain::MediaKind;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"!\[\]\(dayone-moment:(?:/(?P<kind>audio|video|pdfAttachment)/|//)(?P<media>[A-Fa-f0-9]+)\)",
            r"|\[(?P<label>[^\]\n]*)\]\(dayone://view\?entryId=(?P<link>[A-Fa-f0-9]+)\)",
            r"|dayone://view\?entryId=(?P<bare>[A-Fa-f0-9]+)",
        ))
        .unwrap()
    })
}

/// One piece of scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Media {
        kind: MediaKind,
        reference: &'a str,
        raw: &'a str,
    },
    EntryLink {
        label: Option<&'a str>,
        target: &'a str,
        raw: &'a str,
    },
}

impl<'a> Token<'a> {
    /// The exact source text this token was scanned from
    pub fn raw(&self) -> &'a str {
        match *self {
            Token::Literal(text) => text,
            Token::Media { raw, .. } | Token::EntryLink { raw, .. } => raw,
        }
    }
}

/// Scan text into tokens; concatenating every token's `raw()` yields the input
pub fn scan(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Literal(&text[last..whole.start()]));
        }
        tokens.push(token_from(&caps, whole.as_str()));
        last = whole.end();
    }

    if last < text.len() {
        tokens.push(Token::Literal(&text[last..]));
    }

    tokens
}

fn token_from<'a>(caps: &Captures<'a>, raw: &'a str) -> Token<'a> {
    if let Some(reference) = caps.name("media") {
        let kind = match caps.name("kind").map(|m| m.as_str()) {
            Some("audio") => MediaKind::Audio,
            Some("video") => MediaKind::Video,
            Some("pdfAttachment") => MediaKind::Pdf,
            _ => MediaKind::Photo,
        };
        return Token::Media {
            kind,
            reference: reference.as_str(),
            raw,
        };
    }

    if let Some(target) = caps.name("link") {
        return Token::EntryLink {
            label: caps.name("label").map(|m| m.as_str()),
            target: target.as_str(),
            raw,
        };
    }

    match caps.name("bare") {
        Some(target) => Token::EntryLink {
            label: None,
            target: target.as_str(),
            raw,
        },
        None => Token::Literal(raw),
    }
}
