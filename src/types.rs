//! Shared types passed between the scanner, renderer and orchestrator.
//!
//! Everything here is rebuilt from the filesystem on every run; nothing is
//! persisted. The types serialize to JSON for `newsroom check --json`.

use serde::Serialize;
use std::path::PathBuf;

/// A programme folder inside the news directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Programme {
    /// Directory name, unique within the news directory.
    pub folder: String,
    /// Display title derived from `folder`.
    pub title: String,
    /// Location on disk.
    #[serde(skip)]
    pub path: PathBuf,
}

/// Result of scanning the news directory.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    /// Programmes sorted by title, ties broken by folder name.
    pub programmes: Vec<Programme>,
    /// True when the news directory was missing and has just been created.
    pub created: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A displayable file inside a programme folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    pub name: String,
    pub kind: MediaKind,
}

impl MediaFile {
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }
}

/// A programme together with what was read from its folder.
#[derive(Debug, Clone, Serialize)]
pub struct ProgrammeContent {
    #[serde(flatten)]
    pub programme: Programme,
    /// Raw description text; `None` if the description file is absent.
    pub description: Option<String>,
    pub media: Vec<MediaFile>,
}

impl ProgrammeContent {
    pub fn image_count(&self) -> usize {
        self.media.iter().filter(|m| m.is_image()).count()
    }

    pub fn video_count(&self) -> usize {
        self.media.len() - self.image_count()
    }
}
