//! Filesystem scanning.
//!
//! Discovers programme folders and the gallery media inside each one.
//!
//! ## Directory Structure
//!
//! ```text
//! news/                          # News directory (created if missing)
//! ├── art-workshop/              # Programme → "Art Workshop"
//! │   ├── description.txt        # Shown verbatim on the detail page
//! │   ├── 001-painting.jpg       # Gallery image
//! │   └── index.html             # Generated detail page (never media)
//! ├── youth-camp/
//! │   ├── description.txt
//! │   ├── campfire.JPG           # Extensions match case-insensitively
//! │   ├── opening.mp4            # Gallery video
//! │   └── schedule.pdf           # Ignored: not a media extension
//! └── .drafts/                   # Hidden: skipped
//! ```
//!
//! ## Ordering
//!
//! Programmes are sorted by display title (plain `String` ordering), ties
//! broken by folder name. Media files are sorted by name.
//!
//! Entries whose names are not valid UTF-8 are skipped with a warning.

use crate::config::SiteConfig;
use crate::naming::folder_to_title;
use crate::types::{Listing, MediaFile, Programme};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// List the programme folders inside `news_dir`.
///
/// A missing `news_dir` is created and reported through [`Listing::created`]
/// with no programmes.
pub fn scan_programmes(news_dir: &Path) -> Result<Listing, ScanError> {
    if !news_dir.exists() {
        debug!(path = %news_dir.display(), "creating news directory");
        fs::create_dir_all(news_dir).map_err(ScanError::io(news_dir))?;
        return Ok(Listing {
            programmes: Vec::new(),
            created: true,
        });
    }

    let mut programmes = Vec::new();
    for entry in fs::read_dir(news_dir).map_err(ScanError::io(news_dir))? {
        let entry = entry.map_err(ScanError::io(news_dir))?;
        let path = entry.path();
        let Some(folder) = utf8_name(&entry) else {
            continue;
        };
        // Hidden folders hold drafts and VCS metadata
        if folder.starts_with('.') || !path.is_dir() {
            continue;
        }
        programmes.push(Programme {
            title: folder_to_title(&folder),
            folder,
            path,
        });
    }

    programmes.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.folder.cmp(&b.folder)));
    debug!(count = programmes.len(), "scanned programmes");

    Ok(Listing {
        programmes,
        created: false,
    })
}

/// List the gallery media directly inside a programme folder.
///
/// Keeps regular files whose extension is a configured image or video
/// extension, skipping the reserved description and detail-page names.
/// Sorted by file name.
pub fn list_media(folder: &Path, config: &SiteConfig) -> Result<Vec<MediaFile>, ScanError> {
    let mut media = Vec::new();
    for entry in fs::read_dir(folder).map_err(ScanError::io(folder))? {
        let entry = entry.map_err(ScanError::io(folder))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        if config.programme.is_reserved(&name) {
            continue;
        }
        if let Some(kind) = config.media.kind_of(&name) {
            media.push(MediaFile { name, kind });
        }
    }

    media.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(media)
}

/// The entry's file name, or `None` with a warning when it is not UTF-8.
///
/// Such names cannot be written into page links without altering them.
fn utf8_name(entry: &fs::DirEntry) -> Option<String> {
    match entry.file_name().into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            warn!(path = %entry.path().display(), name = ?raw, "skipping non-UTF-8 name");
            None
        }
    }
}
