//! Shared test utilities for the newsroom test suite.
//!
//! Provides a fixture site and lookup helpers that panic with a readable
//! message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let listing = scan_programmes(&tmp.path().join("news")).unwrap();
//! let camp = find_programme(&listing, "Youth Camp");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::generate::{BuildReport, PageReport};
use crate::types::{Listing, MediaFile, Programme};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// The fixture has three visible programmes (`art-workshop`,
/// `beach_clean-up` without a description, `youth-camp` with mixed media),
/// a hidden `.drafts` folder and a stray `README.txt`.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Read a generated file relative to the temp site root.
pub fn read_output(tmp: &TempDir, relative: &str) -> String {
    let path = tmp.path().join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a programme by title. Panics if not found.
pub fn find_programme<'a>(listing: &'a Listing, title: &str) -> &'a Programme {
    listing
        .programmes
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles = programme_titles(listing);
            panic!("programme '{title}' not found. Available: {titles:?}")
        })
}

/// Find a page report by folder. Panics if not found.
pub fn find_page_report<'a>(report: &'a BuildReport, folder: &str) -> &'a PageReport {
    report
        .pages
        .iter()
        .find(|p| p.folder == folder)
        .unwrap_or_else(|| {
            let folders: Vec<&str> = report.pages.iter().map(|p| p.folder.as_str()).collect();
            panic!("page for '{folder}' not found. Available: {folders:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All programme titles in listing order.
pub fn programme_titles(listing: &Listing) -> Vec<&str> {
    listing.programmes.iter().map(|p| p.title.as_str()).collect()
}

/// All media file names in order.
pub fn media_names(media: &[MediaFile]) -> Vec<&str> {
    media.iter().map(|m| m.name.as_str()).collect()
}
