//! Site build.
//!
//! Runs the whole pipeline in one pass: scan the news directory, write the
//! listing page, then read, render and write each programme's detail page.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── config.toml                # Optional, see crate::config
//! ├── news.html                  # Listing page (generated)
//! └── news/
//!     ├── art-workshop/
//!     │   ├── description.txt
//!     │   ├── 001-painting.jpg
//!     │   └── index.html         # Detail page (generated)
//!     └── youth-camp/
//!         └── ...
//! ```
//!
//! ## Failure Handling
//!
//! A programme without a description file still gets a page, showing the
//! configured placeholder; the build records a [`BuildWarning`]. Any other
//! I/O failure stops the build immediately. Pages already written stay on
//! disk.

use crate::config::SiteConfig;
use crate::render::{self, PageShell};
use crate::scan::{self, ScanError};
use crate::types::{Programme, ProgrammeContent};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to read {path}: {source}")]
    ReadDescription {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A recoverable problem noticed during the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// The programme folder has no description file; the placeholder was used.
    MissingDescription { folder: String, file: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::MissingDescription { folder, file } => {
                write!(f, "No {file} found in {folder}")
            }
        }
    }
}

/// One generated detail page.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub folder: String,
    pub title: String,
    /// Output path relative to the site root.
    pub output: String,
    pub images: usize,
    pub videos: usize,
    pub missing_description: bool,
}

/// Everything a build produced, in build order.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Listing page path relative to the site root.
    pub listing: String,
    /// The news directory did not exist and was created empty.
    pub created_news_dir: bool,
    pub pages: Vec<PageReport>,
    pub warnings: Vec<BuildWarning>,
}

/// Read a programme's description and media from its folder.
///
/// A missing description file gives `description: None`; an existing file
/// that cannot be read is an error.
pub fn load_programme(
    programme: &Programme,
    config: &SiteConfig,
) -> Result<ProgrammeContent, GenerateError> {
    let description_path = programme.path.join(&config.programme.description_file);
    let description = if description_path.is_file() {
        let text = fs::read_to_string(&description_path).map_err(|source| {
            GenerateError::ReadDescription {
                path: description_path.clone(),
                source,
            }
        })?;
        Some(text)
    } else {
        None
    };

    let media = scan::list_media(&programme.path, config)?;

    Ok(ProgrammeContent {
        programme: programme.clone(),
        description,
        media,
    })
}

/// Scan the site and load every programme without writing anything.
///
/// Like the build, this creates the news directory if it is missing.
pub fn inspect(root: &Path, config: &SiteConfig) -> Result<Vec<ProgrammeContent>, GenerateError> {
    let listing = scan::scan_programmes(&root.join(&config.news_dir))?;
    listing
        .programmes
        .iter()
        .map(|programme| load_programme(programme, config))
        .collect()
}

/// Build the listing page and every detail page under `root`.
pub fn build(root: &Path, config: &SiteConfig) -> Result<BuildReport, GenerateError> {
    let news_dir = root.join(&config.news_dir);
    let listing = scan::scan_programmes(&news_dir)?;
    info!(
        programmes = listing.programmes.len(),
        news_dir = %news_dir.display(),
        "scanned news directory"
    );

    let css = render::site_css(&config.colors);
    let listing_root = config.listing_root_prefix();
    let shell = PageShell {
        brand: &config.brand,
        css: &css,
        root: &listing_root,
        listing_href: &config.listing_file,
    };

    let listing_html = render::render_listing(
        &shell,
        &listing.programmes,
        &config.news_dir,
        &config.programme.detail_file,
    );
    let listing_path = root.join(&config.listing_file);
    if let Some(parent) = listing_path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_page(&listing_path, &listing_html.into_string())?;

    let detail_root = config.detail_root_prefix();
    let detail_shell = shell.nested(&detail_root);

    let mut pages = Vec::with_capacity(listing.programmes.len());
    let mut warnings = Vec::new();

    for programme in &listing.programmes {
        let content = load_programme(programme, config)?;

        let description = match &content.description {
            Some(text) => text.as_str(),
            None => {
                let warning = BuildWarning::MissingDescription {
                    folder: programme.folder.clone(),
                    file: config.programme.description_file.clone(),
                };
                warn!("{warning}");
                warnings.push(warning);
                config.programme.placeholder.as_str()
            }
        };

        let html =
            render::render_detail(&detail_shell, &programme.title, description, &content.media);
        write_page(
            &programme.path.join(&config.programme.detail_file),
            &html.into_string(),
        )?;
        debug!(folder = %programme.folder, media = content.media.len(), "wrote detail page");

        pages.push(PageReport {
            folder: programme.folder.clone(),
            title: programme.title.clone(),
            output: relative_output(config, &programme.folder),
            images: content.image_count(),
            videos: content.video_count(),
            missing_description: content.description.is_none(),
        });
    }

    Ok(BuildReport {
        listing: config.listing_file.clone(),
        created_news_dir: listing.created,
        pages,
        warnings,
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), GenerateError> {
    fs::write(path, html).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn relative_output(config: &SiteConfig, folder: &str) -> String {
    format!(
        "{}/{}/{}",
        config.news_dir.trim_end_matches('/'),
        folder,
        config.programme.detail_file
    )
}
