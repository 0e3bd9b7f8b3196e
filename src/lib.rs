//! # Newsroom
//!
//! A small static site generator for an organisation's news pages. Each
//! folder under `news/` is a programme: its name becomes the title, its
//! `description.txt` the text, and its images and videos the gallery.
//!
//! # Pipeline
//!
//! A build is one linear pass with no intermediate state:
//!
//! ```text
//! 1. Scan      news/            →  programmes sorted by title
//! 2. Listing   programmes       →  news.html
//! 3. Detail    each programme   →  news/<folder>/index.html
//! ```
//!
//! Every run regenerates everything from the filesystem, so the same input
//! always produces byte-identical pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Folder and file names → display titles |
//! | [`config`] | Optional `config.toml`: paths, media extensions, brand text and colours |
//! | [`scan`] | Finds programme folders and their media files |
//! | [`render`] | Pure Maud templates for the listing and detail pages |
//! | [`generate`] | Runs the build, writes pages, collects warnings |
//! | [`types`] | Shared data model (`Programme`, `MediaFile`, ...) |
//! | [`output`] | CLI output formatting for build and check |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Pages are generated with [Maud](https://maud.lambda.xyz/). Descriptions are
//! written by whoever maintains the folders and are shown verbatim; Maud
//! escapes every interpolated value, so a stray `<` in a description is text,
//! not markup.
//!
//! ## Explicit Configuration
//!
//! Paths, reserved file names, media extensions and brand text all live in
//! [`config::SiteConfig`], passed down from `main`. The scanner and renderer
//! never consult global state, which keeps them testable in isolation.
//!
//! ## Pages Next to Their Content
//!
//! Detail pages are written into the programme folders themselves, so media
//! references are plain file names and a folder can be moved as a unit.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
