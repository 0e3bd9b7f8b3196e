//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Each programme is shown by its positional index and display title, with
//! the folder, description and media as indented context lines. Paths are
//! secondary: the output reads as a content inventory.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Programmes
//! 001 Art Workshop
//!     Source: art-workshop/
//!     Description: description.txt
//!     Media: 1 image, 0 videos
//! 002 Beach Clean Up
//!     Source: beach_clean-up/
//!     Description: missing
//!     Media: 0 images, 1 video
//! ```
//!
//! ## Build
//!
//! ```text
//! Listing → news.html (2 programmes)
//! 001 Art Workshop → news/art-workshop/index.html
//!     1 image, 0 videos
//! 002 Beach Clean Up → news/beach_clean-up/index.html
//!     0 images, 1 video
//!
//! Warnings
//!     No description.txt found in beach_clean-up
//!
//! Generated 1 listing page, 2 programme pages, 1 warning
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and do no I/O; `print_*`
//! wrappers write them to stdout.

use crate::config::SiteConfig;
use crate::generate::BuildReport;
use crate::types::ProgrammeContent;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 image`, `2 images`, `0 videos`...
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn media_summary(images: usize, videos: usize) -> String {
    format!("{}, {}", plural(images, "image"), plural(videos, "video"))
}

// ============================================================================
// Check
// ============================================================================

/// Format the programme inventory found by `newsroom check`.
pub fn format_check_output(programmes: &[ProgrammeContent], config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Programmes".to_string()];

    if programmes.is_empty() {
        lines.push(format!("    (none in {}/)", config.news_dir));
        return lines;
    }

    for (i, content) in programmes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), content.programme.title));
        lines.push(format!("    Source: {}/", content.programme.folder));
        match content.description {
            Some(_) => lines.push(format!(
                "    Description: {}",
                config.programme.description_file
            )),
            None => lines.push("    Description: missing".to_string()),
        }
        lines.push(format!(
            "    Media: {}",
            media_summary(content.image_count(), content.video_count())
        ));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(programmes: &[ProgrammeContent], config: &SiteConfig) {
    for line in format_check_output(programmes, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the build report: generated pages, warnings, and a summary line.
pub fn format_build_output(report: &BuildReport, news_dir: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if report.created_news_dir {
        lines.push(format!("Created empty {}/", news_dir));
    }

    lines.push(format!(
        "Listing \u{2192} {} ({})",
        report.listing,
        plural(report.pages.len(), "programme")
    ));

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.output
        ));
        lines.push(format!("    {}", media_summary(page.images, page.videos)));
    }

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &report.warnings {
            lines.push(format!("    {}", warning));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 listing page, {}, {}",
        plural(report.pages.len(), "programme page"),
        plural(report.warnings.len(), "warning")
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport, news_dir: &str) {
    for line in format_build_output(report, news_dir) {
        println!("{}", line);
    }
}
