//! HTML page rendering.
//!
//! Pure functions from typed input to [`Markup`]: no filesystem access, so
//! every page can be tested from plain values. The build in
//! [`crate::generate`] decides where the output goes.
//!
//! ## Pages
//!
//! - **Listing page** ([`render_listing`]): one card per programme linking to
//!   its detail page, or an empty-state block when there are none.
//! - **Detail page** ([`render_detail`]): title, verbatim description and a
//!   gallery of images and videos. The gallery is left out entirely when the
//!   programme has no media.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped, including the user-written description.

use crate::config::{self, BrandConfig};
use crate::naming::media_label;
use crate::types::{MediaFile, MediaKind, Programme};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use urlencoding::encode;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/nav.js");

/// Assemble the full stylesheet: brand colour variables, then static styles.
pub fn site_css(colors: &config::ColorConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(colors), CSS_STATIC)
}

/// Chrome shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct PageShell<'a> {
    pub brand: &'a BrandConfig,
    pub css: &'a str,
    /// Path prefix from the page back to the site root (`""` or `"../../"`).
    pub root: &'a str,
    /// Listing page path, relative to the site root.
    pub listing_href: &'a str,
}

impl<'a> PageShell<'a> {
    /// The same chrome for a page at a different depth below the site root.
    pub fn nested(self, root: &'a str) -> Self {
        Self { root, ..self }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    shell: &PageShell,
    title: &str,
    meta_description: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(meta_description);
                title { (title) " | " (shell.brand.name) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet";
                style { (PreEscaped(shell.css)) }
            }
            body {
                (navbar(shell))
                (content)
                footer.footer {
                    div.footer-content {
                        p.footer-text { (shell.brand.footer) }
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the top navigation bar with logo and links
fn navbar(shell: &PageShell) -> Markup {
    let home = format!("{}{}", shell.root, shell.brand.home_href);
    let listing = format!("{}{}", shell.root, shell.listing_href);
    html! {
        nav.navbar {
            div.nav-container {
                a.logo href=(home) {
                    div.logo-icon { (shell.brand.logo_text) }
                    div.logo-text {
                        (shell.brand.name)
                        span { (shell.brand.tagline) }
                    }
                }
                button.mobile-menu-btn type="button" id="menuToggle" aria-label="Toggle menu" { "☰" }
                ul.nav-links id="navLinks" {
                    li { a href=(home) { "About" } }
                    li { a.active href=(listing) { "News" } }
                }
            }
        }
    }
}

fn page_header(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        header.page-header {
            div.page-header-content {
                h1 { (title) }
                @if let Some(subtitle) = subtitle {
                    p { (subtitle) }
                }
            }
        }
    }
}

fn news_card(programme: &Programme, href: &str) -> Markup {
    html! {
        a.news-card href=(href) {
            div.news-card-header {
                h3 { (programme.title) }
            }
            div.news-card-body {
                p { "Click to view details, photos, and videos from this programme." }
            }
            div.news-card-footer { "View Programme →" }
        }
    }
}

fn gallery_item(media: &MediaFile) -> Markup {
    html! {
        div.gallery-item {
            @match media.kind {
                MediaKind::Image => {
                    img src=(encode(&media.name)) alt=(media_label(&media.name)) loading="lazy";
                }
                MediaKind::Video => {
                    video src=(encode(&media.name)) controls preload="metadata" {}
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the listing page with one card per programme, in the given order.
///
/// Cards link to `{news_dir}/{folder}/{detail_file}` relative to the shell
/// root, with the folder name percent-encoded. The order is not changed here;
/// callers pass the scanner's order.
pub fn render_listing(
    shell: &PageShell,
    programmes: &[Programme],
    news_dir: &str,
    detail_file: &str,
) -> Markup {
    let news_dir = news_dir.trim_end_matches('/');
    let content = html! {
        (page_header(&shell.brand.listing_title, Some(shell.brand.listing_subtitle.as_str())))
        main.main-content {
            @if programmes.is_empty() {
                div.empty-state {
                    div.empty-state-icon { "📰" }
                    h3 { "No Programmes Yet" }
                    p { "Check back soon for updates on our latest programmes and activities!" }
                }
            } @else {
                div.news-grid {
                    @for programme in programmes {
                        (news_card(programme, &format!(
                            "{}{}/{}/{}",
                            shell.root, news_dir, encode(&programme.folder), detail_file
                        )))
                    }
                }
            }
        }
    };

    base_document(
        shell,
        &shell.brand.listing_title,
        &shell.brand.listing_meta,
        content,
    )
}

/// Renders a programme detail page.
///
/// The description is shown verbatim: whitespace is preserved by the
/// stylesheet and markup characters are escaped. Media entries keep their
/// order; the gallery section only exists when `media` is non-empty.
pub fn render_detail(
    shell: &PageShell,
    title: &str,
    description: &str,
    media: &[MediaFile],
) -> Markup {
    let listing = format!("{}{}", shell.root, shell.listing_href);
    let meta_description = format!("{} - {} Programme", title, shell.brand.name);

    let content = html! {
        (page_header(title, None))
        main.main-content {
            a.back-link href=(listing) { "← Back to News" }
            article.programme-content {
                div.programme-description { (description) }
                @if !media.is_empty() {
                    section.gallery-section {
                        h2 { "📸 Photos & Videos" }
                        div.gallery-grid {
                            @for item in media {
                                (gallery_item(item))
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(shell, title, &meta_description, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn programme(folder: &str) -> Programme {
        Programme {
            folder: folder.to_string(),
            title: crate::naming::folder_to_title(folder),
            path: PathBuf::from("news").join(folder),
        }
    }

    fn image(name: &str) -> MediaFile {
        MediaFile {
            name: name.to_string(),
            kind: MediaKind::Image,
        }
    }

    fn video(name: &str) -> MediaFile {
        MediaFile {
            name: name.to_string(),
            kind: MediaKind::Video,
        }
    }

    fn with_shell<R>(root: &str, f: impl FnOnce(&PageShell) -> R) -> R {
        let brand = BrandConfig::default();
        let shell = PageShell {
            brand: &brand,
            css: "body {}",
            root,
            listing_href: "news.html",
        };
        f(&shell)
    }

    fn listing_html(programmes: &[Programme]) -> String {
        with_shell("", |shell| {
            render_listing(shell, programmes, "news", "index.html").into_string()
        })
    }

    fn detail_html(title: &str, description: &str, media: &[MediaFile]) -> String {
        with_shell("../../", |shell| {
            render_detail(shell, title, description, media).into_string()
        })
    }

    #[test]
    fn listing_has_one_card_per_programme() {
        let programmes = vec![programme("art-workshop"), programme("youth-camp")];
        let html = listing_html(&programmes);
        assert_eq!(html.matches(r#"class="news-card""#).count(), 2);
    }

    #[test]
    fn listing_preserves_input_order() {
        let programmes = vec![programme("zeta"), programme("alpha")];
        let html = listing_html(&programmes);
        let zeta = html.find("<h3>Zeta</h3>").unwrap();
        let alpha = html.find("<h3>Alpha</h3>").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn listing_cards_link_to_detail_pages() {
        let html = listing_html(&[programme("youth-camp")]);
        assert!(html.contains(r#"href="news/youth-camp/index.html""#));
    }

    #[test]
    fn listing_link_respects_shell_root_and_trailing_slash() {
        let html = with_shell("site/", |shell| {
            render_listing(shell, &[programme("camp")], "news/", "page.html").into_string()
        });
        assert!(html.contains(r#"href="site/news/camp/page.html""#));
    }

    #[test]
    fn listing_link_percent_encodes_folder() {
        let html = listing_html(&[programme("open day #2")]);
        assert!(html.contains(r#"href="news/open%20day%20%232/index.html""#));
        assert!(html.contains("<h3>Open Day #2</h3>"));
    }

    #[test]
    fn empty_listing_renders_empty_state() {
        let html = listing_html(&[]);
        assert!(html.contains(r#"class="empty-state""#));
        assert!(html.contains("No Programmes Yet"));
        assert!(!html.contains(r#"class="news-card""#));
        assert!(!html.contains(r#"class="news-grid""#));
    }

    #[test]
    fn listing_title_and_meta() {
        let html = listing_html(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>News &amp; Programmes | YMCA Matara</title>"));
        assert!(html.contains("Latest news and programmes from YMCA Matara"));
    }

    #[test]
    fn listing_marks_news_link_active() {
        let html = listing_html(&[]);
        assert!(html.contains(r#"href="news.html">News</a>"#));
        assert!(html.contains(r#"class="active""#));
    }

    #[test]
    fn detail_without_media_has_no_gallery() {
        let html = detail_html("Youth Camp", "Fun.", &[]);
        assert!(!html.contains(r#"class="gallery-section""#));
        assert!(!html.contains(r#"class="gallery-item""#));
        assert!(!html.contains("Photos &amp; Videos"));
    }

    #[test]
    fn detail_has_one_gallery_item_per_media_in_order() {
        let media = vec![image("a.jpg"), video("b.mp4"), image("c.png")];
        let html = detail_html("Youth Camp", "Fun.", &media);

        assert_eq!(html.matches(r#"class="gallery-section""#).count(), 1);
        assert_eq!(html.matches(r#"class="gallery-item""#).count(), 3);
        let a = html.find(r#"src="a.jpg""#).unwrap();
        let b = html.find(r#"src="b.mp4""#).unwrap();
        let c = html.find(r#"src="c.png""#).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn detail_image_gets_alt_from_stem() {
        let html = detail_html("Camp", "", &[image("group-photo_2024.jpg")]);
        assert!(html.contains(r#"alt="Group Photo 2024""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn detail_video_embed() {
        let html = detail_html("Camp", "", &[video("opening.MOV")]);
        assert!(html.contains("<video"));
        assert!(html.contains(r#"src="opening.MOV""#));
        assert!(html.contains(r#"preload="metadata""#));
        assert!(html.contains("controls"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn detail_media_src_is_percent_encoded() {
        let media = vec![image("photo #1.jpg"), image("50%.png"), video("café.mp4")];
        let html = detail_html("Camp", "", &media);
        assert!(html.contains(r#"src="photo%20%231.jpg""#));
        assert!(html.contains(r#"src="50%25.png""#));
        assert!(html.contains(r#"src="caf%C3%A9.mp4""#));
        assert!(html.contains(r#"alt="Photo #1""#));
    }

    #[test]
    fn detail_escapes_description_markup() {
        let html = detail_html(
            "Camp",
            "<script>alert('x')</script> & <b>bold</b>",
            &[],
        );
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; &lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn detail_keeps_description_whitespace() {
        let description = "Line one\n\n    indented line\n";
        let html = detail_html("Camp", description, &[]);
        assert!(html.contains(&format!(
            r#"<div class="programme-description">{description}</div>"#
        )));
    }

    #[test]
    fn detail_escapes_title() {
        let html = detail_html("<i>Camp</i>", "", &[]);
        assert!(html.contains("<h1>&lt;i&gt;Camp&lt;/i&gt;</h1>"));
    }

    #[test]
    fn detail_links_back_to_listing_from_nested_root() {
        let html = detail_html("Camp", "", &[]);
        assert!(html.contains(r#"href="../../news.html""#));
        assert!(html.contains(r#"href="../../index.html""#));
        assert!(html.contains("Back to News"));
    }

    #[test]
    fn detail_meta_description_names_programme() {
        let html = detail_html("Youth Camp", "", &[]);
        assert!(html.contains(r#"content="Youth Camp - YMCA Matara Programme""#));
        assert!(html.contains("<title>Youth Camp | YMCA Matara</title>"));
    }

    #[test]
    fn nested_shell_keeps_brand() {
        let brand = BrandConfig {
            name: "Riverside".to_string(),
            ..BrandConfig::default()
        };
        let shell = PageShell {
            brand: &brand,
            css: "",
            root: "",
            listing_href: "news.html",
        };
        let nested = shell.nested("../../");
        assert_eq!(nested.root, "../../");
        assert_eq!(nested.brand.name, "Riverside");
    }

    #[test]
    fn site_css_starts_with_brand_variables() {
        let css = site_css(&config::ColorConfig::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--brand-primary: #004a99;"));
        assert!(css.contains(".gallery-grid"));
    }
}
