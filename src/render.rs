//! Page and card rendering.
//!
//! Pure functions from manifest data to [`Markup`]. Nothing here touches the
//! filesystem; the generate stage decides which pages to write and with
//! which navigation state.
//!
//! ## Page Layout
//!
//! ```text
//! header     heading + tagline
//! tab bar    🎥 Project Videos | 📸 Project Images | 📜 Certificates
//! panel      one per tab, only the checked one is visible
//! footer     Made with ❤️ by <author>
//! ```
//!
//! Tabs are CSS-only: a radio input per tab precedes the tab bar and the
//! panels, and `:checked ~` selectors reveal the matching panel. The
//! generated page therefore works without JavaScript, and the active tab of
//! a given page is just which radio starts out `checked`.
//!
//! ## Cards
//!
//! [`render_card`] dispatches on [`AssetKind`]:
//!
//! | Kind | Renders |
//! |------|---------|
//! | video | "Project N", subtitle, description, tech badges, link buttons, player |
//! | image | picture with "Project Image N" caption |
//! | certificate-image | picture captioned with the file name + download |
//! | certificate-pdf | link to the file + download |
//!
//! An asset with a `problem` renders as an inline error block instead.

use crate::animation::Animation;
use crate::assets::{Asset, AssetKind, Tab};
use crate::config::SiteConfig;
use crate::grid;
use crate::metadata;
use crate::scan::{DirStatus, Manifest, TabListing};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Which tab a rendered page opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub active: Tab,
}

/// What every card needs besides its asset.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub config: &'a SiteConfig,
    pub card_animation: Option<&'a Animation>,
}

// ============================================================================
// Page
// ============================================================================

/// Render the whole page with `nav.active` selected.
pub fn render_page(manifest: &Manifest, css: &str, nav: NavState) -> Markup {
    let config = &manifest.config;
    let ctx = CardContext {
        config,
        card_animation: manifest.animations.card.as_ref(),
    };

    let content = html! {
        (site_header(config))
        main.tabs {
            @for tab in Tab::ALL {
                input.tab-toggle type="radio" name="tab" id={ "tab-" (tab.slug()) }
                    checked[tab == nav.active];
            }
            nav.tab-bar {
                @for tab in Tab::ALL {
                    label.tab-label for={ "tab-" (tab.slug()) } { (tab.label()) }
                }
            }
            div.tab-panels {
                @for tab in Tab::ALL {
                    section.tab-panel id={ "panel-" (tab.slug()) } {
                        h2.tab-heading { (config.tab_heading(tab)) }
                        @if let Some(listing) = manifest.tab(tab) {
                            (render_tab_body(listing, manifest, &ctx))
                        }
                    }
                }
            }
        }
        (site_footer(config))
    };

    base_document(&config.site.title, &config.site.lang, css, content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            h1 { (config.site.heading) }
            @if !config.site.tagline.trim().is_empty() {
                div.tagline { (PreEscaped(markdown_to_html(&config.site.tagline))) }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            "Made with ❤️ by " strong { (config.site.author) }
        }
    }
}

fn markdown_to_html(source: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(source));
    out
}

// ============================================================================
// Tab bodies
// ============================================================================

fn render_tab_body(listing: &TabListing, manifest: &Manifest, ctx: &CardContext) -> Markup {
    let config = &manifest.config;
    html! {
        @if listing.tab == Tab::Videos {
            p.tab-intro { (config.videos.intro) }
            @if let Some(banner) = &manifest.animations.banner {
                (render_animation(banner, "banner-animation"))
            }
        }
        @match &listing.status {
            DirStatus::Missing => {
                (missing_banner(listing))
            }
            DirStatus::Unreadable { message } => {
                div.banner.error role="alert" {
                    "Could not read '" (listing.dir) "': " (message)
                }
            }
            DirStatus::Found if listing.assets.is_empty() => {
                p.empty-note { "Nothing here yet." }
            }
            DirStatus::Found => {
                (render_cards(listing, ctx))
            }
        }
    }
}

/// Missing videos is an error (the tab is the page's headline); missing
/// images or certificates is a warning.
fn missing_banner(listing: &TabListing) -> Markup {
    let level = if listing.tab == Tab::Videos {
        "error"
    } else {
        "warning"
    };
    html! {
        div class={ "banner " (level) } role="alert" {
            (listing.tab.folder_noun()) " folder not found. Please ensure '"
            (listing.dir) "' exists."
        }
    }
}

fn render_cards(listing: &TabListing, ctx: &CardContext) -> Markup {
    match listing.tab {
        Tab::Videos => html! {
            div.video-list {
                @for (idx, asset) in listing.assets.iter().enumerate() {
                    (render_card(asset, idx + 1, ctx))
                }
            }
        },
        Tab::Images => {
            let width = ctx.config.row_width();
            html! {
                div.image-grid style={ "--row-width: " (width.get()) } {
                    @for (start, row) in grid::paginate(&listing.assets, width).with_ordinals() {
                        div.grid-row {
                            @for (offset, asset) in row.iter().enumerate() {
                                (render_card(asset, start + offset, ctx))
                            }
                        }
                    }
                }
                @if !ctx.config.images.closing_note.is_empty() {
                    div.banner.success { (ctx.config.images.closing_note) }
                }
            }
        }
        Tab::Certificates => html! {
            div.cert-list {
                @for (idx, asset) in listing.assets.iter().enumerate() {
                    (render_card(asset, idx + 1, ctx))
                    hr.cert-rule;
                }
            }
        },
    }
}

// ============================================================================
// Cards
// ============================================================================

/// Render one asset. `ordinal` is 1-based within its tab.
pub fn render_card(asset: &Asset, ordinal: usize, ctx: &CardContext) -> Markup {
    if let Some(problem) = &asset.problem {
        return failed_card(asset, problem);
    }
    match asset.kind {
        AssetKind::Video => video_card(asset, ordinal, ctx),
        AssetKind::Image => image_card(asset, ordinal, ctx.config),
        AssetKind::CertificateImage | AssetKind::CertificatePdf => certificate_card(asset),
    }
}

fn failed_card(asset: &Asset, problem: &str) -> Markup {
    html! {
        div.card.failed-card role="alert" {
            strong { (asset.name) } " could not be shown: " (problem)
        }
    }
}

fn video_card(asset: &Asset, ordinal: usize, ctx: &CardContext) -> Markup {
    let videos = &ctx.config.videos;
    let description = metadata::resolve(&[
        asset.description.as_deref(),
        Some(videos.description.as_str()),
    ]);

    html! {
        article.card.project-card {
            div.project-info {
                h3.project-title { "🎯 " (videos.title_prefix) " " (ordinal) }
                @if let Some(title) = &asset.title {
                    p.project-subtitle { (title) }
                }
                @if let Some(description) = description {
                    p.project-description { (description) }
                }
                @if !videos.tech_stack.is_empty() {
                    p.tech-heading { b { "🔧 Tech Stack:" } }
                    div.tech-badges {
                        @for tech in &videos.tech_stack {
                            span.tech-badge { (tech) }
                        }
                    }
                }
                @if asset.kind.has_external_links() {
                    div.project-links {
                        a.link-button href=(videos.github_url) target="_blank" rel="noopener" {
                            "🔗 GitHub"
                        }
                        a.link-button href=(videos.demo_url) target="_blank" rel="noopener" {
                            "🌐 Live Demo"
                        }
                    }
                }
                @if let Some(anim) = ctx.card_animation {
                    (render_animation(anim, "card-animation"))
                }
            }
            div.project-media {
                video controls preload="metadata" src=(asset_url(&asset.path)) {
                    "Your browser does not support embedded video. "
                    a href=(asset_url(&asset.path)) { "Download " (asset.name) }
                }
            }
        }
    }
}

fn image_card(asset: &Asset, ordinal: usize, config: &SiteConfig) -> Markup {
    let caption = format!("{} {}", config.images.caption_prefix, ordinal);
    let alt = asset.title.clone().unwrap_or_else(|| caption.clone());
    html! {
        figure.card.image-card {
            (picture(asset, &alt))
            figcaption { (caption) }
        }
    }
}

fn certificate_card(asset: &Asset) -> Markup {
    html! {
        div.cert-row {
            div.cert-preview {
                @if asset.kind.has_preview_media() {
                    figure.card.image-card {
                        (picture(asset, asset.title.as_deref().unwrap_or(&asset.name)))
                        figcaption { (asset.name) }
                    }
                } @else {
                    a.cert-link href=(asset_url(&asset.path)) { "📄 " (asset.name) }
                }
            }
            @if asset.kind.has_download_action() {
                div.cert-actions {
                    (download_button(asset))
                }
            }
        }
    }
}

fn picture(asset: &Asset, alt: &str) -> Markup {
    let (width, height) = match asset.dimensions {
        Some((w, h)) => (Some(w), Some(h)),
        None => (None, None),
    };
    html! {
        img src=(asset_url(&asset.path)) alt=(alt) width=[width] height=[height] loading="lazy";
    }
}

/// Relative URL for a content path. Each segment is percent-encoded so
/// names with `#`, `?`, `%` or spaces still resolve to the copied file.
fn asset_url(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// A link that saves the file under its original name.
fn download_button(asset: &Asset) -> Markup {
    html! {
        a.download-button href=(asset_url(&asset.path)) download=(asset.name) { "📥 Download" }
    }
}

/// Embed an animation descriptor for a client-side player.
fn render_animation(anim: &Animation, class: &str) -> Markup {
    // JSON can contain "</script>"; escape the slash so it cannot close the tag
    let json = anim.data.to_string().replace("</", "<\\/");
    html! {
        div class={ "animation " (class) } data-src=(asset_url(&anim.path)) {
            script type="application/json" { (PreEscaped(json)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animations;
    use serde_json::json;

    fn asset(name: &str, kind: AssetKind, dir: &str) -> Asset {
        Asset {
            name: name.to_string(),
            kind,
            path: format!("{dir}/{name}"),
            title: crate::naming::display_title(name),
            description: None,
            dimensions: None,
            problem: None,
        }
    }

    fn listing(tab: Tab, status: DirStatus, assets: Vec<Asset>) -> TabListing {
        TabListing {
            tab,
            dir: tab.dir(),
            status,
            assets,
        }
    }

    fn manifest_with(tabs: Vec<TabListing>) -> Manifest {
        Manifest {
            tabs,
            animations: Animations::default(),
            warnings: vec![],
            config: SiteConfig::default(),
        }
    }

    fn images(n: usize) -> Vec<Asset> {
        (1..=n)
            .map(|i| asset(&format!("{i:02}.png"), AssetKind::Image, "assets/images"))
            .collect()
    }

    fn ctx(config: &SiteConfig) -> CardContext<'_> {
        CardContext {
            config,
            card_animation: None,
        }
    }

    // =========================================================================
    // Cards
    // =========================================================================

    #[test]
    fn video_card_has_ordinal_title_links_and_player() {
        let config = SiteConfig::default();
        let video = asset("010-face-mask.mp4", AssetKind::Video, "assets/videos");
        let html = render_card(&video, 3, &ctx(&config)).into_string();

        assert!(html.contains("Project 3"));
        assert!(html.contains("face mask"));
        assert!(html.contains(r#"src="assets/videos/010-face-mask.mp4""#));
        assert!(html.contains("<video"));
        assert!(html.contains("https://github.com/your_project"));
        assert!(html.contains("https://yourliveproject.com"));
        assert!(html.contains(r#"class="tech-badge""#));
        assert!(html.contains(&config.videos.description));
    }

    #[test]
    fn video_card_prefers_sidecar_description() {
        let config = SiteConfig::default();
        let mut video = asset("demo.mp4", AssetKind::Video, "assets/videos");
        video.description = Some("Detects masks in realtime.".to_string());
        let html = render_card(&video, 1, &ctx(&config)).into_string();

        assert!(html.contains("Detects masks in realtime."));
        assert!(!html.contains(&config.videos.description));
    }

    #[test]
    fn video_card_embeds_card_animation_when_present() {
        let config = SiteConfig::default();
        let anim = Animation {
            path: "assets/animations/animation.json".to_string(),
            data: json!({"fr": 30, "nm": "</script><b>"}),
        };
        let ctx = CardContext {
            config: &config,
            card_animation: Some(&anim),
        };
        let video = asset("demo.mp4", AssetKind::Video, "assets/videos");
        let html = render_card(&video, 1, &ctx).into_string();

        assert!(html.contains("card-animation"));
        assert!(html.contains(r#"type="application/json""#));
        assert!(html.contains(r#"<\/script>"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn video_card_without_animation_omits_element() {
        let config = SiteConfig::default();
        let video = asset("demo.mp4", AssetKind::Video, "assets/videos");
        let html = render_card(&video, 1, &ctx(&config)).into_string();
        assert!(!html.contains("animation"));
    }

    #[test]
    fn image_card_caption_from_ordinal() {
        let config = SiteConfig::default();
        let mut img = asset("shot.png", AssetKind::Image, "assets/images");
        img.dimensions = Some((640, 480));
        let html = render_card(&img, 4, &ctx(&config)).into_string();

        assert!(html.contains("<figcaption>Project Image 4</figcaption>"));
        assert!(html.contains(r#"width="640""#));
        assert!(html.contains(r#"height="480""#));
        assert!(html.contains(r#"alt="shot""#));
    }

    #[test]
    fn pdf_certificate_has_link_and_download() {
        let config = SiteConfig::default();
        let cert = asset("cert1.pdf", AssetKind::CertificatePdf, "assets/certificates");
        let html = render_card(&cert, 1, &ctx(&config)).into_string();

        assert!(html.contains(r#"<a class="cert-link" href="assets/certificates/cert1.pdf">"#));
        assert!(html.contains(r#"download="cert1.pdf""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn image_certificate_has_preview_captioned_by_name_and_download() {
        let config = SiteConfig::default();
        let cert = asset("ml-course.png", AssetKind::CertificateImage, "assets/certificates");
        let html = render_card(&cert, 1, &ctx(&config)).into_string();

        assert!(html.contains(r#"src="assets/certificates/ml-course.png""#));
        assert!(html.contains("<figcaption>ml-course.png</figcaption>"));
        assert!(html.contains(r#"download="ml-course.png""#));
    }

    #[test]
    fn asset_with_problem_renders_failed_card() {
        let config = SiteConfig::default();
        let mut img = asset("broken.png", AssetKind::Image, "assets/images");
        img.problem = Some("cannot decode image: bad header".to_string());
        let html = render_card(&img, 1, &ctx(&config)).into_string();

        assert!(html.contains("failed-card"));
        assert!(html.contains("broken.png"));
        assert!(html.contains("bad header"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn card_text_is_escaped() {
        let config = SiteConfig::default();
        let mut video = asset("x.mp4", AssetKind::Video, "assets/videos");
        video.description = Some("<script>alert('xss')</script>".to_string());
        let html = render_card(&video, 1, &ctx(&config)).into_string();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn asset_urls_are_percent_encoded_per_segment() {
        assert_eq!(asset_url("assets/certificates/cert1.pdf"), "assets/certificates/cert1.pdf");
        assert_eq!(asset_url("assets/certificates/cert#1.pdf"), "assets/certificates/cert%231.pdf");
        assert_eq!(
            asset_url("assets/certificates/50% off?.pdf"),
            "assets/certificates/50%25%20off%3F.pdf"
        );
    }

    #[test]
    fn download_button_encodes_href_but_not_file_name() {
        let config = SiteConfig::default();
        let cert = asset("cert#1.pdf", AssetKind::CertificatePdf, "assets/certificates");
        let html = render_card(&cert, 1, &ctx(&config)).into_string();

        assert!(html.contains(r#"href="assets/certificates/cert%231.pdf" download="cert#1.pdf""#));
        assert!(html.contains("📄 cert#1.pdf"));
    }

    // =========================================================================
    // Page
    // =========================================================================

    #[test]
    fn page_starts_with_doctype_and_title() {
        let manifest = manifest_with(vec![]);
        let html = render_page(&manifest, "", NavState { active: Tab::Videos }).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My AI/ML Portfolio</title>"));
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn active_tab_is_the_only_checked_radio() {
        let manifest = manifest_with(vec![]);
        let html = render_page(&manifest, "", NavState { active: Tab::Images }).into_string();

        assert_eq!(html.matches("checked").count(), 1);
        assert!(html.contains(r#"id="tab-images" checked"#));
    }

    #[test]
    fn five_images_width_two_render_three_rows() {
        let manifest = manifest_with(vec![listing(Tab::Images, DirStatus::Found, images(5))]);
        let html = render_page(&manifest, "", NavState { active: Tab::Images }).into_string();

        assert_eq!(html.matches(r#"class="grid-row""#).count(), 3);
        assert_eq!(html.matches(r#"class="card image-card""#).count(), 5);
        assert!(html.contains("Project Image 5"));
        assert!(html.contains("--row-width: 2"));
        assert!(html.contains("These visuals highlight"));
    }

    #[test]
    fn missing_images_dir_shows_warning_and_no_cards() {
        let manifest = manifest_with(vec![
            listing(
                Tab::Videos,
                DirStatus::Found,
                vec![asset("a.mp4", AssetKind::Video, "assets/videos")],
            ),
            listing(Tab::Images, DirStatus::Missing, vec![]),
        ]);
        let html = render_page(&manifest, "", NavState { active: Tab::Images }).into_string();

        assert!(html.contains(
            "Image folder not found. Please ensure &#39;assets/images&#39; exists."
        ) || html.contains("Image folder not found. Please ensure 'assets/images' exists."));
        assert!(html.contains(r#"class="banner warning""#));
        assert!(!html.contains("image-card"));
        // Videos tab still renders
        assert!(html.contains("Project 1"));
    }

    #[test]
    fn missing_videos_dir_is_an_error_banner() {
        let manifest = manifest_with(vec![listing(Tab::Videos, DirStatus::Missing, vec![])]);
        let html = render_page(&manifest, "", NavState { active: Tab::Videos }).into_string();

        assert!(html.contains(r#"class="banner error""#));
        assert!(html.contains("Video folder not found"));
    }

    #[test]
    fn unreadable_dir_shows_message() {
        let manifest = manifest_with(vec![listing(
            Tab::Certificates,
            DirStatus::Unreadable {
                message: "Permission denied".to_string(),
            },
            vec![],
        )]);
        let html = render_page(&manifest, "", NavState { active: Tab::Certificates })
            .into_string();

        assert!(html.contains("Permission denied"));
        assert!(html.contains("banner error"));
    }

    #[test]
    fn empty_found_dir_has_note_and_no_closing_note() {
        let manifest = manifest_with(vec![listing(Tab::Images, DirStatus::Found, vec![])]);
        let html = render_page(&manifest, "", NavState { active: Tab::Images }).into_string();

        assert!(html.contains("Nothing here yet."));
        assert!(!html.contains("These visuals highlight"));
    }

    #[test]
    fn banner_animation_rendered_only_when_present() {
        let mut manifest = manifest_with(vec![listing(Tab::Videos, DirStatus::Found, vec![])]);
        let without = render_page(&manifest, "", NavState { active: Tab::Videos }).into_string();
        assert!(!without.contains("banner-animation"));

        manifest.animations.banner = Some(Animation {
            path: "assets/animations/banner.json".to_string(),
            data: json!({"v": "5.7.4"}),
        });
        let with = render_page(&manifest, "", NavState { active: Tab::Videos }).into_string();
        assert!(with.contains("banner-animation"));
        assert!(with.contains(r#"data-src="assets/animations/banner.json""#));
    }

    #[test]
    fn certificates_separated_by_rules() {
        let manifest = manifest_with(vec![listing(
            Tab::Certificates,
            DirStatus::Found,
            vec![
                asset("a.pdf", AssetKind::CertificatePdf, "assets/certificates"),
                asset("b.pdf", AssetKind::CertificatePdf, "assets/certificates"),
            ],
        )]);
        let html = render_page(&manifest, "", NavState { active: Tab::Certificates })
            .into_string();

        assert_eq!(html.matches("cert-rule").count(), 2);
        assert_eq!(html.matches("download-button").count(), 2);
    }

    #[test]
    fn tagline_markdown_rendered_and_footer_credits_author() {
        let mut manifest = manifest_with(vec![]);
        manifest.config.site.author = "Ada".to_string();
        let html = render_page(&manifest, "", NavState { active: Tab::Videos }).into_string();

        assert!(html.contains("<strong>project demos</strong>"));
        assert!(html.contains("Made with ❤️ by <strong>Ada</strong>"));
    }

    #[test]
    fn css_is_inlined() {
        let manifest = manifest_with(vec![]);
        let html = render_page(&manifest, ".x > .y { color: red; }", NavState {
            active: Tab::Videos,
        })
        .into_string();
        assert!(html.contains("<style>.x > .y { color: red; }</style>"));
    }
}
