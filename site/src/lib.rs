//! # novelus-site
//!
//! Leptos SSR renderer for the Novelus IP landing page.
//!
//! The page is a fixed stack of sections (hero, credentials, services,
//! software lab, approach, contact) composed from a few styled primitives
//! and shared entrance-animation presets. It renders to a single static
//! HTML document; a small inline script handles the scroll reveals.
//!
//! ## Quick Start
//!
//! ```rust
//! use novelus_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records
//! - [`content`] - the literal datasets and copy
//! - [`motion`] - animation presets and the fire-once reveal latch
//! - [`components`] - Leptos components, primitives up to the document
//! - [`styles`] - CSS constants
//! - [`anchors`] - in-page link verification
//! - [`assets`] - image URL construction
//!
//! ## Leptos 0.8 SSR
//!
//! No reactive runtime or hydration is used:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <Services /> }.to_html();
//! ```

pub mod anchors;
pub mod assets;
pub mod components;
pub mod content;
pub mod motion;
pub mod styles;
pub mod types;

use components::{COPYRIGHT_YEAR, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page.
///
/// Returns a full HTML document including `<!DOCTYPE html>`.
///
/// ```rust
/// use novelus_site::{render_page, PageOptions};
///
/// let options = PageOptions {
///     asset_base: "https://cdn.example.com/img".into(),
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(html.contains("https://cdn.example.com/img/Light%20Bulb.jpg"));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <PageDocument options=options.clone() /> };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), title = %options.title, "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Document-level settings.
///
/// Defaults reproduce the production page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// Base URL that image file names are joined onto
    pub asset_base: String,
    /// Year printed in the footer copyright line
    pub copyright_year: u16,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: content::BRAND.to_string(),
            lang: "en".to_string(),
            asset_base: assets::DEFAULT_ASSET_BASE.to_string(),
            copyright_year: COPYRIGHT_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NAV_LINKS, SERVICES, STEPS};
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_page(&PageOptions::default())
    }

    #[test]
    fn renders_full_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains("<title>Novelus IP</title>"));
        assert!(html.contains("@keyframes motion-fade-up"));
        assert!(html.contains("IntersectionObserver"));
    }

    #[test]
    fn every_nav_anchor_resolves_exactly_once() {
        let html = page();
        let resolved = anchors::verify_anchors(&html).unwrap();
        for link in NAV_LINKS {
            assert!(resolved.contains(&link.anchor.to_string()));
            assert_eq!(html.matches(&format!(r#" id="{}""#, link.anchor)).count(), 1);
        }
        assert_eq!(html.matches(r#" id="top""#).count(), 1);
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let html = page();
        let order = [
            r#"class="site-bg""#,
            r#"class="site-header""#,
            r#"id="top""#,
            r#"class="creds""#,
            r#"id="services""#,
            r#"id="software""#,
            r#"id="approach""#,
            r#"id="contact""#,
            r#"class="site-footer""#,
        ];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn page_uses_default_datasets() {
        let html = page();
        assert_eq!(html.matches(r#"class="service-title""#).count(), SERVICES.len());
        assert_eq!(html.matches(r#"class="step-title""#).count(), STEPS.len());
        assert_eq!(html.matches("<label").count(), 5);
    }

    #[test]
    fn in_view_and_mount_triggers() {
        let page = page();
        // the inline script's selector mentions the attribute too
        let html = &page[..page.find("<script>").unwrap()];
        // service cards, lab cards, step cards, approach heading + lead, credentials strip
        assert_eq!(html.matches(r#"data-trigger="in-view""#).count(), 4 + 2 + 3 + 2 + 1);
        assert!(html.matches(r#"data-trigger="mount""#).count() >= 4);
    }

    #[test]
    fn options_flow_into_document() {
        let options = PageOptions {
            title: "Novelus IP | Preview".into(),
            lang: "en-GB".into(),
            asset_base: "/static/img/".into(),
            copyright_year: 2026,
        };
        let html = render_page(&options);
        assert!(html.contains(r#"lang="en-GB""#));
        assert!(html.contains("Novelus IP | Preview"));
        assert!(html.contains("/static/img/Decision.jpg"));
        assert!(html.contains("2026 Novelus IP"));
    }
}
