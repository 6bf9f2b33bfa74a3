//! Subcommand handlers.

use anyhow::{Context, Result};
use novelus_site::anchors::verify_anchors_with;
use novelus_site::content::HERO_ID;
use novelus_site::content::page_content;
use novelus_site::{PageOptions, render_page};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the rendered document inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Render, verify anchors, and write `<out>/index.html`.
pub fn build(options: &PageOptions, out: &Path) -> Result<PathBuf> {
    let html = render_checked(options)?;

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;
    let path = out.join(INDEX_FILE);
    std::fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(path)
}

/// Render to the given writer.
pub fn render(options: &PageOptions, out: &mut impl Write) -> Result<()> {
    let html = render_page(options);
    out.write_all(html.as_bytes())
        .context("Failed to write rendered page")?;
    Ok(())
}

/// Render and report the resolved anchors, including the hero's `#top`.
pub fn check(options: &PageOptions, out: &mut impl Write) -> Result<Vec<String>> {
    let html = render_page(options);
    let anchors = verify_anchors_with(&html, &[HERO_ID]).context("In-page navigation is broken")?;
    for anchor in &anchors {
        writeln!(out, "ok  #{}", anchor)?;
    }
    writeln!(out, "{} anchors resolve to exactly one section", anchors.len())?;
    Ok(anchors)
}

/// Dump every dataset as pretty JSON.
pub fn content(out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&page_content())?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn render_checked(options: &PageOptions) -> Result<String> {
    let html = render_page(options);
    let anchors = verify_anchors_with(&html, &[HERO_ID]).context("In-page navigation is broken")?;
    debug!(anchors = anchors.len(), "anchors verified");
    Ok(html)
}
