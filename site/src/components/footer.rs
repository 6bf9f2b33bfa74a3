//! Page footer.

use super::{BrandMark, NavLinks};
use crate::content::{BRAND, NAV_LINKS, PARENT_COMPANY};
use crate::types::NavLink;
use leptos::prelude::*;

/// Default copyright year printed in the footer.
pub const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn Footer(
    #[prop(default = NAV_LINKS)] links: &'static [NavLink],
    #[prop(default = COPYRIGHT_YEAR)] year: u16,
) -> impl IntoView {
    let copyright = format!("\u{a9} {} {}", year, BRAND);

    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <div class="footer-brand-row">
                        <BrandMark />
                        <span>{copyright}</span>
                    </div>
                    <span>{PARENT_COMPANY}</span>
                </div>
                <nav class="footer-nav" aria-label="Footer">
                    <NavLinks links=links />
                    <a href="#" class="footer-link-muted">"Privacy"</a>
                </nav>
            </div>
        </footer>
    }
}
