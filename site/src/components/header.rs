//! Sticky site header.

use super::{BrandMark, Button, Motion, NavLinks};
use crate::content::{BRAND, NAV_LINKS};
use crate::motion::BRAND_SLIDE;
use crate::types::NavLink;
use leptos::prelude::*;

/// Brand, anchor navigation and the consult call to action.
#[component]
pub fn Header(#[prop(default = NAV_LINKS)] links: &'static [NavLink]) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <Motion preset=BRAND_SLIDE class="brand">
                    <BrandMark />
                    <span class="brand-name">{BRAND}</span>
                </Motion>
                <nav class="site-nav" aria-label="Primary">
                    <NavLinks links=links />
                </nav>
                <a href="#contact" class="header-cta">
                    <Button class="btn-primary">"Request consult"</Button>
                </a>
            </div>
        </header>
    }
}
