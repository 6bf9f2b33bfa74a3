//! Brand mark shared by header and footer.

use crate::content::BRAND_INITIAL;
use leptos::prelude::*;

/// The split blue/green square with the brand initial.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="brand-mark" aria-hidden="true">
            <span class="brand-initial">{BRAND_INITIAL}</span>
        </div>
    }
}

/// Anchor links rendered from a navigation table.
#[component]
pub fn NavLinks(
    links: &'static [crate::types::NavLink],
    #[prop(default = "nav-link")] link_class: &'static str,
) -> impl IntoView {
    links
        .iter()
        .map(move |link| {
            view! { <a href=link.href() class=link_class>{link.label}</a> }
        })
        .collect::<Vec<_>>()
}
