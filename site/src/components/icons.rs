//! Inline SVG icons.

use leptos::prelude::*;

/// Checkmark stroke path (24x24 grid).
pub const ICON_CHECK: &str = "M20 6L9 17l-5-5";

/// Small checkmark drawn with `currentColor`.
///
/// `class` replaces the default sizing class entirely.
///
/// ```rust,ignore
/// view! { <CheckIcon class="icon-check icon-check-lg text-primary" /> }
/// ```
#[component]
pub fn CheckIcon(#[prop(default = "icon-check")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=ICON_CHECK></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn check_icon_default_class() {
        let html = view! { <CheckIcon /> }.to_html();
        assert!(html.contains(r#"class="icon-check""#));
        assert!(html.contains(ICON_CHECK));
        assert!(html.contains(r#"stroke="currentColor""#));
    }

    #[test]
    fn check_icon_custom_class() {
        let html = view! { <CheckIcon class="icon-check text-secondary" /> }.to_html();
        assert!(html.contains(r#"class="icon-check text-secondary""#));
    }
}
