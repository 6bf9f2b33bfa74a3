//! Fixed decorative backdrop behind every section.

use leptos::prelude::*;

/// Two blurred brand-colour blobs. Click-through, never intercepts input.
#[component]
pub fn BackgroundDeco() -> impl IntoView {
    view! {
        <div class="site-bg" aria-hidden="true">
            <div class="bg-blob bg-blob-primary"></div>
            <div class="bg-blob bg-blob-secondary"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn backdrop_is_hidden_from_assistive_tech() {
        let html = view! { <BackgroundDeco /> }.to_html();
        assert!(html.contains(r#"class="site-bg""#));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert_eq!(html.matches("bg-blob ").count(), 2);
    }
}
