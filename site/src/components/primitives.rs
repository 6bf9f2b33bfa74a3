//! Styled pass-through wrappers around native controls.
//!
//! Each primitive renders exactly one element whose class is its baseline
//! class followed by whatever the caller passes in `class`.

use leptos::prelude::*;

pub const BUTTON_CLASS: &str = "btn";
pub const CARD_CLASS: &str = "card";
pub const FIELD_CLASS: &str = "field-input";

/// Baseline class first, caller classes appended. Blank caller input is ignored.
pub fn merge_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// A `<button>` with the baseline button style.
#[component]
pub fn Button(
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    /// The `type` attribute
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(optional)] disabled: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button type=kind class=merge_classes(BUTTON_CLASS, &class) disabled=disabled>
            {children()}
        </button>
    }
}

/// A bordered container.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=merge_classes(CARD_CLASS, &class)>{children()}</div> }
}

/// A single-line `<input>`.
#[component]
pub fn TextInput(
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] name: Option<&'static str>,
    /// The `type` attribute
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=name
            type=input_type
            class=merge_classes(FIELD_CLASS, &class)
            placeholder=placeholder
            required=required
        />
    }
}

/// A multi-line `<textarea>`.
#[component]
pub fn TextArea(
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] name: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(default = "4")] rows: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            name=name
            class=merge_classes(FIELD_CLASS, &class)
            placeholder=placeholder
            rows=rows
            required=required
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn merge_keeps_base_first() {
        assert_eq!(merge_classes("btn", "btn-primary"), "btn btn-primary");
        assert_eq!(merge_classes("btn", "  "), "btn");
        assert_eq!(merge_classes("card", ""), "card");
    }

    #[test]
    fn button_merges_caller_class() {
        let html = view! { <Button class="btn-primary">"Go"</Button> }.to_html();
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("Go"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn submit_button_and_disabled_flag() {
        let html = view! { <Button kind="submit" disabled=true>"Send"</Button> }.to_html();
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn card_wraps_children() {
        let html = view! { <Card class="contact-card"><p>"inside"</p></Card> }.to_html();
        assert!(html.contains(r#"class="card contact-card""#));
        assert!(html.contains("<p>inside</p>"));
    }

    #[test]
    fn text_input_attributes() {
        let html = view! {
            <TextInput id="contact-email" input_type="email" placeholder="your@email.com" required=true />
        }
        .to_html();
        assert!(html.contains(r#"id="contact-email""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"placeholder="your@email.com""#));
        assert!(html.contains("required"));
        assert!(html.contains(r#"class="field-input""#));
    }

    #[test]
    fn optional_input_has_no_required_flag() {
        let html = view! { <TextInput placeholder="Your company" /> }.to_html();
        assert!(!html.contains("required"));
        assert!(!html.contains("id="));
    }

    #[test]
    fn text_area_rows() {
        let html = view! { <TextArea rows="6" /> }.to_html();
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"rows="6""#));
    }
}
