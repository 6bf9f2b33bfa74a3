//! Contact form shell.
//!
//! The form has no `action` and the page script cancels `submit`, so
//! nothing ever leaves the browser. Required markers are presentation only.

use super::{Button, Card, Motion, TextArea, TextInput};
use crate::content::{CONTACT_FIELDS, CONTACT_LEAD, CONTACT_SUBMIT, CONTACT_TITLE};
use crate::motion::FADE_UP;
use crate::types::{ContactField, FieldKind};
use leptos::prelude::*;

/// Delay of the form card behind the heading, in seconds.
const FORM_DELAY: f32 = 0.2;

/// Heading and the bordered form card.
#[component]
pub fn Contact(#[prop(default = CONTACT_FIELDS)] fields: &'static [ContactField]) -> impl IntoView {
    // first two fields share a row
    let (row, rest) = fields.split_at(fields.len().min(2));

    view! {
        <section id="contact" class="section section-muted">
            <div class="container container-narrow">
                <Motion preset=FADE_UP class="text-center">
                    <h2 class="section-title">{CONTACT_TITLE}</h2>
                    <p class="section-lead">{CONTACT_LEAD}</p>
                </Motion>
                <Motion preset=FADE_UP delay=FORM_DELAY class="contact-card-wrap">
                    <Card class="contact-card">
                        <form class="contact-form" data-role="contact-form">
                            <div class="form-row">
                                {row
                                    .iter()
                                    .map(|field| view! { <FieldView field=*field /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            {rest
                                .iter()
                                .map(|field| view! { <FieldView field=*field /> })
                                .collect::<Vec<_>>()}
                            <div class="form-actions">
                                <Button kind="submit" class="btn-primary">{CONTACT_SUBMIT}</Button>
                            </div>
                        </form>
                    </Card>
                </Motion>
            </div>
        </section>
    }
}

/// Label plus the control matching the field kind.
#[component]
fn FieldView(field: ContactField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::Multiline => view! {
            <TextArea
                id=field.id
                name=field.id
                placeholder=field.placeholder
                required=field.required
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <TextInput
                id=field.id
                name=field.id
                input_type=field.kind.input_type()
                placeholder=field.placeholder
                required=field.required
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=field.id class="field-label">{field.display_label()}</label>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <Contact /> }.to_html()
    }

    #[test]
    fn five_labeled_controls_and_one_submit() {
        let html = render();
        assert_eq!(html.matches("<label").count(), 5);
        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(html.matches("<textarea").count(), 1);
        assert_eq!(html.matches(r#"type="submit""#).count(), 1);
        for field in CONTACT_FIELDS {
            assert!(html.contains(&format!(r#"for="{}""#, field.id)));
            assert!(html.contains(&format!(r#"id="{}""#, field.id)));
        }
    }

    #[test]
    fn required_markers_are_presentational() {
        let html = render();
        assert!(html.contains("Name *"));
        assert!(html.contains("Company (optional)"));
        assert!(html.contains("Message *"));
        assert_eq!(html.matches(" required").count(), 4);
    }

    #[test]
    fn form_has_no_endpoint() {
        let html = render();
        assert!(html.contains(r#"data-role="contact-form""#));
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
    }

    #[test]
    fn email_field_uses_email_input() {
        let html = render();
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"placeholder="your@email.com""#));
    }
}
