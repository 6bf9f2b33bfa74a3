//! Credentials strip under the hero.

use super::{CheckIcon, Motion};
use crate::content::CREDENTIALS;
use crate::motion::{FADE_UP, RevealTrigger, STAGGER, stagger_delay};
use crate::types::CredentialItem;
use leptos::prelude::*;

/// Label/description pairs with a checkmark, revealed as a stagger the
/// first time the strip scrolls into view.
#[component]
pub fn Credentials(
    #[prop(default = CREDENTIALS)] items: &'static [CredentialItem],
) -> impl IntoView {
    view! {
        <section class="creds">
            <div class="container">
                <Motion preset=STAGGER trigger=RevealTrigger::InView class="creds-grid">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            view! {
                                <Motion
                                    preset=FADE_UP
                                    trigger=RevealTrigger::Parent
                                    delay=stagger_delay(idx)
                                    class="cred-item"
                                >
                                    <CheckIcon class="icon-check icon-check-lg text-primary" />
                                    <div>
                                        <p class="cred-label">{item.label}</p>
                                        <p class="cred-text">{item.description}</p>
                                    </div>
                                </Motion>
                            }
                        })
                        .collect::<Vec<_>>()}
                </Motion>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_four_credentials_in_order() {
        let html = view! { <Credentials /> }.to_html();
        assert_eq!(html.matches(r#"class="cred-label""#).count(), 4);
        let examiners = html.find("Examiners").unwrap();
        let results = html.find("Results").unwrap();
        assert!(examiners < results);
        assert_eq!(html.matches("icon-check-lg").count(), 4);
    }

    #[test]
    fn strip_waits_for_viewport() {
        let html = view! { <Credentials /> }.to_html();
        assert!(html.contains(r#"class="motion motion-stagger creds-grid""#));
        assert!(html.contains(r#"data-trigger="in-view""#));
        assert!(!html.contains("is-revealed"));
    }
}
