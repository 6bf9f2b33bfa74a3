//! Services grid.

use super::{Card, CheckIcon, Motion};
use crate::content::{SERVICES, SERVICES_LEAD, SERVICES_TITLE};
use crate::motion::{CARD_RISE, FADE_UP, RevealTrigger, card_delay};
use crate::types::ServiceEntry;
use leptos::prelude::*;

/// Heading plus one card per service entry.
#[component]
pub fn Services(#[prop(default = SERVICES)] entries: &'static [ServiceEntry]) -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <Motion preset=FADE_UP class="text-center">
                    <h2 class="section-title">{SERVICES_TITLE}</h2>
                    <p class="section-lead">{SERVICES_LEAD}</p>
                </Motion>
                <div class="services-grid">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(idx, entry)| view! { <ServiceCard entry=*entry index=idx /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Accent bar over a bordered body with the feature checklist.
#[component]
fn ServiceCard(entry: ServiceEntry, index: usize) -> impl IntoView {
    let accent_class = format!("service-accent {}", entry.accent.class());

    view! {
        <Motion
            preset=CARD_RISE
            trigger=RevealTrigger::InView
            delay=card_delay(index)
            class="service-card hover-lift"
        >
            <div class=accent_class></div>
            <Card class="service-body">
                <h3 class="service-title">{entry.title}</h3>
                <p class="service-text">{entry.description}</p>
                <ul class="feature-list">
                    {entry
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="feature-item">
                                    <CheckIcon class="icon-check text-secondary" />
                                    {*feature}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Card>
        </Motion>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn default_dataset_renders_four_cards() {
        let html = view! { <Services /> }.to_html();
        assert_eq!(html.matches(r#"class="service-title""#).count(), 4);
        assert_eq!(html.matches(r#"class="feature-item""#).count(), 16);
        assert!(html.contains(r#"id="services""#));
    }

    #[test]
    fn cards_and_features_keep_input_order() {
        let html = view! { <Services /> }.to_html();
        let mut last = 0;
        for entry in SERVICES {
            // `&` is escaped in text, match on the part before it
            let title = entry.title.split('&').next().unwrap();
            let at = html[last..].find(title).map(|p| p + last).unwrap();
            assert!(at >= last);
            last = at;
            for feature in entry.features {
                let at = html[last..].find(feature).map(|p| p + last).unwrap();
                last = at;
            }
        }
    }

    #[test]
    fn cards_reveal_with_increasing_delay() {
        let html = view! { <Services /> }.to_html();
        assert_eq!(html.matches(r#"data-motion="card-rise""#).count(), 4);
        assert!(html.contains("--motion-delay: 0.10s"));
        assert!(html.contains("--motion-delay: 0.20s"));
        assert!(html.contains("--motion-delay: 0.30s"));
        assert_eq!(html.matches("hover-lift").count(), 4);
    }

    #[test]
    fn custom_dataset() {
        static ONE: &[ServiceEntry] = &[ServiceEntry {
            title: "Licensing",
            description: "Out-licensing support",
            features: &["Term sheets"],
            accent: Accent::Secondary,
        }];
        let html = view! { <Services entries=ONE /> }.to_html();
        assert_eq!(html.matches(r#"class="service-title""#).count(), 1);
        assert!(html.contains("Term sheets"));
        assert!(html.contains("service-accent accent-secondary"));
    }
}
