//! Three-step process explainer.

use super::{Card, Motion};
use crate::assets::{DEFAULT_ASSET_BASE, asset_url};
use crate::content::{APPROACH_LEAD, APPROACH_TITLE, STEPS};
use crate::motion::{CARD_DELAY_STEP, CARD_RISE, HEADING_RISE, RevealTrigger, card_delay};
use crate::types::ProcessStep;
use leptos::prelude::*;

/// Heading and lead, then one card per step in table order.
#[component]
pub fn Approach(
    #[prop(default = STEPS)] steps: &'static [ProcessStep],
    #[prop(into, default = DEFAULT_ASSET_BASE.to_string())] asset_base: String,
) -> impl IntoView {
    view! {
        <section id="approach" class="section">
            <div class="container">
                <Motion preset=HEADING_RISE trigger=RevealTrigger::InView>
                    <h2 class="section-title">{APPROACH_TITLE}</h2>
                </Motion>
                <Motion preset=HEADING_RISE trigger=RevealTrigger::InView delay=CARD_DELAY_STEP>
                    <p class="section-lead">{APPROACH_LEAD}</p>
                </Motion>
                <div class="steps-grid">
                    {steps
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| {
                            let image = asset_url(&asset_base, step.image);
                            view! {
                                <Motion
                                    preset=CARD_RISE
                                    trigger=RevealTrigger::InView
                                    delay=card_delay(idx)
                                    class="hover-lift"
                                >
                                    <Card class="step-card">
                                        <img src=image alt=step.title class="step-image" />
                                        <div class="step-body">
                                            <h3 class="step-title">{step.title}</h3>
                                            <p class="step-text">{step.description}</p>
                                        </div>
                                    </Card>
                                </Motion>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn step_titles(html: &str) -> Vec<String> {
        html.split(r#"<h3 class="step-title">"#)
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn steps_render_in_order() {
        let html = view! { <Approach /> }.to_html();
        assert_eq!(step_titles(&html), vec!["Discovery", "Diligence", "Decision"]);
    }

    #[test]
    fn images_match_steps() {
        let html = view! { <Approach /> }.to_html();
        let srcs: Vec<_> = STEPS
            .iter()
            .map(|s| html.find(&format!(r#"src="{}""#, asset_url(DEFAULT_ASSET_BASE, s.image))).unwrap())
            .collect();
        assert!(srcs.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"alt="Diligence""#));
        assert!(html.contains("Targeted research and interviews."));
    }

    #[test]
    fn custom_steps() {
        static TWO: &[ProcessStep] = &[
            ProcessStep {
                title: "Scope",
                description: "Agree on questions.",
                image: "scope.jpg",
            },
            ProcessStep {
                title: "Report",
                description: "Written findings.",
                image: "report.jpg",
            },
        ];
        let html = view! { <Approach steps=TWO asset_base="" /> }.to_html();
        assert_eq!(step_titles(&html), vec!["Scope", "Report"]);
        assert!(html.contains(r#"src="report.jpg""#));
    }
}
