//! Software lab showcase.

use super::{Motion, merge_classes};
use crate::assets::{DEFAULT_ASSET_BASE, asset_url};
use crate::content::{LABS, SOFTWARE_CTA, SOFTWARE_LEAD, SOFTWARE_TITLE};
use crate::motion::{CARD_RISE, RevealTrigger, card_delay};
use crate::types::LabEntry;
use leptos::prelude::*;

/// Heading with a contact link, then one image-led article per lab entry.
#[component]
pub fn SoftwareLab(
    #[prop(default = LABS)] entries: &'static [LabEntry],
    #[prop(into, default = DEFAULT_ASSET_BASE.to_string())] asset_base: String,
) -> impl IntoView {
    view! {
        <section id="software" class="section section-muted">
            <div class="container">
                <div class="software-head">
                    <div>
                        <h2 class="section-title">{SOFTWARE_TITLE}</h2>
                        <p class="section-lead">{SOFTWARE_LEAD}</p>
                    </div>
                    <a href="#contact" class="software-cta">{SOFTWARE_CTA}</a>
                </div>
                <div class="lab-grid">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(idx, entry)| {
                            let image = asset_url(&asset_base, entry.image);
                            view! {
                                <Motion
                                    preset=CARD_RISE
                                    trigger=RevealTrigger::InView
                                    delay=card_delay(idx)
                                    class="hover-lift"
                                >
                                    <article class=merge_classes(super::CARD_CLASS, "lab-card")>
                                        <div class="lab-media">
                                            <img src=image alt=entry.title class="lab-image" />
                                            <span class="lab-badge">{entry.title}</span>
                                        </div>
                                        <div class="lab-body">
                                            <p class="lab-text">{entry.description}</p>
                                            <div class="tag-list">
                                                {entry
                                                    .tags
                                                    .iter()
                                                    .map(|tag| view! { <span class="tag">{*tag}</span> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    </article>
                                </Motion>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
