//! Hero banner.

use super::{Button, Motion};
use crate::assets::{DEFAULT_ASSET_BASE, asset_url};
use crate::content::{HERO_HEADLINE, HERO_ID, HERO_IMAGE, HERO_IMAGE_ALT, HERO_SUBHEADLINE};
use crate::motion::{FADE_UP, RevealTrigger, STAGGER, stagger_delay};
use leptos::prelude::*;

/// Full-bleed image with a left-to-right white fade, headline, lead and two
/// calls to action revealed as a stagger on mount.
#[component]
pub fn Hero(
    /// Base URL for image assets
    #[prop(into, default = DEFAULT_ASSET_BASE.to_string())]
    asset_base: String,
) -> impl IntoView {
    let image = asset_url(&asset_base, HERO_IMAGE);

    view! {
        <section id=HERO_ID class="hero">
            <div class="hero-media">
                <img src=image alt=HERO_IMAGE_ALT class="hero-image" />
                <div class="hero-overlay"></div>
            </div>
            <div class="container">
                <Motion preset=STAGGER class="hero-content">
                    <Motion preset=FADE_UP trigger=RevealTrigger::Parent delay=stagger_delay(0)>
                        <h1 class="hero-title">{HERO_HEADLINE}</h1>
                    </Motion>
                    <Motion preset=FADE_UP trigger=RevealTrigger::Parent delay=stagger_delay(1)>
                        <p class="hero-lead">{HERO_SUBHEADLINE}</p>
                    </Motion>
                    <Motion
                        preset=FADE_UP
                        trigger=RevealTrigger::Parent
                        delay=stagger_delay(2)
                        class="hero-actions"
                    >
                        <Button class="btn-primary">"Get started"</Button>
                        <Button class="btn-outline">"Learn more"</Button>
                    </Motion>
                </Motion>
            </div>
        </section>
    }
}
