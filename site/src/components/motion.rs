//! Motion wrapper - attaches an animation preset and reveal trigger to a block.

use crate::motion::{AnimationPreset, RevealLatch, RevealTrigger, delay_style};
use leptos::prelude::*;

/// Class list for a motion element: `motion motion-<preset> [is-revealed] [extra]`.
pub fn motion_class(preset: &AnimationPreset, latch: &RevealLatch, extra: &str) -> String {
    let mut class = format!("motion {}", preset.class_name());
    if latch.is_revealed() {
        class.push_str(" is-revealed");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A `<div>` that plays `preset` once, when `trigger` fires.
///
/// Mount-triggered blocks are rendered already revealed. In-view blocks are
/// picked up by the page script and revealed the first time they intersect
/// the viewport. Parent-triggered blocks animate when their nearest
/// revealed ancestor does, which is how stagger children are wired.
#[component]
pub fn Motion(
    preset: AnimationPreset,
    #[prop(optional)] trigger: RevealTrigger,
    /// Seconds before the transition starts
    #[prop(default = 0.0)]
    delay: f32,
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let latch = RevealLatch::new(trigger);
    let class = motion_class(&preset, &latch, &class);
    let style = (delay > 0.0).then(|| delay_style(delay));

    view! {
        <div
            id=id
            class=class
            data-motion=preset.name
            data-trigger=trigger.as_attr()
            style=style
        >
            {children()}
        </div>
    }
}
