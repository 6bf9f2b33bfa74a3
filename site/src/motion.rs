//! Entrance animation presets.
//!
//! A preset is data: a start state, a target state and timing. The browser
//! does the interpolation; presets are compiled into CSS keyframes by
//! [`motion_css`] and attached to elements through
//! [`crate::components::Motion`].
//!
//! Reveal triggers:
//!
//! - [`RevealTrigger::Mount`] - rendered already revealed, animates on first paint
//! - [`RevealTrigger::InView`] - revealed by the page script the first time the
//!   element intersects the viewport, then unobserved
//! - [`RevealTrigger::Parent`] - follows the nearest revealed container
//!   (stagger children)

use std::fmt::Write as _;

/// Visual dimensions of an element at one end of a transition.
///
/// `None` leaves the dimension untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// 0.0 transparent .. 1.0 opaque
    pub opacity: Option<f32>,
    /// Horizontal offset in px
    pub x: Option<f32>,
    /// Vertical offset in px
    pub y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
}

impl VisualState {
    /// No visual change at all.
    pub const NONE: VisualState = VisualState {
        opacity: None,
        x: None,
        y: None,
        scale: None,
    };

    fn dimensions(&self) -> [bool; 4] {
        [
            self.opacity.is_some(),
            self.x.is_some(),
            self.y.is_some(),
            self.scale.is_some(),
        ]
    }

    /// True when no dimension is set.
    pub fn is_empty(&self) -> bool {
        self.dimensions().iter().all(|set| !set)
    }

    /// CSS `transform` value, if any transform dimension is set.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                fmt_num(self.x.unwrap_or(0.0)),
                fmt_num(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", fmt_num(scale)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// CSS declarations for this state, e.g. `opacity: 0; transform: translate(0px, 30px);`
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        if let Some(opacity) = self.opacity {
            let _ = write!(out, "opacity: {};", fmt_num(opacity));
        }
        if let Some(transform) = self.transform() {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "transform: {};", transform);
        }
        out
    }
}

/// Timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    Linear,
}

impl Easing {
    /// CSS timing-function keyword.
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::Linear => "linear",
        }
    }
}

/// Transition timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Seconds
    pub duration: f32,
    pub easing: Easing,
    /// Per-child delay in seconds when applied to a container
    pub stagger: Option<f32>,
}

/// A named entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPreset {
    /// Kebab-case name, used for CSS class and keyframes
    pub name: &'static str,
    pub initial: VisualState,
    pub target: VisualState,
    pub timing: Timing,
}

impl AnimationPreset {
    /// Class carried by elements using this preset.
    pub fn class_name(&self) -> String {
        format!("motion-{}", self.name)
    }

    /// Both ends set exactly the same dimensions, so interpolation is defined.
    pub fn is_consistent(&self) -> bool {
        self.initial.dimensions() == self.target.dimensions()
    }

    /// Container-only presets change nothing themselves.
    pub fn is_visual(&self) -> bool {
        !self.initial.is_empty()
    }

    /// Delay for the child at `index` when this preset staggers its children.
    pub fn child_delay(&self, index: usize) -> f32 {
        self.timing.stagger.unwrap_or(0.0) * index as f32
    }

    /// Keyframes plus the initial and revealed rules for this preset.
    ///
    /// Empty for container-only presets.
    pub fn css(&self) -> String {
        if !self.is_visual() {
            return String::new();
        }
        let class = self.class_name();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "@keyframes {class} {{ from {{ {} }} to {{ {} }} }}",
            self.initial.declarations(),
            self.target.declarations()
        );
        let _ = writeln!(out, ".{class} {{ {} }}", self.initial.declarations());
        let _ = writeln!(
            out,
            ".{class}.is-revealed, .is-revealed .{class}[data-trigger=\"parent\"] {{ animation: {class} {}s {} var(--motion-delay, 0s) both; }}",
            fmt_num(self.timing.duration),
            self.timing.easing.css()
        );
        out
    }
}

const fn ease_out(duration: f32) -> Timing {
    Timing {
        duration,
        easing: Easing::EaseOut,
        stagger: None,
    }
}

/// Opacity 0 to 1 while rising 30 px.
pub const FADE_UP: AnimationPreset = AnimationPreset {
    name: "fade-up",
    initial: VisualState {
        opacity: Some(0.0),
        y: Some(30.0),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        y: Some(0.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.8),
};

/// Container preset: delays each child's own transition by 0.15 s per index.
pub const STAGGER: AnimationPreset = AnimationPreset {
    name: "stagger",
    initial: VisualState::NONE,
    target: VisualState::NONE,
    timing: Timing {
        duration: 0.0,
        easing: Easing::Linear,
        stagger: Some(0.15),
    },
};

/// Opacity 0 to 1 while sliding in 50 px from the left.
pub const SLIDE_IN: AnimationPreset = AnimationPreset {
    name: "slide-in",
    initial: VisualState {
        opacity: Some(0.0),
        x: Some(-50.0),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        x: Some(0.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.8),
};

/// Opacity 0 to 1 while growing from 80%.
pub const SCALE_IN: AnimationPreset = AnimationPreset {
    name: "scale-in",
    initial: VisualState {
        opacity: Some(0.0),
        scale: Some(0.8),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        scale: Some(1.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.6),
};

/// Card reveal used by the service, lab and step grids.
pub const CARD_RISE: AnimationPreset = AnimationPreset {
    name: "card-rise",
    initial: VisualState {
        opacity: Some(0.0),
        y: Some(16.0),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        y: Some(0.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.5),
};

/// Heading reveal in the approach section.
pub const HEADING_RISE: AnimationPreset = AnimationPreset {
    name: "heading-rise",
    initial: VisualState {
        opacity: Some(0.0),
        y: Some(20.0),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        y: Some(0.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.5),
};

/// Brand mark entrance in the header.
pub const BRAND_SLIDE: AnimationPreset = AnimationPreset {
    name: "brand-slide",
    initial: VisualState {
        opacity: Some(0.0),
        x: Some(-20.0),
        ..VisualState::NONE
    },
    target: VisualState {
        opacity: Some(1.0),
        x: Some(0.0),
        ..VisualState::NONE
    },
    timing: ease_out(0.5),
};

/// Every preset compiled into the stylesheet.
pub const PRESETS: &[AnimationPreset] = &[
    FADE_UP,
    STAGGER,
    SLIDE_IN,
    SCALE_IN,
    CARD_RISE,
    HEADING_RISE,
    BRAND_SLIDE,
];

/// Delay between grid cards, in seconds per index.
pub const CARD_DELAY_STEP: f32 = 0.1;

/// Delay for stagger child `index` under the [`STAGGER`] preset.
pub fn stagger_delay(index: usize) -> f32 {
    STAGGER.child_delay(index)
}

/// Delay for grid card `index`.
pub fn card_delay(index: usize) -> f32 {
    CARD_DELAY_STEP * index as f32
}

/// CSS for all presets.
pub fn motion_css() -> String {
    PRESETS.iter().map(AnimationPreset::css).collect()
}

/// When an element's entrance runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealTrigger {
    /// Once, as soon as the element is in the document.
    #[default]
    Mount,
    /// Once, the first time the element scrolls into view.
    InView,
    /// Together with the nearest revealed ancestor.
    Parent,
}

impl RevealTrigger {
    /// Value of the `data-trigger` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            RevealTrigger::Mount => "mount",
            RevealTrigger::InView => "in-view",
            RevealTrigger::Parent => "parent",
        }
    }
}

/// Fire-once reveal state for one element.
///
/// Mount-triggered latches start revealed. An in-view latch fires on the
/// first visible observation; every later observation is a no-op. Parent
/// latches never fire on their own.
///
/// [`Motion`](crate::components::Motion) renders the initial state; in the
/// browser `observe` is carried out by the observer callback in
/// [`PAGE_SCRIPT`](crate::components::PAGE_SCRIPT), which unobserves an
/// element as soon as it reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    trigger: RevealTrigger,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(trigger: RevealTrigger) -> Self {
        Self {
            trigger,
            revealed: trigger == RevealTrigger::Mount,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility change. Returns `true` only when this call
    /// starts the entrance.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible || self.trigger != RevealTrigger::InView {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Inline style carrying an animation delay, e.g. `--motion-delay: 0.30s`.
pub fn delay_style(delay: f32) -> String {
    format!("--motion-delay: {:.2}s", delay)
}

// Trims trailing zeros so CSS reads `0.8s`, `30px`, `1`.
fn fmt_num(value: f32) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
