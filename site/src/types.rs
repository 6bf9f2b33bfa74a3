//! Data structures for page content.
//!
//! Every record here is a `Copy` value built from `&'static str` so the
//! datasets in [`crate::content`] can live in `const` tables. `Serialize`
//! is derived for the JSON content dump.

use serde::Serialize;

/// Accent colour of a service card's top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Brand blue (#004AAD)
    Primary,
    /// Brand green (#18CB96)
    Secondary,
}

impl Accent {
    /// CSS class painting the accent bar.
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
        }
    }
}

/// One card in the services grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceEntry {
    /// Card heading
    pub title: &'static str,
    /// Short paragraph under the heading
    pub description: &'static str,
    /// Bullet list, rendered in order
    pub features: &'static [&'static str],
    /// Top bar colour
    pub accent: Accent,
}

/// One image-led card in the software lab showcase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabEntry {
    /// Badge text over the image (also the image alt text)
    pub title: &'static str,
    /// Body paragraph
    pub description: &'static str,
    /// Tag pills, rendered in order
    pub tags: &'static [&'static str],
    /// Image file name, resolved against the asset base
    pub image: &'static str,
}

/// One step of the approach section. Position in the table is the step number.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    /// Step name
    pub title: &'static str,
    /// What happens in this step
    pub description: &'static str,
    /// Image file name, resolved against the asset base
    pub image: &'static str,
}

/// One label/description pair in the credentials strip.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CredentialItem {
    /// Bold label
    pub label: &'static str,
    /// Supporting text
    pub description: &'static str,
}

/// An in-page navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Fragment identifier without the leading `#`
    pub anchor: &'static str,
}

impl NavLink {
    /// `href` value for the link.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Native control used for a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// `<input type="text">`
    Text,
    /// `<input type="email">`
    Email,
    /// `<textarea>`
    Multiline,
}

impl FieldKind {
    /// Value of the `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Text | FieldKind::Multiline => "text",
        }
    }
}

/// One labeled control of the contact form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactField {
    /// Element id, referenced by the label's `for`
    pub id: &'static str,
    /// Label text, without the required marker
    pub label: &'static str,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Which control to render
    pub kind: FieldKind,
    /// Presentation-only required flag
    pub required: bool,
}

impl ContactField {
    /// Label text as displayed: `Name *` for required fields,
    /// `Company (optional)` otherwise.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            format!("{} (optional)", self.label)
        }
    }
}

/// Every literal dataset of the page, for `novelus content`.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    /// Header and footer navigation
    pub navigation: &'static [NavLink],
    /// Credentials strip
    pub credentials: &'static [CredentialItem],
    /// Services grid
    pub services: &'static [ServiceEntry],
    /// Software lab showcase
    pub software: &'static [LabEntry],
    /// Approach steps
    pub approach: &'static [ProcessStep],
    /// Contact form layout
    pub contact_fields: &'static [ContactField],
}
