//! Literal page copy and datasets.
//!
//! Each section owns one table here; nothing is shared between sections
//! except [`NAV_LINKS`], which header and footer both render.

use crate::types::{
    Accent, ContactField, CredentialItem, FieldKind, LabEntry, NavLink, PageContent, ProcessStep,
    ServiceEntry,
};

/// Brand name used in the header, footer and document title.
pub const BRAND: &str = "Novelus IP";

/// Single letter inside the brand mark.
pub const BRAND_INITIAL: &str = "N";

/// Parent company line in the footer.
pub const PARENT_COMPANY: &str = "A Novelus LLC Company";

/// Meta description for the document head.
pub const META_DESCRIPTION: &str = "Expert intellectual property protection and strategy for technology companies.";

/// In-page navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", anchor: "services" },
    NavLink { label: "Software", anchor: "software" },
    NavLink { label: "Approach", anchor: "approach" },
    NavLink { label: "Contact", anchor: "contact" },
];

// Hero
pub const HERO_ID: &str = "top";
pub const HERO_IMAGE: &str = "Light Bulb.jpg";
pub const HERO_IMAGE_ALT: &str = "Innovation and bright ideas";
pub const HERO_HEADLINE: &str = "Clear solutions for IP innovators, empowering innovation worldwide";
pub const HERO_SUBHEADLINE: &str = "Expert intellectual property protection and strategy for technology companies. From patent strategy to trademark protection, we help innovators secure their competitive advantage.";

pub const CREDENTIALS: &[CredentialItem] = &[
    CredentialItem {
        label: "Examiners",
        description: "Former USPTO examiners with grant experience",
    },
    CredentialItem {
        label: "Engineers",
        description: "Electrical, Computer Science, Applied Physics backgrounds",
    },
    CredentialItem {
        label: "Startups",
        description: "Operator mindset, budget\u{2011}aware",
    },
    CredentialItem {
        label: "Results",
        description: "Decisions, not deliverable bloat",
    },
];

pub const SERVICES_TITLE: &str = "Services";
pub const SERVICES_LEAD: &str = "Strategic IP analysis, diligence, and guidance for technology companies.";

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "IP Strategy & Analysis",
        description: "Comprehensive intellectual property landscape analysis and strategic guidance for your innovations.",
        features: &[
            "FTO clearance",
            "Prior art analysis",
            "Portfolio assessment",
            "Strategic planning",
        ],
        accent: Accent::Primary,
    },
    ServiceEntry {
        title: "IP Diligence & Audits",
        description: "Deep\u{2011}dive analysis of target IP assets, risks, and opportunities for investment and market entry.",
        features: &[
            "Portfolio assessment",
            "Risk evaluation",
            "Market analysis",
            "Strategic recommendations",
        ],
        accent: Accent::Secondary,
    },
    ServiceEntry {
        title: "Patent Analysis & Education",
        description: "Comprehensive patent analysis and training programs to build IP expertise within your organization.",
        features: &[
            "Patent education training",
            "Patent analysis",
            "API calls to patent databases",
            "Custom reporting",
        ],
        accent: Accent::Primary,
    },
    ServiceEntry {
        title: "Custom IP Software",
        description: "Tailored software solutions for IP management, analysis, and workflow automation.",
        features: &[
            "Custom IP tools",
            "Database integrations",
            "Workflow automation",
            "API development",
        ],
        accent: Accent::Secondary,
    },
];

pub const SOFTWARE_TITLE: &str = "Software lab";
pub const SOFTWARE_LEAD: &str = "When strategy alone isn't enough, we build focused tools to speed analysis and reduce risk. Scoping happens during the initial consultation.";
pub const SOFTWARE_CTA: &str = "Discuss your idea \u{2192}";

pub const LABS: &[LabEntry] = &[
    LabEntry {
        title: "Custom IP Software",
        description: "Tools that fit your pipeline\u{2014}categorization, office\u{2011}action insights, portfolio mapping, and more.",
        tags: &["Rapid prototypes", "API\u{2011}friendly", "Secure by design"],
        image: "Code on Laptop Screen.jpg",
    },
    LabEntry {
        title: "Workflow Automation",
        description: "Reduce manual effort with smart parsers and summarizers tailored to your assets and dockets.",
        tags: &["Parsing", "QA/validation", "Dashboards"],
        image: "Automated workflow.png",
    },
];

pub const APPROACH_TITLE: &str = "Our approach";
pub const APPROACH_LEAD: &str = "A lightweight, decision\u{2011}focused process that respects your runway and roadmap.";

pub const STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discovery",
        description: "30\u{2013}45 min call to align on goals, constraints, and budget. NDA available.",
        image: "idea-5799709.jpg",
    },
    ProcessStep {
        title: "Diligence",
        description: "Targeted research and interviews. Early signals delivered fast.",
        image: "Idea board.jpg",
    },
    ProcessStep {
        title: "Decision",
        description: "Clear go/no\u{2011}go with risks, costs, and options laid out.",
        image: "Decision.jpg",
    },
];

pub const CONTACT_TITLE: &str = "Get in touch";
pub const CONTACT_LEAD: &str = "Ready to discuss your IP strategy? Let's talk.";
pub const CONTACT_SUBMIT: &str = "Send message";

/// Contact form layout. The first two fields share a row.
pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        id: "contact-name",
        label: "Name",
        placeholder: "Your name",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        id: "contact-company",
        label: "Company",
        placeholder: "Your company",
        kind: FieldKind::Text,
        required: false,
    },
    ContactField {
        id: "contact-email",
        label: "Email",
        placeholder: "your@email.com",
        kind: FieldKind::Email,
        required: true,
    },
    ContactField {
        id: "contact-subject",
        label: "Subject",
        placeholder: "What can we help you with?",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        id: "contact-message",
        label: "Message",
        placeholder: "Tell us about your IP needs...",
        kind: FieldKind::Multiline,
        required: true,
    },
];

/// All datasets bundled for serialization.
pub fn page_content() -> PageContent {
    PageContent {
        navigation: NAV_LINKS,
        credentials: CREDENTIALS,
        services: SERVICES,
        software: LABS,
        approach: STEPS,
        contact_fields: CONTACT_FIELDS,
    }
}
