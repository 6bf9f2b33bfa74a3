//! CSS for the landing page.
//!
//! [`PAGE_CSS`] holds the layout and component styles; the entrance
//! animations are generated from the presets in [`crate::motion`] and
//! appended by [`page_css`].
//!
//! Brand palette:
//!
//! - Blue `#004AAD` (primary)
//! - Green `#18CB96` (secondary)
//! - Charcoal `#373643` (text)

use crate::motion::motion_css;

/// Layout, typography and component styles.
pub const PAGE_CSS: &str = r#"
:root {
    --brand-blue: #004AAD;
    --brand-blue-dark: #003a88;
    --brand-green: #18CB96;
    --brand-charcoal: #373643;
    --neutral-50: #fafafa;
    --neutral-200: #e5e5e5;
    --neutral-300: #d4d4d4;
    --neutral-500: #737373;
    --neutral-600: #525252;
    --neutral-700: #404040;
    --radius-lg: 0.75rem;
    --radius-xl: 1rem;
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
    --container-max: 80rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    line-height: 1.5;
    color: var(--brand-charcoal);
    background: #ffffff;
}

::selection {
    background: rgba(0, 74, 173, 0.2);
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

h1, h2, h3, p {
    margin: 0;
}

.container {
    margin: 0 auto;
    max-width: var(--container-max);
    padding: 0 1rem;
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}

.container-narrow {
    max-width: 56rem;
}

/* Background decoration */
.site-bg {
    position: fixed;
    inset: 0;
    z-index: -10;
    pointer-events: none;
    overflow: hidden;
}

.bg-blob {
    position: absolute;
    border-radius: 9999px;
    filter: blur(64px);
}

.bg-blob-primary {
    top: -10rem;
    right: -10%;
    width: 420px;
    height: 420px;
    background: rgba(0, 74, 173, 0.1);
}

.bg-blob-secondary {
    bottom: -10rem;
    left: -10%;
    width: 320px;
    height: 320px;
    background: rgba(24, 203, 150, 0.1);
}

/* Primitives */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border: 1px solid transparent;
    border-radius: var(--radius-lg);
    padding: 0.5rem 1rem;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    background: transparent;
    transition: background-color 150ms, color 150ms, box-shadow 150ms, scale 150ms;
}

.btn:focus-visible {
    outline: none;
    box-shadow: 0 0 0 2px #ffffff, 0 0 0 4px rgba(0, 74, 173, 0.3);
}

.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-primary {
    background: var(--brand-blue);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--brand-blue-dark);
}

.btn-outline {
    border-color: var(--neutral-300);
    color: var(--neutral-700);
}

.btn-outline:hover {
    background: var(--neutral-50);
}

.card {
    border: 1px solid var(--neutral-200);
    border-radius: var(--radius-xl);
    background: #ffffff;
    box-shadow: var(--shadow-sm);
}

.field-input {
    display: block;
    width: 100%;
    border: 1px solid var(--neutral-300);
    border-radius: var(--radius-lg);
    padding: 0.5rem 0.75rem;
    font: inherit;
    font-size: 15px;
    color: inherit;
}

.field-input:focus {
    outline: none;
    box-shadow: 0 0 0 2px rgba(0, 74, 173, 0.3);
}

.icon-check {
    flex-shrink: 0;
    width: 1rem;
    height: 1rem;
}

.icon-check-lg {
    width: 1.25rem;
    height: 1.25rem;
    margin-top: 0.125rem;
}

.text-primary { color: var(--brand-blue); }
.text-secondary { color: var(--brand-green); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--neutral-200);
}

.header-inner {
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.brand-mark {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    overflow: hidden;
    background: linear-gradient(135deg, #004AAD 0%, #004AAD 50%, #18CB96 50%, #18CB96 100%);
}

.brand-initial {
    position: relative;
    color: #ffffff;
    font-weight: 700;
    font-size: 1.125rem;
}

.brand-name {
    font-size: 1.25rem;
    font-weight: 700;
}

.site-nav,
.header-cta {
    display: none;
}

.site-nav {
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.nav-link:hover {
    color: var(--brand-blue);
}

.header-cta .btn:hover { scale: 1.05; }
.header-cta .btn:active { scale: 0.95; }

@media (min-width: 768px) {
    .site-nav { display: flex; }
    .header-cta { display: block; }
}

/* Hero */
.hero {
    position: relative;
    padding: 5rem 0;
    overflow: hidden;
}

.hero-media {
    position: absolute;
    inset: 0;
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transform: scaleX(-1);
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right, #ffffff, rgba(255, 255, 255, 0.95), rgba(255, 255, 255, 0.8), rgba(255, 255, 255, 0.6), rgba(255, 255, 255, 0.3), transparent);
}

.hero-content {
    position: relative;
    max-width: 46rem;
}

.hero-title {
    font-size: 3rem;
    line-height: 1.1;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.hero-lead {
    margin-top: 1.5rem;
    font-size: 1.25rem;
    color: var(--neutral-600);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

/* Credentials */
.creds {
    padding: 2.5rem 0;
    border-top: 1px solid var(--neutral-200);
    border-bottom: 1px solid var(--neutral-200);
    background: rgba(250, 250, 250, 0.6);
}

.creds-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1.5rem;
    font-size: 0.875rem;
}

@media (min-width: 640px) {
    .creds-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

.cred-item {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}

.cred-label { font-weight: 500; }
.cred-text { color: var(--neutral-600); }

/* Shared section chrome */
.section {
    padding: 5rem 0;
}

.section-muted {
    background: rgba(250, 250, 250, 0.6);
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.section-lead {
    margin-top: 0.75rem;
    max-width: 42rem;
    color: var(--neutral-600);
}

.text-center { text-align: center; }
.text-center .section-lead { margin-left: auto; margin-right: auto; }

.hover-lift {
    transition: translate 200ms ease-out;
}

.hover-lift:hover {
    translate: 0 -5px;
}

/* Services */
.services-grid,
.lab-grid,
.steps-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .services-grid, .lab-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .steps-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .services-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

.service-accent {
    height: 0.5rem;
    width: 100%;
    border-radius: var(--radius-xl) var(--radius-xl) 0 0;
}

.accent-primary { background: var(--brand-blue); }
.accent-secondary { background: var(--brand-green); }

.service-body {
    border-top-left-radius: 0;
    border-top-right-radius: 0;
    padding: 1.5rem;
}

.service-title {
    margin-bottom: 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
}

.service-text {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: var(--neutral-700);
}

.feature-list {
    margin: 1rem 0 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 0.5rem;
}

.feature-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
}

/* Software lab */
.software-head {
    display: flex;
    flex-wrap: wrap;
    align-items: flex-end;
    justify-content: space-between;
    gap: 1.5rem;
}

.software-cta {
    font-weight: 500;
    color: var(--brand-blue);
}

.lab-card {
    overflow: hidden;
    margin: 0;
}

.lab-media {
    position: relative;
    overflow: hidden;
}

.lab-image {
    width: 100%;
    height: 13rem;
    object-fit: cover;
    transition: transform 300ms;
}

.lab-card:hover .lab-image {
    transform: scale(1.05);
}

.lab-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.25rem 0.5rem;
    font-size: 0.75rem;
    border-radius: 9999px;
    border: 1px solid var(--neutral-200);
    background: rgba(255, 255, 255, 0.9);
}

.lab-body { padding: 1.25rem; }
.lab-text { color: var(--neutral-700); }

.tag-list {
    margin-top: 0.75rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    font-size: 0.75rem;
}

.tag {
    padding: 0.25rem 0.5rem;
    border-radius: 9999px;
    border: 1px solid var(--neutral-200);
    background: var(--neutral-50);
    color: var(--brand-blue);
}

/* Approach */
.step-card {
    overflow: hidden;
}

.step-image {
    width: 100%;
    height: 12rem;
    object-fit: cover;
}

.step-body { padding: 1.25rem; }

.step-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.step-text {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: var(--neutral-600);
}

/* Contact */
.contact-card-wrap { margin-top: 2.5rem; }
.contact-card { padding: 2rem; }

.contact-form {
    display: grid;
    gap: 1.5rem;
}

.form-row {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .form-row { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

.field-label {
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.form-actions {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

/* Footer */
.site-footer {
    padding: 2.5rem 0;
    border-top: 1px solid var(--neutral-200);
}

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

@media (min-width: 640px) {
    .footer-inner { flex-direction: row; }
}

.footer-brand {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.875rem;
}

.footer-brand-row {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.footer-nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
}

.footer-link-muted { color: var(--neutral-500); }

@media (prefers-reduced-motion: reduce) {
    .motion { animation: none !important; opacity: 1 !important; transform: none !important; }
}
"#;

/// Shown when scripting is disabled so in-view elements are not left hidden.
pub const NOSCRIPT_CSS: &str = ".motion { opacity: 1 !important; transform: none !important; }";

/// Full stylesheet: [`PAGE_CSS`] followed by the generated preset rules.
pub fn page_css() -> String {
    format!("{}\n{}", PAGE_CSS, motion_css())
}
