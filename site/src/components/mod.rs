//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── BackgroundDeco
//! ├── Header
//! ├── main
//! │   ├── Hero           #top
//! │   ├── Credentials
//! │   ├── Services       #services
//! │   ├── SoftwareLab    #software
//! │   ├── Approach       #approach
//! │   └── Contact        #contact
//! └── Footer
//! ```
//!
//! Sections are built from the primitives ([`Button`], [`Card`],
//! [`TextInput`], [`TextArea`], [`CheckIcon`]) and the [`Motion`] wrapper.
//! Every section renders with no props; optional props override the
//! dataset or asset base:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use novelus_site::components::{Services, Approach};
//!
//! view! {
//!     <Services />
//!     <Approach asset_base="https://cdn.example.com/img" />
//! }
//! ```

mod approach;
mod background;
mod brand;
mod contact;
mod credentials;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod motion;
mod primitives;
mod services;
mod software;

pub use approach::Approach;
pub use background::BackgroundDeco;
pub use brand::{BrandMark, NavLinks};
pub use contact::Contact;
pub use credentials::Credentials;
pub use document::{PAGE_SCRIPT, PageDocument};
pub use footer::{COPYRIGHT_YEAR, Footer};
pub use header::Header;
pub use hero::Hero;
pub use icons::*;
pub use motion::{Motion, motion_class};
pub use primitives::*;
pub use services::Services;
pub use software::SoftwareLab;
