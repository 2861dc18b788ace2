//! # Shield shadcn/ui
//!
//! A [`shield_dioxus::DioxusStyle`] rendering action forms with Dioxus ports of
//! the shadcn/ui `Button`, `Field` and `Input` primitives.
//!
//! Every provider form becomes a plain HTML form that posts to
//! `/api/auth/{methodId}/{actionId}/{providerId}`; values are submitted by the
//! browser, not serialized on the client.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use shield_shadcn_ui::ShadcnUiStyle;
//!
//! dioxus::LaunchBuilder::new()
//!     .with_context(ShadcnUiStyle::default().context())
//!     .launch(App)
//! ```

mod form;
mod input;
mod style;
pub mod ui;

pub use form::{StyleForm, StyleFormProps};
pub use input::{StyleInput, StyleInputProps};
pub use style::ShadcnUiStyle;
