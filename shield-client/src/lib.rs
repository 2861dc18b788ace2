//! # Shield Client
//!
//! Descriptors and HTTP access for the server-driven forms of the Shield
//! authentication API.
//!
//! This crate provides:
//! - The action form data model (`ActionForms`, `MethodForm`, `ProviderForm`, `Form`, `Input`)
//! - An async client for `GET /api/auth/forms/{actionId}`
//! - Submission targets for `/api/auth/{methodId}/{actionId}/{providerId}`
//! - TOML configuration shared by the UI crates
//!
//! ## Separation of Concerns
//!
//! This crate only reads descriptors. It does **not**:
//! - Authenticate users (handled by the server)
//! - Submit forms (forms post natively to the action path)
//! - Render anything (handled by the style crates)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use shield_client::{ShieldClient, ShieldConfig};
//!
//! let client = ShieldClient::new(ShieldConfig::new("https://auth.example.com"))?;
//! let action = client.action_forms("sign-in").await?;
//!
//! for form in action.provider_forms() {
//!     let target = client.action_path(form.method_id, form.action_id, form.provider_id);
//!     println!("{} posts to {}", form.key(), target);
//! }
//! ```

pub mod config;
pub mod form;
pub mod models;
pub mod path;
pub mod service;

pub use config::{ConfigError, ShieldConfig, DEFAULT_ACTION_ID};
pub use form::{
    Form, Input, InputAttributes, InputType, InputTypeButton, InputTypeCheckable, InputTypeColor,
    InputTypeEmail, InputTypeFile, InputTypeHidden, InputTypeImage, InputTypeNumber,
    InputTypePassword, InputTypeRange, InputTypeSubmit, InputTypeTemporal, InputTypeText,
};
pub use models::{ActionForms, ErrorBody, MethodForm, ProviderForm, ProviderFormRef};
pub use path::{forms_path, ActionPath, DEFAULT_API_PREFIX};
pub use service::{ClientError, ShieldClient};
