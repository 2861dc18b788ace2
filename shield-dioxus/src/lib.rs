//! # Shield Dioxus
//!
//! Route components and the style contract of the Shield authentication UI.
//!
//! A style implements [`DioxusStyle`] and is provided through context as an
//! [`ErasedDioxusStyle`], next to a [`shield_client::ShieldClient`]. The route
//! components fetch the forms of an action and let the style render them.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! dioxus::LaunchBuilder::new()
//!     .with_context(ShieldClient::new(ShieldConfig::default())?)
//!     .with_context(MyStyle::default().context())
//!     .launch(|| rsx! { Router::<ShieldRoute> {} })
//! ```

mod router;
mod routes;
mod style;

pub use router::ShieldRoute;
pub use routes::{Action, ActionIndex, ActionView, ActionViewProps};
pub use style::{DioxusStyle, ErasedDioxusStyle};
