use dioxus::prelude::*;

use crate::routes::{Action, ActionIndex};

/// Auth routes: `/auth` and `/auth/:action_id` render the same action view
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum ShieldRoute {
    #[route("/auth")]
    ActionIndex {},
    #[route("/auth/:action_id")]
    Action { action_id: String },
}

impl ShieldRoute {
    /// Action id named by the route, `None` for the default action
    pub fn action_id(&self) -> Option<&str> {
        match self {
            ShieldRoute::ActionIndex {} => None,
            ShieldRoute::Action { action_id } => Some(action_id),
        }
    }
}
