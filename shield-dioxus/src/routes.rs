use dioxus::prelude::*;
use shield_client::ShieldClient;

use crate::style::ErasedDioxusStyle;

/// Route component for `/auth`, renders the configured default action
#[component]
pub fn ActionIndex() -> Element {
    let client = use_context::<ShieldClient>();
    let action_id = client.config().default_action_id.clone();

    rsx! {
        ActionView { action_id }
    }
}

/// Route component for `/auth/:action_id`
#[component]
pub fn Action(action_id: String) -> Element {
    rsx! {
        ActionView { action_id }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ActionViewProps {
    /// Action to fetch forms for
    #[props(into)]
    pub action_id: String,
    /// Placeholder shown while the forms are loading
    #[props(into, default = "Loading...".to_string())]
    pub loading: String,
}

/// Fetches the forms of an action and hands them to the style from context.
///
/// Fetch errors are returned as render errors so the nearest
/// `ErrorBoundary` handles them.
///
/// # Example
/// ```rust,ignore
/// ErrorBoundary {
///     handle_error: |errors: ErrorContext| rsx! { "Something went wrong" },
///     ActionView { action_id: "sign-in" }
/// }
/// ```
#[component]
pub fn ActionView(props: ActionViewProps) -> Element {
    let client = use_context::<ShieldClient>();
    let style = use_context::<ErasedDioxusStyle>();

    let action_id = props.action_id.clone();
    let forms = use_resource(use_reactive!(|(action_id,)| {
        let client = client.clone();

        async move {
            log::debug!("Loading forms for action `{}`", action_id);
            client.action_forms(&action_id).await
        }
    }));

    match forms.cloned() {
        Some(Ok(action)) => style.render(&action),
        Some(Err(error)) => {
            log::error!("Failed to load forms for action `{}`: {}", props.action_id, error);
            Err(error.into())
        }
        None => rsx! {
            "{props.loading}"
        },
    }
}
