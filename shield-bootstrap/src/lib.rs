//! Bootstrap style for the Shield authentication UI.
//!
//! Expects the Bootstrap 5 stylesheet to be loaded by the application.

mod form;
mod input;

use dioxus::prelude::*;
use shield_client::ActionForms;
use shield_dioxus::{DioxusStyle, ErasedDioxusStyle};

use crate::form::Form;

#[derive(Clone, Copy, Debug, Default)]
pub struct BootstrapStyle {}

impl BootstrapStyle {
    pub fn context(self) -> ErasedDioxusStyle {
        ErasedDioxusStyle::new(self)
    }
}

impl DioxusStyle for BootstrapStyle {
    fn render(&self, action: &ActionForms) -> Element {
        rsx! {
            div { class: "container",
                h1 { "{action.name}" }

                for (key, form) in action.provider_forms().map(|form| (form.key(), form)) {
                    Form {
                        key: "{key}",
                        action_id: form.action_id.to_string(),
                        method_id: form.method_id.to_string(),
                        provider_id: form.provider_id.map(ToOwned::to_owned),
                        form: form.form.clone(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_container_with_forms() {
        let action: ActionForms = serde_json::from_value(serde_json::json!({
            "id": "sign-up",
            "name": "Sign up",
            "methodForms": [{
                "id": "credentials",
                "providerForms": [{
                    "form": { "inputs": [
                        { "name": "email", "label": "Email", "type": { "type": "email" } },
                        { "name": "submit", "type": { "type": "submit" }, "value": "Sign up" }
                    ] }
                }]
            }]
        }))
        .unwrap();

        let html = dioxus_ssr::render_element(BootstrapStyle::default().render(&action));

        assert!(html.contains("class=\"container\""));
        assert!(html.contains("action=\"/api/auth/credentials/sign-up\""));
        assert!(html.contains("method=\"post\""));
    }
}
