use dioxus::prelude::*;
use shield_client::{ActionPath, Form as ApiForm, ShieldClient};

use crate::input::FormInput;

#[derive(Clone, PartialEq, Props)]
pub struct FormProps {
    #[props(into)]
    action_id: String,
    #[props(into)]
    method_id: String,
    #[props(!optional)]
    provider_id: Option<String>,
    form: ApiForm,
}

#[component]
pub fn Form(props: FormProps) -> Element {
    let path = match try_use_context::<ShieldClient>() {
        Some(client) => client.action_path(
            &props.method_id,
            &props.action_id,
            props.provider_id.as_deref(),
        ),
        None => ActionPath::new(props.method_id, props.action_id, props.provider_id),
    };

    rsx! {
        form { action: "{path}", method: "post",
            for (key, input) in props.form.keyed_inputs() {
                FormInput { key: "{key}", input: input.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_group_posts_to_action() {
        let form: ApiForm = serde_json::from_value(serde_json::json!({
            "inputs": [
                { "name": "plan", "label": "Free", "type": { "type": "radio" }, "value": "free" },
                { "name": "plan", "label": "Pro", "type": { "type": "radio" }, "value": "pro" },
                { "name": "submit", "type": { "type": "submit" }, "value": "Continue" }
            ]
        }))
        .unwrap();

        let html = dioxus_ssr::render_element(rsx! {
            Form {
                action_id: "sign-up",
                method_id: "credentials",
                provider_id: None,
                form,
            }
        });

        assert!(html.contains("action=\"/api/auth/credentials/sign-up\""));
        assert_eq!(html.matches("type=\"radio\"").count(), 2);
        assert!(html.contains("Continue"));
    }
}
