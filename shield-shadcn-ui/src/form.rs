use dioxus::prelude::*;
use shield_client::{ActionPath, Form, ShieldClient};

use crate::input::StyleInput;
use crate::ui::FieldGroup;

#[derive(Clone, PartialEq, Props)]
pub struct StyleFormProps {
    #[props(into)]
    pub action_id: String,
    #[props(into)]
    pub method_id: String,
    #[props(!optional)]
    pub provider_id: Option<String>,
    pub form: Form,
}

/// Native form posting to the action endpoint of one provider
#[component]
pub fn StyleForm(props: StyleFormProps) -> Element {
    let client = try_use_context::<ShieldClient>();
    let path = match &client {
        Some(client) => client.action_path(
            &props.method_id,
            &props.action_id,
            props.provider_id.as_deref(),
        ),
        None => ActionPath::new(
            props.method_id.clone(),
            props.action_id.clone(),
            props.provider_id.clone(),
        ),
    };

    rsx! {
        form {
            action: "{path}",
            method: "post",
            FieldGroup {
                for (key, input) in props.form.keyed_inputs() {
                    StyleInput { key: "{key}", input: input.clone() }
                }
            }
        }
    }
}
