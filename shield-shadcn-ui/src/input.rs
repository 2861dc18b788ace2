use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use shield_client::Input as ApiInput;

use crate::ui::{Button, ButtonVariant, Field, FieldLabel, Input};

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, PartialEq, Props)]
pub struct StyleInputProps {
    pub input: ApiInput,
}

/// Renders one input descriptor.
///
/// `button`, `reset` and `submit` become an outline `Button` labeled with the
/// input value; every other type becomes a labeled `Input` field.
#[component]
pub fn StyleInput(props: StyleInputProps) -> Element {
    let instance_id = use_hook(|| NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed));
    let input = props.input;
    let attributes = input.r#type.attributes();

    if input.r#type.is_button() {
        let text = input.value.clone().unwrap_or_default();

        return rsx! {
            Button {
                variant: ButtonVariant::Outline,
                name: input.name.clone(),
                r#type: input.r#type.as_str(),
                formaction: attributes.formaction,
                formmethod: attributes.formmethod,
                formnovalidate: attributes.formnovalidate,
                popovertarget: attributes.popovertarget,
                popovertargetaction: attributes.popovertargetaction,
                "{text}"
            }
        };
    }

    let id = format!("shield-{}-{}", instance_id, input.name);
    let placeholder = attributes.placeholder.clone().or_else(|| input.label.clone());

    rsx! {
        Field {
            if let Some(label) = &input.label {
                FieldLabel { html_for: id.clone(), "{label}" }
            }
            Input {
                id: id.clone(),
                name: input.name.clone(),
                r#type: input.r#type.as_str(),
                placeholder,
                value: input.value.clone(),
                accept: attributes.accept,
                alt: attributes.alt,
                autocomplete: attributes.autocomplete,
                checked: attributes.checked,
                dirname: attributes.dirname,
                height: attributes.height,
                list: attributes.list,
                max: attributes.max,
                maxlength: attributes.maxlength,
                min: attributes.min,
                minlength: attributes.minlength,
                multiple: attributes.multiple,
                pattern: attributes.pattern,
                readonly: attributes.readonly,
                required: attributes.required,
                size: attributes.size,
                src: attributes.src,
                step: attributes.step,
                width: attributes.width,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: serde_json::Value) -> ApiInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_submit_renders_button() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "submit",
                    "type": { "type": "submit" },
                    "value": "Sign in with Keycloak"
                }))
            }
        });

        assert!(html.contains("<button"));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("name=\"submit\""));
        assert!(html.contains("Sign in with Keycloak"));
        assert!(html.contains("bg-background"));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_reset_renders_button() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "clear",
                    "type": { "type": "reset" },
                    "value": "Clear"
                }))
            }
        });

        assert!(html.contains("<button"));
        assert!(html.contains("type=\"reset\""));
    }

    #[test]
    fn test_email_renders_labeled_field() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "email",
                    "label": "Email",
                    "type": { "type": "email", "autocomplete": "email" }
                }))
            }
        });

        assert!(html.contains("data-slot=\"field\""));
        assert!(html.contains("<label"));
        assert!(html.contains("Email"));
        assert!(html.contains("<input"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("autocomplete=\"email\""));
        assert!(html.contains("placeholder=\"Email\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_unlabeled_field_has_no_label() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "token",
                    "type": { "type": "hidden" },
                    "value": "abc123"
                }))
            }
        });

        assert!(!html.contains("<label"));
        assert!(html.contains("type=\"hidden\""));
        assert!(html.contains("value=\"abc123\""));
    }

    #[test]
    fn test_popover_target_forwarded_to_button() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "help",
                    "type": { "type": "button", "popovertarget": "help-panel", "popovertargetaction": "toggle" },
                    "value": "Help"
                }))
            }
        });

        assert!(html.contains("popovertarget=\"help-panel\""));
        assert!(html.contains("popovertargetaction=\"toggle\""));
    }

    #[test]
    fn test_text_size_and_dirname() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "username",
                    "type": { "type": "text", "size": "32", "dirname": "username.dir" }
                }))
            }
        });

        assert!(html.contains("size=\"32\""));
        assert!(html.contains("dirname=\"username.dir\""));
    }

    #[test]
    fn test_image_dimensions() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "map",
                    "type": {
                        "type": "image",
                        "src": "/map.png",
                        "alt": "Pick a region",
                        "width": "320",
                        "height": "200"
                    }
                }))
            }
        });

        assert!(html.contains("type=\"image\""));
        assert!(html.contains("width=\"320\""));
        assert!(html.contains("height=\"200\""));
        assert!(html.contains("alt=\"Pick a region\""));
    }

    #[test]
    fn test_explicit_placeholder_wins_over_label() {
        let html = dioxus_ssr::render_element(rsx! {
            StyleInput {
                input: input(serde_json::json!({
                    "name": "username",
                    "label": "Username",
                    "type": { "type": "text", "placeholder": "jane.doe" }
                }))
            }
        });

        assert!(html.contains("placeholder=\"jane.doe\""));
    }
}
