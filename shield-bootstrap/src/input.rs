use dioxus::prelude::*;
use shield_client::{Input, InputType};

#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    input: Input,
}

#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let input = props.input;
    let attributes = input.r#type.attributes();

    if input.r#type.is_button() {
        let class = match input.r#type {
            InputType::Submit(_) => "btn btn-primary",
            _ => "btn btn-secondary",
        };

        return rsx! {
            div { class: "mb-3",
                button {
                    class,
                    name: input.name.clone(),
                    r#type: input.r#type.as_str(),
                    formaction: attributes.formaction,
                    formmethod: attributes.formmethod,
                    formnovalidate: attributes.formnovalidate,
                    "popovertarget": attributes.popovertarget,
                    "popovertargetaction": attributes.popovertargetaction,
                    {input.value.clone().unwrap_or_default()}
                }
            }
        };
    }

    if matches!(input.r#type, InputType::Checkbox(_) | InputType::Radio(_)) {
        return rsx! {
            div { class: "form-check mb-3",
                input {
                    class: "form-check-input",
                    name: input.name.clone(),
                    r#type: input.r#type.as_str(),
                    value: input.value.clone(),
                    checked: attributes.checked,
                    required: attributes.required,
                }
                if let Some(label) = &input.label {
                    label { class: "form-check-label", "{label}" }
                }
            }
        };
    }

    rsx! {
        div { class: "mb-3",
            if let Some(label) = &input.label {
                label { class: "form-label",
                    strong { "{label}" }
                }
            }

            input {
                class: "form-control",
                name: input.name.clone(),
                r#type: input.r#type.as_str(),
                value: input.value.clone(),
                autocomplete: attributes.autocomplete,
                placeholder: attributes.placeholder,
                pattern: attributes.pattern,
                min: attributes.min,
                max: attributes.max,
                step: attributes.step,
                minlength: attributes.minlength,
                maxlength: attributes.maxlength,
                readonly: attributes.readonly,
                required: attributes.required,
                multiple: attributes.multiple,
                accept: attributes.accept,
                "dirname": attributes.dirname,
            }
        }
    }
}
