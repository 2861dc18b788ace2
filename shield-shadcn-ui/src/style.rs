use dioxus::prelude::*;
use shield_client::ActionForms;
use shield_dioxus::{DioxusStyle, ErasedDioxusStyle};

use crate::form::StyleForm;

/// Style built from shadcn/ui primitives
#[derive(Clone, Copy, Debug, Default)]
pub struct ShadcnUiStyle {}

impl ShadcnUiStyle {
    pub fn context(self) -> ErasedDioxusStyle {
        ErasedDioxusStyle::new(self)
    }
}

impl DioxusStyle for ShadcnUiStyle {
    fn render(&self, action: &ActionForms) -> Element {
        log::debug!(
            "Rendering action `{}` with {} method forms",
            action.id,
            action.method_forms.len()
        );

        rsx! {
            div { class: "flex min-h-svh w-full items-center justify-center p-6 md:p-10",
                div { class: "flex w-full max-w-sm flex-col gap-10",
                    div { class: "flex flex-col gap-2",
                        h1 { class: "text-2xl font-bold", "{action.name}" }

                        for (key, form) in action.provider_forms().map(|form| (form.key(), form)) {
                            StyleForm {
                                key: "{key}",
                                action_id: form.action_id,
                                method_id: form.method_id,
                                provider_id: form.provider_id.map(ToOwned::to_owned),
                                form: form.form.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
