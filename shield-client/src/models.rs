use serde::{Deserialize, Serialize};

use crate::form::Form;

/// Forms of an authentication action, as returned by `GET {api_prefix}/forms/{actionId}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionForms {
    pub id: String,
    pub name: String,
    pub method_forms: Vec<MethodForm>,
}

/// Forms of one authentication method within an action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodForm {
    pub id: String,
    pub provider_forms: Vec<ProviderForm>,
}

/// Form of one provider of a method.
///
/// Methods without providers send a form without an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderForm {
    #[serde(default)]
    pub id: Option<String>,
    pub form: Form,
}

/// A provider form together with the ids needed to submit it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderFormRef<'a> {
    pub action_id: &'a str,
    pub method_id: &'a str,
    pub provider_id: Option<&'a str>,
    pub form: &'a Form,
}

impl ProviderFormRef<'_> {
    /// Stable key for list rendering: `{actionId}-{methodId}-{providerId}`
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.action_id,
            self.method_id,
            self.provider_id.unwrap_or_default()
        )
    }
}

impl ActionForms {
    /// Every provider form of every method, in server order
    pub fn provider_forms(&self) -> impl Iterator<Item = ProviderFormRef<'_>> {
        self.method_forms.iter().flat_map(move |method_form| {
            method_form
                .provider_forms
                .iter()
                .map(move |provider_form| ProviderFormRef {
                    action_id: &self.id,
                    method_id: &method_form.id,
                    provider_id: provider_form.id.as_deref(),
                    form: &provider_form.form,
                })
        })
    }
}

/// Error body sent by the auth API on failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    #[serde(default)]
    pub status_reason: Option<String>,
    pub message: String,
}
