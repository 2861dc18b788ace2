use std::fmt;

/// Default prefix of the auth API
pub const DEFAULT_API_PREFIX: &str = "/api/auth";

/// Target of a form submission: `{prefix}/{methodId}/{actionId}[/{providerId}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPath {
    pub prefix: String,
    pub method_id: String,
    pub action_id: String,
    pub provider_id: Option<String>,
}

impl ActionPath {
    pub fn new(
        method_id: impl Into<String>,
        action_id: impl Into<String>,
        provider_id: Option<String>,
    ) -> Self {
        Self {
            prefix: DEFAULT_API_PREFIX.to_string(),
            method_id: method_id.into(),
            action_id: action_id.into(),
            provider_id,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl fmt::Display for ActionPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.prefix.trim_end_matches('/'),
            self.method_id,
            self.action_id
        )?;

        if let Some(provider_id) = &self.provider_id {
            write!(f, "/{}", provider_id)?;
        }

        Ok(())
    }
}

/// Path of the forms endpoint for an action
pub fn forms_path(prefix: &str, action_id: &str) -> String {
    format!("{}/forms/{}", prefix.trim_end_matches('/'), action_id)
}
