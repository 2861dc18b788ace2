use crate::config::ShieldConfig;
use crate::models::{ActionForms, ErrorBody};
use crate::path::{forms_path, ActionPath};

/// Error type for requests against the auth API
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    NetworkError(String),
    JsonError(String),
    ServerError { status: u16, message: String },
    InvalidUrl(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ClientError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            ClientError::ServerError { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ClientError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Client for the action forms endpoint of the auth API
#[derive(Clone, Debug)]
pub struct ShieldClient {
    config: ShieldConfig,
    client: reqwest::Client,
}

impl PartialEq for ShieldClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ShieldClient {
    /// Create a new client for the configured server
    pub fn new(config: ShieldConfig) -> Result<Self, ClientError> {
        let client = Self::build_client(&config)?;

        Ok(Self { config, client })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build_client(config: &ShieldConfig) -> Result<reqwest::Client, ClientError> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(concat!("ShieldClient/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::NetworkError(format!("Client build failed: {}", e)))
    }

    #[cfg(target_arch = "wasm32")]
    fn build_client(_config: &ShieldConfig) -> Result<reqwest::Client, ClientError> {
        reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::NetworkError(format!("Client build failed: {}", e)))
    }

    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        let url = format!("{}{}", self.config.server_url.trim_end_matches('/'), path);

        reqwest::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))
    }

    /// Fetch the forms of an action
    pub async fn action_forms(&self, action_id: &str) -> Result<ActionForms, ClientError> {
        let url = self.url(&forms_path(&self.config.api_prefix, action_id))?;
        log::debug!("Fetching action forms from {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            };
            log::warn!("Action forms for `{}` failed: {} {}", action_id, status, message);

            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ActionForms>()
            .await
            .map_err(|e| ClientError::JsonError(format!("Failed to parse action forms: {}", e)))
    }

    /// Path a provider form posts to, under the configured API prefix
    pub fn action_path(
        &self,
        method_id: &str,
        action_id: &str,
        provider_id: Option<&str>,
    ) -> ActionPath {
        ActionPath::new(method_id, action_id, provider_id.map(ToOwned::to_owned))
            .with_prefix(self.config.api_prefix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    async fn forms(Path(action_id): Path<String>) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
        match action_id.as_str() {
            "sign-in" => Ok(Json(serde_json::json!({
                "id": "sign-in",
                "name": "Sign in",
                "methodForms": [{
                    "id": "oidc",
                    "providerForms": [{
                        "id": "keycloak",
                        "form": { "inputs": [
                            { "name": "submit", "type": { "type": "submit" }, "value": "Sign in with Keycloak" }
                        ] }
                    }]
                }]
            }))),
            "broken" => Ok(Json(serde_json::json!({ "id": "broken" }))),
            _ => Err((
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "statusCode": 404,
                    "statusReason": "Not Found",
                    "message": format!("Action `{}` not found.", action_id)
                })),
            )),
        }
    }

    async fn spawn_server() -> ShieldClient {
        let router = Router::new().route("/api/auth/forms/{action_id}", get(forms));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        ShieldClient::new(ShieldConfig::new(format!("http://{}", addr))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_action_forms() {
        let client = spawn_server().await;

        let action = client.action_forms("sign-in").await.unwrap();
        assert_eq!(action.name, "Sign in");
        assert_eq!(action.method_forms[0].provider_forms[0].id.as_deref(), Some("keycloak"));
    }

    #[tokio::test]
    async fn test_server_error_body() {
        let client = spawn_server().await;

        let error = client.action_forms("nope").await.unwrap_err();
        assert_eq!(
            error,
            ClientError::ServerError {
                status: 404,
                message: "Action `nope` not found.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let client = spawn_server().await;

        let error = client.action_forms("broken").await.unwrap_err();
        assert!(matches!(error, ClientError::JsonError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = ShieldClient::new(ShieldConfig::new("http://127.0.0.1:9")).unwrap();

        let error = client.action_forms("index").await.unwrap_err();
        assert!(matches!(error, ClientError::NetworkError(_)));
    }

    #[test]
    fn test_invalid_server_url() {
        let client = ShieldClient::new(ShieldConfig::new("not a url")).unwrap();
        assert!(matches!(client.url("/api/auth/forms/index"), Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_action_path_uses_configured_prefix() {
        let mut config = ShieldConfig::default();
        config.api_prefix = "/auth-api".to_string();
        let client = ShieldClient::new(config).unwrap();

        assert_eq!(
            client.action_path("oidc", "sign-in", Some("keycloak")).to_string(),
            "/auth-api/oidc/sign-in/keycloak"
        );
    }
}
