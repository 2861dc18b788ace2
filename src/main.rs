use dioxus::prelude::*;

mod components;
mod config;
mod error;

use components::{Home, NavigationBar};
use config::DemoConfig;
use error::AppError;
use shield_client::ShieldClient;
use shield_dioxus::{Action, ActionIndex};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SHIELD_CONFIG: &str = include_str!("../shield.toml");

fn main() {
    init_logging();

    let (config, client) = match load() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Using {:?} style against {}{}",
        config.style,
        config.shield.server_url,
        config.shield.api_prefix
    );

    dioxus::LaunchBuilder::new()
        .with_context(config.style)
        .with_context(config.style.context())
        .with_context(client)
        .launch(App);
}

fn load() -> Result<(DemoConfig, ShieldClient), AppError> {
    let config = DemoConfig::from_toml_str(SHIELD_CONFIG)?;
    let client = ShieldClient::new(config.shield.clone())?;

    Ok((config, client))
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Debug),
    );

    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::default());

    #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
    env_logger::init();
}

/// App routes; `/auth` and `/auth/:action_id` come from `shield-dioxus`
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        ActionIndex {},
        #[route("/auth/:action_id")]
        Action { action_id: String },
}

#[component]
fn App() -> Element {
    let style_name = use_context::<config::StyleName>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if let Some(stylesheet) = style_name.stylesheet() {
            document::Link { rel: "stylesheet", href: stylesheet }
        }
        if let Some(theme) = style_name.tailwind_theme() {
            style { r#type: "text/tailwindcss", "{theme}" }
        }
        if let Some(script) = style_name.script() {
            document::Script { src: script }
        }

        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; min-height: 100vh;",
            NavigationBar {}

            div { style: "flex: 1; overflow-y: auto;",
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| error_fallback(errors),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn error_fallback(errors: ErrorContext) -> Element {
    let message = errors
        .error()
        .map(|error| error.to_string())
        .unwrap_or_else(|| "Unknown error".to_string());

    rsx! {
        div { style: "margin: 48px auto; max-width: 480px; padding: 12px; background: #f8d7da; border-radius: 4px; color: #721c24;",
            p { style: "margin: 0 0 12px 0; font-weight: 600;", "❌ Could not load this page" }
            p { class: "error-message", style: "margin: 0; font-size: 14px;", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use shield_client::ClientError;

    #[component]
    fn MissingAction() -> Element {
        Err(ClientError::ServerError {
            status: 404,
            message: "Unknown action".to_string(),
        }
        .into())
    }

    #[component]
    fn GuardedAction() -> Element {
        rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| error_fallback(errors),
                MissingAction {}
            }
        }
    }

    #[tokio::test]
    async fn test_error_fallback_shows_message() {
        let mut dom = VirtualDom::new(GuardedAction);
        dom.rebuild_in_place();

        let mut html = dioxus_ssr::render(&dom);
        for _ in 0..10 {
            if html.contains("error-message") {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
            html = dioxus_ssr::render(&dom);
        }

        assert!(html.contains("Could not load this page"));
        assert!(html.contains("Server error (404): Unknown action"));
    }

    #[test]
    fn test_load_embedded_config() {
        let (config, client) = load().unwrap();
        assert_eq!(client.config(), &config.shield);
    }

    #[test]
    fn test_auth_routes() {
        assert_eq!("/auth".parse::<Route>().unwrap(), Route::ActionIndex {});
        assert_eq!(
            "/auth/sign-up".parse::<Route>().unwrap(),
            Route::Action {
                action_id: "sign-up".to_string()
            }
        );
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
    }
}
