use crate::Route;
use dioxus::prelude::*;
use shield_client::ShieldClient;

#[component]
pub fn Home() -> Element {
    let client = use_context::<ShieldClient>();
    let config = client.config();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            h1 { style: "color: #0066cc; text-align: center; margin: 48px 0 24px 0; font-size: 28px; font-weight: 700;",
                "🛡️ Shield"
            }
            p { style: "font-size: 14px; color: #555; text-align: center;",
                "Pick an action to render its forms from the authentication server."
            }
            div { style: "display: flex; flex-direction: column; gap: 12px; margin: 24px 0;",
                Link { to: Route::ActionIndex {}, "Default action ({config.default_action_id})" }
                Link {
                    to: Route::Action {
                        action_id: "sign-in".to_string(),
                    },
                    "Sign in"
                }
            }

            // Info Card
            div { style: "background: #f8f9fa; padding: 16px; margin: 16px 0; border-radius: 8px; border: 1px solid #e0e0e0;",
                h3 { style: "margin: 0 0 12px 0; font-size: 14px; color: #666; font-weight: 600;",
                    "ℹ️ Server"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0; word-break: break-all;",
                    "API: {config.server_url}{config.api_prefix}"
                }
            }
        }
    }
}
