use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NavigationBar() -> Element {
    let entries = [
        (Route::Home {}, "🏠 Home"),
        (
            Route::Action {
                action_id: "sign-in".to_string(),
            },
            "🔐 Sign in",
        ),
        (
            Route::Action {
                action_id: "sign-up".to_string(),
            },
            "📝 Sign up",
        ),
        (
            Route::Action {
                action_id: "sign-out".to_string(),
            },
            "🚪 Sign out",
        ),
    ];

    rsx! {
        nav { class: "nav-bar",
            for (route, label) in entries {
                Link {
                    class: "nav-link",
                    active_class: "nav-link-active",
                    to: route,
                    "{label}"
                }
            }
        }
    }
}
