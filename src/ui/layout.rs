//! Application shell: header, theme toggle and the active view

use crate::app::{AppState, View};
use crate::ui::components::theme_toggle::ThemeToggle;
use crate::ui::generator::GeneratorView;
use crate::ui::images::StoredImagesView;
use dioxus::prelude::*;

const MAIN_CSS: &str = include_str!("../../assets/main.css");

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let dark = app_state.settings.read().is_dark();
    let view = *app_state.view.read();

    let title = match view {
        View::Generator => "Workers AI Image Generator",
        View::StoredImages => "List Images",
    };

    rsx! {
        style { "{MAIN_CSS}" }
        div {
            class: if dark { "app dark" } else { "app" },

            header {
                class: "app-header",
                div {
                    h1 { class: "app-title", "{title}" }
                    p {
                        class: "app-subtitle",
                        "Powered by Cloudflare Workers AI."
                    }
                }
                ThemeToggle {}
            }

            main {
                class: "app-main",
                match view {
                    View::Generator => rsx! { GeneratorView {} },
                    View::StoredImages => rsx! { StoredImagesView {} },
                }
            }
        }
    }
}
