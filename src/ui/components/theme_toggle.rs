//! Dark/light theme toggle, persisted to the settings file on every change

use crate::app::AppState;
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let app_state = use_context::<AppState>();
    let mut settings_signal = app_state.settings;
    let dark = settings_signal.read().is_dark();

    rsx! {
        button {
            class: if dark { "toggle-switch active" } else { "toggle-switch" },
            title: "Toggle between light and dark modes",
            aria_label: "Toggle dark mode",
            onclick: move |_| {
                let mut settings = settings_signal.write();
                settings.toggle_theme();
                if let Err(error) = save_settings(&settings) {
                    tracing::error!("Failed to save settings: {}", error);
                }
            },
            if dark { "🌙" } else { "☀️" }
        }
    }
}
