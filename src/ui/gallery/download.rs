//! Save the selected image to the download directory

use crate::app::AppState;
use crate::storage::downloads::download_selected;
use dioxus::prelude::*;

/// Download control for the selected image. Disabled, and a no-op, while
/// nothing is selected.
#[component]
pub fn DownloadButton(#[props(!optional)] target: Option<String>) -> Element {
    let app_state = use_context::<AppState>();
    let mut is_saving = use_signal(|| false);
    let mut saved_to = use_signal(|| None::<String>);

    let disabled = target.is_none() || is_saving();

    let handle_download = move |_| {
        let selected = target.clone();
        let dir = match app_state.settings.read().download_dir() {
            Ok(dir) => dir,
            Err(e) => {
                tracing::error!("No download directory available: {}", e);
                return;
            }
        };

        is_saving.set(true);
        saved_to.set(None);
        let api = app_state.api.clone();
        spawn(async move {
            match download_selected(api.as_ref(), selected.as_deref(), &dir).await {
                Ok(Some(path)) => saved_to.set(Some(path.display().to_string())),
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to download image: {}", e),
            }
            is_saving.set(false);
        });
    };

    rsx! {
        div {
            class: "download",
            button {
                class: "secondary-button",
                disabled: disabled,
                title: if disabled { "Select an image first" } else { "Save the selected image" },
                onclick: handle_download,
                if is_saving() { "Saving..." } else { "Download Image" }
            }
            if let Some(path) = saved_to.read().as_ref() {
                span { class: "download-note", "Saved to {path}" }
            }
        }
    }
}
