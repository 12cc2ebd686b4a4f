use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use imagegen::api::HttpImageApi;
use imagegen::app::{App, Services};
use imagegen::storage::settings::load_settings;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = load_settings().with_env_overrides();
    let api = match HttpImageApi::from_settings(&settings) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Invalid API base URL {:?}: {}", settings.api_base_url, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Using image API at {}", api.base_url());

    let services = Services {
        api: Arc::new(api),
        settings,
    };

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Workers AI Image Generator")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0)),
            ),
        )
        .with_context(services)
        .launch(App);
}
