//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::api::ImageApi;
use crate::generation::GenerationLog;
use crate::storage::settings::AppSettings;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Page currently shown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    /// Model picker, schema form and the session's generated images
    #[default]
    Generator,
    /// Every image stored by the worker
    StoredImages,
}

/// Services built before launch and injected into the root context
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn ImageApi>,
    pub settings: AppSettings,
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ImageApi>,
    pub settings: Signal<AppSettings>,
    pub view: Signal<View>,
    /// Generated images and the in-flight flag - kept when navigating away
    pub generation: Signal<GenerationLog>,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        tracing::info!("AppState initialized");
        Self {
            api: services.api,
            settings: Signal::new(services.settings),
            view: Signal::new(View::default()),
            generation: Signal::new(GenerationLog::new()),
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    use_context_provider(move || AppState::new(services));

    rsx! {
        Layout {}
    }
}
