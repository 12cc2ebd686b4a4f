//! Generator view
//!
//! Model picker, schema-driven form and the gallery of images generated in
//! this session.

pub mod form;

use crate::app::{AppState, View};
use crate::form::FormEngine;
use crate::gallery::detail::{FilterBook, ImageDetail};
use crate::gallery::Gallery;
use crate::types::model::Model;
use crate::ui::components::loading::Spinner;
use crate::ui::gallery::{DownloadButton, ImageModal, Pagination, SearchBar};
use dioxus::prelude::*;
use form::SchemaForm;

#[component]
pub fn GeneratorView() -> Element {
    let app_state = use_context::<AppState>();
    let mut view = app_state.view;
    let mut generation = app_state.generation;

    let mut models = use_signal(Vec::<Model>::new);
    let mut form = use_signal(FormEngine::new);
    let gallery = use_signal(Gallery::new);
    let mut detail = use_signal(ImageDetail::new);
    let filters = use_signal(FilterBook::new);

    {
        let api = app_state.api.clone();
        use_effect(move || {
            let api = api.clone();
            spawn(async move {
                match api.list_models().await {
                    Ok(found) => models.set(found),
                    Err(e) => tracing::error!("Failed to load models: {}", e),
                }
            });
        });
    }

    let api_for_schema = app_state.api.clone();
    let handle_model_change = move |evt: FormEvent| {
        let Some(ticket) = form.write().select_model(&evt.value()) else {
            return;
        };
        let api = api_for_schema.clone();
        spawn(async move {
            match api.fetch_schema(ticket.model_id()).await {
                Ok(schema) => {
                    form.write().apply_schema(&ticket, schema);
                }
                Err(e) => {
                    tracing::error!("Failed to load schema for {}: {}", ticket.model_id(), e);
                    form.write().schema_failed(&ticket);
                }
            }
        });
    };

    let api_for_submit = app_state.api.clone();
    let handle_submit = move |_| {
        let request = match generation.write().begin(&form.read()) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Not submitting: {}", e);
                return;
            }
        };
        let api = api_for_submit.clone();
        spawn(async move {
            let outcome = api.generate_image(&request).await;
            generation.write().complete(outcome);
        });
    };

    let selected_model = form.read().selected_model().unwrap_or_default().to_string();
    let awaiting_schema = form.read().is_awaiting_schema();
    let can_submit = generation.read().can_submit(&form.read());
    let is_loading = generation.read().is_loading();

    let (page_refs, page_count) = {
        let log = generation.read();
        let page = gallery.read().view(log.images());
        let refs: Vec<String> = page
            .items
            .iter()
            .map(|image| image.reference().to_string())
            .collect();
        (refs, page.page_count)
    };
    let download_target = detail.read().download_target().map(str::to_string);

    rsx! {
        div {
            class: "generator",

            section {
                class: "panel generator-form",
                p {
                    class: "intro",
                    button {
                        class: "link-button",
                        onclick: move |_| view.set(View::StoredImages),
                        "See all generated images."
                    }
                }

                div {
                    class: "field",
                    label { class: "field-label", "AI Model" }
                    select {
                        class: "input",
                        value: "{selected_model}",
                        onchange: handle_model_change,
                        option { value: "", disabled: true, selected: selected_model.is_empty(), "Select an AI model" }
                        for model in models.read().iter() {
                            option {
                                key: "{model.id}",
                                value: "{model.id}",
                                "{model.name}"
                            }
                        }
                    }
                }

                if awaiting_schema {
                    div {
                        class: "schema-loading",
                        Spinner { size: 16 }
                        span { "Loading parameters..." }
                    }
                }

                SchemaForm { form }

                button {
                    class: "primary-button",
                    disabled: !can_submit,
                    onclick: handle_submit,
                    "Generate Image"
                }
            }

            section {
                class: "panel generator-gallery",
                SearchBar { gallery }

                if is_loading {
                    div { class: "gallery-loading", Spinner { size: 64 } }
                } else if page_refs.is_empty() {
                    div { class: "empty-state", "Your generated image will appear here" }
                } else {
                    div {
                        class: "carousel",
                        {page_refs.into_iter().enumerate().map(|(index, reference)| {
                            let src = app_state.api.image_src(&reference);
                            let class = format!("thumb {}", filters.read().class_for(&reference));
                            rsx! {
                                div {
                                    key: "{index}",
                                    class: "carousel-item",
                                    onclick: move |_| detail.write().open(&reference),
                                    img { class: "{class}", src: "{src}", alt: "Generated {index}" }
                                }
                            }
                        })}
                    }
                    DownloadButton { target: download_target }
                    Pagination { gallery, page_count }
                }
            }

            ImageModal { detail, filters }
        }
    }
}
