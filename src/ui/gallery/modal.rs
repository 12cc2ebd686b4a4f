//! Enlarged image with its filter picker

use crate::app::AppState;
use crate::gallery::detail::{FilterBook, ImageDetail, ImageFilter};
use crate::ui::gallery::DownloadButton;
use dioxus::prelude::*;

#[component]
pub fn ImageModal(detail: Signal<ImageDetail>, filters: Signal<FilterBook>) -> Element {
    let app_state = use_context::<AppState>();
    let mut detail = detail;
    let mut filters = filters;

    if !detail.read().is_open() {
        return rsx! {};
    }
    let Some(selected) = detail.read().selected().map(str::to_string) else {
        return rsx! {};
    };

    let src = app_state.api.image_src(&selected);
    let current = filters.read().get(&selected);
    let current_class = current.css_class();
    let image_class = format!("modal-image {}", current_class);
    let reference_for_filter = selected.clone();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| detail.write().close(),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                img {
                    class: "{image_class}",
                    src: "{src}",
                    alt: "Selected",
                }

                div {
                    class: "modal-actions",
                    label {
                        class: "field-label",
                        "Filter"
                        select {
                            class: "input",
                            value: "{current_class}",
                            onchange: move |evt| {
                                let filter = ImageFilter::from_css_class(&evt.value());
                                filters.write().apply(&reference_for_filter, filter);
                            },
                            for filter in ImageFilter::ALL {
                                option {
                                    value: filter.css_class(),
                                    selected: filter == current,
                                    {filter.label()}
                                }
                            }
                        }
                    }
                    DownloadButton { target: Some(selected.clone()) }
                    button {
                        class: "secondary-button",
                        onclick: move |_| detail.write().close(),
                        "Close"
                    }
                }
            }
        }
    }
}
