//! Gallery widgets shared by the generator and stored-images views

pub mod download;
pub mod modal;

use crate::gallery::Gallery;
use dioxus::prelude::*;

pub use download::DownloadButton;
pub use modal::ImageModal;

/// Free-text search box bound to a gallery's query
#[component]
pub fn SearchBar(gallery: Signal<Gallery>) -> Element {
    let mut gallery = gallery;
    let query = gallery.read().query().to_string();

    rsx! {
        input {
            r#type: "text",
            class: "input search-input",
            placeholder: "Search images...",
            value: "{query}",
            oninput: move |evt| gallery.write().set_query(evt.value()),
        }
    }
}

/// One button per page, the current page highlighted
#[component]
pub fn Pagination(gallery: Signal<Gallery>, page_count: usize) -> Element {
    let mut gallery = gallery;
    let current = gallery.read().current_page();

    rsx! {
        div {
            class: "pagination",
            for page in 1..=page_count {
                button {
                    key: "{page}",
                    class: if page == current { "page-button active" } else { "page-button" },
                    onclick: move |_| gallery.write().set_page(page),
                    "{page}"
                }
            }
        }
    }
}
