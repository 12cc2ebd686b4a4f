//! Stored images view: every image the worker has written, in a paginated
//! three column grid

use crate::app::{AppState, View};
use crate::gallery::detail::{FilterBook, ImageDetail};
use crate::gallery::Gallery;
use crate::types::image::StoredImage;
use crate::ui::components::loading::Spinner;
use crate::ui::gallery::{DownloadButton, ImageModal, Pagination, SearchBar};
use dioxus::prelude::*;

const CAPTION_CHARS: usize = 24;

#[component]
pub fn StoredImagesView() -> Element {
    let app_state = use_context::<AppState>();
    let mut view = app_state.view;

    let mut images = use_signal(Vec::<StoredImage>::new);
    let mut is_loading = use_signal(|| true);
    let gallery = use_signal(Gallery::new);
    let mut detail = use_signal(ImageDetail::new);
    let filters = use_signal(FilterBook::new);

    {
        let api = app_state.api.clone();
        use_effect(move || {
            let api = api.clone();
            spawn(async move {
                match api.list_images().await {
                    Ok(found) => {
                        tracing::info!("Loaded {} stored images", found.len());
                        images.set(found);
                    }
                    Err(e) => tracing::error!("Failed to list images: {}", e),
                }
                is_loading.set(false);
            });
        });
    }

    let (tiles, page_count) = {
        let all = images.read();
        let page = gallery.read().view(all.as_slice());
        let tiles: Vec<StoredImage> = page.items.iter().map(|image| (*image).clone()).collect();
        (tiles, page.page_count)
    };
    let download_target = detail.read().download_target().map(str::to_string);

    rsx! {
        div {
            class: "stored-images",

            div {
                class: "stored-toolbar",
                button {
                    class: "link-button",
                    onclick: move |_| view.set(View::Generator),
                    "Back to Image Generator"
                }
                SearchBar { gallery }
            }

            if is_loading() {
                div { class: "gallery-loading", Spinner { size: 64 } }
            } else if tiles.is_empty() {
                div { class: "empty-state", "No images yet." }
            } else {
                div {
                    class: "grid",
                    {tiles.into_iter().map(|image| {
                        let key = image.key.clone();
                        let src = app_state.api.image_src(&image.key);
                        let class = format!("tile-image {}", filters.read().class_for(&image.key));
                        let caption = truncate_key(&image.key);
                        let uploaded = image.uploaded_label();
                        rsx! {
                            div {
                                key: "{key}",
                                class: "tile",
                                title: "{uploaded}",
                                onclick: move |_| detail.write().open(&image.key),
                                img {
                                    class: "{class}",
                                    src: "{src}",
                                    width: "256",
                                    height: "256",
                                    alt: "{caption}",
                                }
                                p { class: "tile-caption", "{caption}" }
                            }
                        }
                    })}
                }
            }

            div {
                class: "stored-footer",
                DownloadButton { target: download_target }
                Pagination { gallery, page_count }
            }

            ImageModal { detail, filters }
        }
    }
}

/// Keys are long generated names; keep the start and mark the cut
fn truncate_key(key: &str) -> String {
    if key.chars().count() <= CAPTION_CHARS {
        return key.to_string();
    }
    let head: String = key.chars().take(CAPTION_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_key() {
        assert_eq!(truncate_key("short.png"), "short.png");
        let long = "a-very-long-generated-image-key-1718000000.png";
        let caption = truncate_key(long);
        assert!(caption.ends_with("..."));
        assert_eq!(caption.chars().count(), CAPTION_CHARS + 3);
    }
}
