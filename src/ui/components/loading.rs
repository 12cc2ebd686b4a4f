use dioxus::prelude::*;

/// Spinning loading indicator
#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        div {
            class: "spinner",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
