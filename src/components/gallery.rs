//! Demo gallery
//!
//! Tiles write the current selection into the shared store; the caption and
//! write counter read it back without any props threaded between them.

use dioxus::prelude::*;
use lazyview_core::ImageProps;
use lazyview_ui::{use_shared_data, use_shared_observer, use_shared_value, LazyImage, SharedData};
use serde_json::Value;

/// Key holding the index of the selected tile
pub const SELECTED_KEY: &str = "selected";

/// Key holding the alt text of the selected tile
pub const SELECTED_TITLE_KEY: &str = "selected_title";

#[component]
pub fn Gallery(images: Vec<ImageProps>) -> Element {
    let data = use_shared_data();

    rsx! {
        div { class: "gallery",
            for (index, image) in images.into_iter().enumerate() {
                GalleryTile { key: "{index}", index, image, data }
            }
        }
    }
}

/// One selectable image. Takes the store explicitly instead of looking it up.
#[component]
fn GalleryTile(index: usize, image: ImageProps, data: SharedData) -> Element {
    let mut data = data;
    let selected = data.read(SELECTED_KEY).and_then(|v| v.as_u64()) == Some(index as u64);
    let title = image.display_text.clone();
    let tooltip = title.clone();

    rsx! {
        button {
            class: if selected { "gallery__tile gallery__tile--selected" } else { "gallery__tile" },
            title: "{tooltip}",
            onclick: move |_| {
                data.write(SELECTED_KEY, index);
                data.write(SELECTED_TITLE_KEY, title.clone());
            },
            LazyImage {
                src: image.source.clone(),
                alt: image.display_text.clone(),
                class: image.style_class.clone(),
                fallback: image.fallback_source.clone(),
                width: image.width,
                height: image.height,
            }
        }
    }
}

#[component]
pub fn SelectionCaption() -> Element {
    let title = use_shared_value(SELECTED_TITLE_KEY);
    let text = match title.as_ref().and_then(Value::as_str) {
        Some(t) => format!("selected: {}", t),
        None => "click an image to select it".to_string(),
    };

    rsx! {
        p { class: "caption", "{text}" }
    }
}

/// Counts store writes through an observer rather than a reactive read
#[component]
pub fn WriteCounter() -> Element {
    let mut count = use_signal(|| 0u64);

    use_shared_observer(move |change| {
        tracing::debug!(key = change.key, "Shared data changed");
        count += 1;
    });

    rsx! {
        p { class: "write-counter", "{count} writes observed" }
    }
}
