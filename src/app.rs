use dioxus::prelude::*;
use lazyview_ui::{DataProvider, LAZY_IMAGE_STYLES};

use crate::components::{Gallery, SelectionCaption, WriteCounter};
use crate::get_manifest;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and one shared data scope around the gallery.
#[component]
pub fn App() -> Element {
    let manifest = use_hook(get_manifest);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {LAZY_IMAGE_STYLES} }
        DataProvider {
            main { class: "app",
                h1 { class: "app__title", "LazyView" }
                SelectionCaption {}
                WriteCounter {}
                Gallery { images: manifest.images.clone() }
            }
        }
    }
}
