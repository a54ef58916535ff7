//! Lazy Image Component
//!
//! Shows a pulsing placeholder until the image settles, asks the platform to
//! defer the fetch until the element nears the viewport, and swaps to a
//! fallback once if the primary source fails.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use lazyview_core::view::PLACEHOLDER_CLASS;
use lazyview_core::{ImageLoadState, ImageProps, ImageView, LoadEvent, RenderMemo};

/// Properties for the LazyImage component
#[derive(Clone, PartialEq, Props)]
pub struct LazyImageProps {
    /// Primary image URL or asset path
    pub src: String,
    /// Alt text for accessibility
    pub alt: String,
    /// Optional extra CSS class for the `img`
    #[props(default = None)]
    pub class: Option<String>,
    /// Shown instead of `src` if it fails to load
    #[props(default = None)]
    pub fallback: Option<String>,
    /// Fixed width in pixels
    #[props(default = None)]
    pub width: Option<u32>,
    /// Fixed height in pixels
    #[props(default = None)]
    pub height: Option<u32>,
}

impl LazyImageProps {
    pub fn image_props(&self) -> ImageProps {
        ImageProps {
            source: self.src.clone(),
            display_text: self.alt.clone(),
            style_class: self.class.clone(),
            fallback_source: self.fallback.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

impl From<ImageProps> for LazyImageProps {
    fn from(image: ImageProps) -> Self {
        Self {
            src: image.source,
            alt: image.display_text,
            class: image.style_class,
            fallback: image.fallback_source,
            width: image.width,
            height: image.height,
        }
    }
}

/// Lazily loaded image with placeholder and fallback
///
/// Changing `src` or `fallback` on a mounted image starts loading again from
/// the placeholder; changing only `alt`, `class` or the size keeps progress.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LazyImage {
///         src: "https://example.com/photo.jpg".to_string(),
///         alt: "Harbour at dusk".to_string(),
///         fallback: Some("/assets/missing.svg".to_string()),
///         width: Some(480),
///         height: Some(320),
///     }
/// }
/// ```
#[component]
pub fn LazyImage(props: LazyImageProps) -> Element {
    #[cfg(test)]
    tests::count_body_run();

    let image = props.image_props();
    let state = use_signal(|| image.initial_state());
    let memo = use_hook(|| Rc::new(RefCell::new(RenderMemo::<ImageView>::new())));

    let current = image.resolve_state(&state.read());
    let view = memo
        .borrow_mut()
        .get_or_render(&(&image, current.phase()), || {
            ImageView::build(&image, &current)
        })
        .clone();

    let mut on_load = settle_handler(state, image.clone(), view.src.clone(), LoadEvent::Load);
    let mut on_error = settle_handler(state, image, view.src.clone(), LoadEvent::Error);

    rsx! {
        div {
            class: view.container_class,
            style: "{view.container_style}",
            if view.placeholder_visible {
                div { class: PLACEHOLDER_CLASS, "aria-hidden": "true" }
            }
            img {
                class: "{view.image_class}",
                style: "{view.image_style}",
                src: "{view.src}",
                alt: "{view.alt}",
                width: view.width.map(|w| w.to_string()),
                height: view.height.map(|h| h.to_string()),
                "loading": view.loading,
                "decoding": view.decoding,
                onload: move |_| on_load(),
                onerror: move |_| on_error(),
            }
        }
    }
}

/// Build the callback feeding `event` for `rendered` into `state`.
///
/// The signal is only written when the event moves the state machine, so
/// stale or post-terminal events cause no re-render.
fn settle_handler(
    mut state: Signal<ImageLoadState>,
    image: ImageProps,
    rendered: String,
    event: LoadEvent,
) -> impl FnMut() {
    move || {
        let mut next = image.resolve_state(&state.peek());
        if !next.apply_for(&rendered, event).is_ignored() {
            state.set(next);
        }
    }
}
