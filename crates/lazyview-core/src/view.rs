//! Render plan for a lazily loaded image.
//!
//! [`ImageView`] is everything a renderer needs to draw one image element,
//! computed from the caller's [`ImageProps`] and the current [`ImageLoadState`].

use serde::{Deserialize, Serialize};

use crate::image_load::ImageLoadState;

/// Fade-in duration applied once the image settles
pub const FADE_IN_MS: u32 = 300;

/// Container class; the placeholder and image are positioned inside it
pub const CONTAINER_CLASS: &str = "lazy-image";

/// Pulsing overlay shown while nothing has settled
pub const PLACEHOLDER_CLASS: &str = "lazy-image__placeholder";

/// Image class used when the caller does not supply one
pub const DEFAULT_IMAGE_CLASS: &str = "lazy-image__img";

/// Caller-supplied properties of an image element
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ImageProps {
    /// Primary resource identifier (URL or asset path)
    pub source: String,
    /// Alt text for accessibility
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_source: Option<String>,
    /// Fixed width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Fixed height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageProps {
    pub fn new(source: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            display_text: display_text.into(),
            ..Default::default()
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_source = Some(fallback.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Mount-time load state for these props
    pub fn initial_state(&self) -> ImageLoadState {
        ImageLoadState::new(self.source.clone(), self.fallback_source.clone())
    }

    /// Returns whether `state` was created for these props' resources
    pub fn owns(&self, state: &ImageLoadState) -> bool {
        state.is_for(&self.source, self.fallback_source.as_deref())
    }

    /// `stored` if it still tracks these props, otherwise a fresh mount-time state.
    ///
    /// A changed `source` or `fallback_source` restarts loading from scratch.
    pub fn resolve_state(&self, stored: &ImageLoadState) -> ImageLoadState {
        if self.owns(stored) {
            stored.clone()
        } else {
            self.initial_state()
        }
    }
}

/// Computed render output for one image element
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageView {
    pub container_class: &'static str,
    /// Inline size style for the container, empty when unsized
    pub container_style: String,
    pub placeholder_visible: bool,
    pub src: String,
    pub alt: String,
    pub image_class: String,
    /// Inline opacity and transition style for the image
    pub image_style: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Value of the `loading` attribute; defers fetch until near the viewport
    pub loading: &'static str,
    /// Value of the `decoding` attribute; decode off the UI thread
    pub decoding: &'static str,
}

impl ImageView {
    /// Render plan for `props`.
    ///
    /// A `state` left over from different resources is ignored in favour of a
    /// fresh one, so `src` always follows the current props.
    pub fn build(props: &ImageProps, state: &ImageLoadState) -> Self {
        let fresh;
        let state = if props.owns(state) {
            state
        } else {
            fresh = props.initial_state();
            &fresh
        };
        let loaded = state.loaded();

        let mut container_style = String::new();
        if let Some(w) = props.width {
            container_style.push_str(&format!("width: {}px;", w));
        }
        if let Some(h) = props.height {
            if !container_style.is_empty() {
                container_style.push(' ');
            }
            container_style.push_str(&format!("height: {}px;", h));
        }

        let image_class = match props.style_class.as_deref() {
            Some(class) if !class.is_empty() => format!("{} {}", DEFAULT_IMAGE_CLASS, class),
            _ => DEFAULT_IMAGE_CLASS.to_string(),
        };

        Self {
            container_class: CONTAINER_CLASS,
            container_style,
            placeholder_visible: !loaded,
            src: state.effective_source().to_string(),
            alt: props.display_text.clone(),
            image_class,
            image_style: format!(
                "opacity: {}; transition: opacity {}ms ease-in-out;",
                if loaded { 1 } else { 0 },
                FADE_IN_MS
            ),
            width: props.width,
            height: props.height,
            loading: "lazy",
            decoding: "async",
        }
    }
}
