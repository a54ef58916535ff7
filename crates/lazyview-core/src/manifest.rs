//! Gallery manifest: the list of images a host app displays.
//!
//! ```json
//! {
//!   "images": [
//!     { "source": "https://example.com/a.png", "display_text": "A", "fallback_source": "fb.png" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LazyViewError, LazyViewResult};
use crate::view::ImageProps;

/// Built-in placeholder shown when a demo image is broken
pub const DEMO_FALLBACK: &str =
    "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='4' height='3'><rect width='4' height='3' fill='%23333'/></svg>";

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub images: Vec<ImageProps>,
}

impl GalleryManifest {
    pub fn from_json_str(json: &str) -> LazyViewResult<Self> {
        let manifest: GalleryManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> LazyViewResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            images = manifest.images.len(),
            "Loaded gallery manifest"
        );
        Ok(manifest)
    }

    /// Every entry needs a primary source
    pub fn validate(&self) -> LazyViewResult<()> {
        if let Some(index) = self.images.iter().position(|img| img.source.trim().is_empty()) {
            return Err(LazyViewError::InvalidManifest(format!(
                "image {} has an empty source",
                index
            )));
        }
        Ok(())
    }

    /// Built-in gallery covering success, fallback, and broken cases
    pub fn demo() -> Self {
        Self {
            images: vec![
                ImageProps::new("https://picsum.photos/id/10/480/320", "Forest").with_size(480, 320),
                ImageProps::new("https://picsum.photos/id/29/480/320", "Mountains")
                    .with_size(480, 320)
                    .with_class("rounded"),
                ImageProps::new("https://invalid.example/missing.png", "Missing with fallback")
                    .with_fallback(DEMO_FALLBACK)
                    .with_size(480, 320),
                ImageProps::new("https://invalid.example/broken.png", "Missing, no fallback")
                    .with_size(480, 320),
            ],
        }
    }
}
