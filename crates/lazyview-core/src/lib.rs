//! LazyView Core Library
//!
//! Headless state behind two UI building blocks:
//!
//! - **Lazy image**: an image element that shows a placeholder until its
//!   resource settles, then swaps to the image or a one-step fallback.
//! - **Shared data**: a key/value store scoped to a provider, with
//!   copy-on-write snapshots and write observers.
//!
//! Nothing here depends on a UI runtime. The `lazyview-ui` crate drives these
//! types from Dioxus components.
//!
//! ## Quick Start
//!
//! ```
//! use lazyview_core::{ImageProps, ImageView, SharedDataStore};
//!
//! let props = ImageProps::new("img.png", "A picture").with_fallback("fb.png");
//! let mut state = props.initial_state();
//! state.on_error();
//! assert_eq!(ImageView::build(&props, &state).src, "fb.png");
//!
//! let mut store = SharedDataStore::new();
//! store.write("selected", 3);
//! assert_eq!(store.read("selected"), Some(&3));
//! ```

pub mod error;
pub mod image_load;
pub mod manifest;
pub mod memo;
pub mod scope;
pub mod store;
pub mod view;

// Re-exports
pub use error::{LazyViewError, LazyViewResult};
pub use image_load::{ImageLoadState, LoadEvent, LoadFailure, LoadPhase, Transition};
pub use manifest::GalleryManifest;
pub use memo::RenderMemo;
pub use scope::ProviderStack;
pub use store::{SharedDataStore, Snapshot, StoreChange, SubscriptionId};
pub use view::{ImageProps, ImageView, FADE_IN_MS};
