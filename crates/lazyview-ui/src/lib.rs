//! LazyView UI Components
//!
//! Dioxus components on top of `lazyview-core`:
//!
//! - [`LazyImage`]: placeholder until loaded, lazy fetch, one-step fallback
//! - [`DataProvider`] / [`SharedData`]: key/value data shared across a subtree
//!
//! Include [`LAZY_IMAGE_STYLES`] once in the document for the placeholder
//! pulse and fade-in.

pub mod components;
pub mod context;
mod styles;

pub use components::*;
pub use context::{
    try_use_shared_data, use_data_store, use_shared_data, use_shared_observer, use_shared_value,
    DataProvider, SharedData,
};
pub use styles::LAZY_IMAGE_STYLES;
