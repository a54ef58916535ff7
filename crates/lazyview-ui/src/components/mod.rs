//! Reusable components

mod lazy_image;

pub use lazy_image::*;
