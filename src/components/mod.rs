//! Demo app components

mod gallery;

pub use gallery::*;
