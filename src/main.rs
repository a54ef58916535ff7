#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lazyview_core::GalleryManifest;
use tracing_subscriber::EnvFilter;

/// Gallery shown by the app, set once at startup
static MANIFEST: OnceLock<GalleryManifest> = OnceLock::new();

/// Get the gallery manifest (loaded from --manifest or the built-in demo)
pub fn get_manifest() -> GalleryManifest {
    MANIFEST.get().cloned().unwrap_or_else(GalleryManifest::demo)
}

/// LazyView demo - lazy images and shared data
#[derive(Parser, Debug)]
#[command(name = "lazyview-demo")]
#[command(about = "LazyView - lazy image gallery with shared selection state")]
struct Args {
    /// JSON gallery manifest (defaults to a built-in demo gallery)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let manifest = match &args.manifest {
        Some(path) => match GalleryManifest::load(path) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!("Failed to load manifest {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GalleryManifest::demo(),
    };

    tracing::info!("Starting gallery with {} images", manifest.images.len());
    let _ = MANIFEST.set(manifest);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("LazyView")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
