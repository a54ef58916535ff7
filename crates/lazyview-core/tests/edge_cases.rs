//! Edge case and boundary condition tests
//!
//! Unusual identifiers, events in unexpected orders, and store keys that
//! stress the map.

use lazyview_core::{
    GalleryManifest, ImageLoadState, ImageProps, ImageView, LazyViewError, LoadEvent, LoadPhase,
    SharedDataStore,
};

// ============================================================================
// Image Loader
// ============================================================================

/// Fallback equal to the source still goes through the fallback phase
#[test]
fn test_fallback_same_as_source() {
    let mut state = ImageLoadState::new("img.png", Some("img.png".to_string()));
    state.on_error();
    assert_eq!(state.phase(), LoadPhase::FallbackLoading);
    assert_eq!(state.effective_source(), "img.png");

    state.on_error();
    assert_eq!(state.phase(), LoadPhase::Failed);
}

/// Empty source is not rejected by the state machine
#[test]
fn test_empty_source() {
    let mut state = ImageLoadState::new("", None);
    assert_eq!(state.effective_source(), "");
    state.on_load();
    assert!(state.loaded());
}

/// Unicode and data URIs pass through untouched
#[test]
fn test_unusual_identifiers() {
    let sources = [
        "данные.png",
        "data:image/png;base64,iVBORw0KGgo=",
        "https://example.com/a b.png?x=1&y=2",
    ];

    for source in sources {
        let props = ImageProps::new(source, "alt");
        let view = ImageView::build(&props, &props.initial_state());
        assert_eq!(view.src, source);
    }
}

/// Repeated events after settling never change anything
#[test]
fn test_event_storm_after_load() {
    let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
    state.on_load();

    for i in 0..50 {
        let event = if i % 2 == 0 { LoadEvent::Error } else { LoadEvent::Load };
        assert!(state.apply(event).is_ignored());
    }
    assert_eq!(state.phase(), LoadPhase::Loaded);
    assert!(!state.errored());
}

/// An error event for the fallback while the primary is still loading is stale
#[test]
fn test_fallback_event_before_primary_settles() {
    let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
    assert!(state.apply_for("fb.png", LoadEvent::Error).is_ignored());
    assert_eq!(state.phase(), LoadPhase::Loading);
}

/// Zero-size dimensions are kept as given
#[test]
fn test_zero_dimensions() {
    let props = ImageProps::new("img.png", "alt").with_size(0, 0);
    let view = ImageView::build(&props, &props.initial_state());
    assert_eq!(view.container_style, "width: 0px; height: 0px;");
}

/// Only height set
#[test]
fn test_height_only() {
    let mut props = ImageProps::new("img.png", "alt");
    props.height = Some(40);
    let view = ImageView::build(&props, &props.initial_state());
    assert_eq!(view.container_style, "height: 40px;");
}

// ============================================================================
// Shared Data Store
// ============================================================================

/// Empty key is a key like any other
#[test]
fn test_empty_key() {
    let mut store = SharedDataStore::new();
    store.write("", "empty");
    assert_eq!(store.read(""), Some(&"empty"));
    assert_eq!(store.len(), 1);
}

/// Keys differing only by case are distinct
#[test]
fn test_case_sensitive_keys() {
    let mut store = SharedDataStore::new();
    store.write("Key", 1);
    store.write("key", 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.read("Key"), Some(&1));
}

/// Many keys survive repeated overwrites of one of them
#[test]
fn test_many_keys() {
    let mut store = SharedDataStore::new();
    for i in 0..500 {
        store.write(format!("key-{}", i), i);
    }
    for round in 0..10 {
        store.write("key-0", 1000 + round);
    }
    assert_eq!(store.len(), 500);
    assert_eq!(store.read("key-499"), Some(&499));
    assert_eq!(store.read("key-0"), Some(&1009));
    assert_eq!(store.write_count(), 510);
}

/// Values of arbitrary shape
#[test]
fn test_json_values() {
    let mut store = SharedDataStore::new();
    store.write("user", serde_json::json!({"name": "Ada", "tags": ["a", "b"]}));
    store.write("count", serde_json::json!(3));
    store.write("nothing", serde_json::Value::Null);

    assert_eq!(store.read("user").unwrap()["name"], "Ada");
    assert_eq!(store.read("nothing"), Some(&serde_json::Value::Null));
    assert_eq!(store.read("absent"), None);
}

// ============================================================================
// Manifest
// ============================================================================

#[test]
fn test_manifest_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    std::fs::write(
        &path,
        r#"{"images": [{"source": "a.png", "display_text": "A", "fallback_source": "fb.png"}]}"#,
    )
    .unwrap();

    let manifest = GalleryManifest::load(&path).unwrap();
    assert_eq!(manifest.images[0].fallback_source.as_deref(), Some("fb.png"));
}

#[test]
fn test_manifest_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GalleryManifest::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LazyViewError::Io(_)));
}
