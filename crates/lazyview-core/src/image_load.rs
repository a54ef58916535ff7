//! Image load state machine.
//!
//! Tracks one image element from mount until its resource settles:
//!
//! ```text
//! Loading ──load──▶ Loaded
//!    │
//!  error (fallback set) ──▶ FallbackLoading ──load──▶ FallbackLoaded
//!    │                              │
//!  error (no fallback) ──▶ Failed ◀─┘ error
//! ```
//!
//! `Loaded`, `FallbackLoaded` and `Failed` are terminal. There is no retry and no
//! second fallback.

use std::fmt;

/// Where an image element is in its load lifecycle
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum LoadPhase {
    /// Primary resource requested, nothing settled yet
    #[default]
    Loading,
    /// Primary resource loaded
    Loaded,
    /// Primary failed, fallback resource requested
    FallbackLoading,
    /// Primary failed, fallback loaded
    FallbackLoaded,
    /// Primary failed and there is nothing left to try
    Failed,
}

impl LoadPhase {
    /// Returns whether no further event can change this phase
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoadPhase::Loaded | LoadPhase::FallbackLoaded | LoadPhase::Failed
        )
    }

    /// Short kebab-case name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Loaded => "loaded",
            LoadPhase::FallbackLoading => "fallback-loading",
            LoadPhase::FallbackLoaded => "fallback-loaded",
            LoadPhase::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completion event delivered by the platform for the rendered resource
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadEvent {
    Load,
    Error,
}

/// Which resource failed to load
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadFailure {
    /// The primary source failed; recovered by switching to the fallback if any
    Primary,
    /// The fallback failed too; the element stays broken
    Fallback,
}

/// Outcome of feeding an event into [`ImageLoadState`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// The phase changed
    Moved { from: LoadPhase, to: LoadPhase },
    /// The event had no effect (terminal phase or stale resource)
    Ignored,
}

impl Transition {
    /// Returns whether the event left the state untouched
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}

/// Per-instance load state of an image element.
///
/// Created on mount, dropped on unmount. The `loaded`/`errored` pair exposed
/// here is derived from [`LoadPhase`]: on a primary failure both become true in
/// the same step, so the placeholder goes away even while the fallback is still
/// in flight.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageLoadState {
    source: String,
    fallback: Option<String>,
    phase: LoadPhase,
}

impl ImageLoadState {
    /// Create the mount-time state for `source`.
    ///
    /// An empty fallback string counts as no fallback.
    pub fn new(source: impl Into<String>, fallback: Option<String>) -> Self {
        Self {
            source: source.into(),
            fallback: fallback.filter(|f| !f.is_empty()),
            phase: LoadPhase::Loading,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Primary resource identifier this state was created for
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fallback resource identifier, if one was configured
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Returns whether this state tracks `source` with `fallback`.
    ///
    /// Empty fallbacks compare equal to no fallback.
    pub fn is_for(&self, source: &str, fallback: Option<&str>) -> bool {
        self.source == source && self.fallback.as_deref() == fallback.filter(|f| !f.is_empty())
    }

    /// True once the primary or fallback resource has loaded or errored
    pub fn loaded(&self) -> bool {
        self.phase != LoadPhase::Loading
    }

    /// True if the primary resource failed to load
    pub fn errored(&self) -> bool {
        matches!(
            self.phase,
            LoadPhase::FallbackLoading | LoadPhase::FallbackLoaded | LoadPhase::Failed
        )
    }

    /// The resource identifier the element should currently display
    pub fn effective_source(&self) -> &str {
        match (&self.fallback, self.errored()) {
            (Some(fallback), true) => fallback,
            _ => &self.source,
        }
    }

    /// Primary or fallback resource finished loading
    pub fn on_load(&mut self) -> Transition {
        self.apply(LoadEvent::Load)
    }

    /// Primary or fallback resource failed to load
    pub fn on_error(&mut self) -> Transition {
        self.apply(LoadEvent::Error)
    }

    /// Feed an event reported for `resource`.
    ///
    /// Events for anything other than [`effective_source`](Self::effective_source)
    /// are late callbacks from a replaced `src` and are dropped.
    pub fn apply_for(&mut self, resource: &str, event: LoadEvent) -> Transition {
        if resource != self.effective_source() {
            tracing::trace!(
                resource,
                current = self.effective_source(),
                "Dropping stale image event"
            );
            return Transition::Ignored;
        }
        self.apply(event)
    }

    /// Feed an event for the currently rendered resource
    pub fn apply(&mut self, event: LoadEvent) -> Transition {
        let from = self.phase;
        let to = match (from, event) {
            (LoadPhase::Loading, LoadEvent::Load) => LoadPhase::Loaded,
            (LoadPhase::Loading, LoadEvent::Error) => {
                self.report(LoadFailure::Primary);
                if self.fallback.is_some() {
                    LoadPhase::FallbackLoading
                } else {
                    LoadPhase::Failed
                }
            }
            (LoadPhase::FallbackLoading, LoadEvent::Load) => LoadPhase::FallbackLoaded,
            (LoadPhase::FallbackLoading, LoadEvent::Error) => {
                self.report(LoadFailure::Fallback);
                LoadPhase::Failed
            }
            (phase, _) => {
                debug_assert!(phase.is_terminal());
                return Transition::Ignored;
            }
        };

        self.phase = to;
        tracing::debug!(source = %self.source, %from, %to, "Image load transition");
        Transition::Moved { from, to }
    }

    fn report(&self, failure: LoadFailure) {
        match failure {
            LoadFailure::Primary => match &self.fallback {
                Some(fallback) => tracing::warn!(
                    source = %self.source,
                    fallback = %fallback,
                    "Image failed to load, switching to fallback"
                ),
                None => tracing::warn!(source = %self.source, "Image failed to load, no fallback"),
            },
            LoadFailure::Fallback => tracing::warn!(
                source = %self.source,
                fallback = self.fallback.as_deref().unwrap_or_default(),
                "Fallback image failed to load"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state = ImageLoadState::new("img.png", None);
        assert_eq!(state.phase(), LoadPhase::Loading);
        assert!(!state.loaded());
        assert!(!state.errored());
        assert_eq!(state.effective_source(), "img.png");
    }

    #[test]
    fn load_success() {
        let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        let t = state.on_load();
        assert_eq!(
            t,
            Transition::Moved {
                from: LoadPhase::Loading,
                to: LoadPhase::Loaded
            }
        );
        assert!(state.loaded());
        assert!(!state.errored());
        assert_eq!(state.effective_source(), "img.png");
    }

    #[test]
    fn error_switches_to_fallback_and_hides_placeholder() {
        let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        state.on_error();
        assert_eq!(state.phase(), LoadPhase::FallbackLoading);
        assert!(state.loaded());
        assert!(state.errored());
        assert_eq!(state.effective_source(), "fb.png");

        state.on_load();
        assert_eq!(state.phase(), LoadPhase::FallbackLoaded);
        assert!(state.loaded());
        assert!(state.errored());
        assert_eq!(state.effective_source(), "fb.png");
    }

    #[test]
    fn error_without_fallback_keeps_source() {
        let mut state = ImageLoadState::new("img.png", None);
        state.on_error();
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert!(state.loaded());
        assert!(state.errored());
        assert_eq!(state.effective_source(), "img.png");
    }

    #[test]
    fn fallback_failure_is_terminal() {
        let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        state.on_error();
        state.on_error();
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.effective_source(), "fb.png");

        assert!(state.on_error().is_ignored());
        assert!(state.on_load().is_ignored());
        assert_eq!(state.phase(), LoadPhase::Failed);
    }

    #[test]
    fn loaded_ignores_later_events() {
        let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        state.on_load();
        assert!(state.on_error().is_ignored());
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.effective_source(), "img.png");
    }

    #[test]
    fn empty_fallback_counts_as_none() {
        let mut state = ImageLoadState::new("img.png", Some(String::new()));
        assert_eq!(state.fallback(), None);
        state.on_error();
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.effective_source(), "img.png");
    }

    #[test]
    fn stale_primary_event_after_swap_is_dropped() {
        let mut state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        state.apply_for("img.png", LoadEvent::Error);
        assert_eq!(state.phase(), LoadPhase::FallbackLoading);

        assert!(state.apply_for("img.png", LoadEvent::Load).is_ignored());
        assert_eq!(state.phase(), LoadPhase::FallbackLoading);

        state.apply_for("fb.png", LoadEvent::Load);
        assert_eq!(state.phase(), LoadPhase::FallbackLoaded);
    }

    #[test]
    fn is_for_compares_source_and_fallback() {
        let state = ImageLoadState::new("img.png", Some("fb.png".to_string()));
        assert!(state.is_for("img.png", Some("fb.png")));
        assert!(!state.is_for("other.png", Some("fb.png")));
        assert!(!state.is_for("img.png", None));

        let bare = ImageLoadState::new("img.png", None);
        assert!(bare.is_for("img.png", None));
        assert!(bare.is_for("img.png", Some("")));
    }

    #[test]
    fn phase_labels() {
        assert_eq!(LoadPhase::Loading.to_string(), "loading");
        assert_eq!(LoadPhase::FallbackLoaded.label(), "fallback-loaded");
        assert!(!LoadPhase::Loading.is_terminal());
        assert!(!LoadPhase::FallbackLoading.is_terminal());
        assert!(LoadPhase::Failed.is_terminal());
    }
}
