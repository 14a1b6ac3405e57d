//! Load-state machine for viewport-lazy images.
//!
//! DESIGN
//! ======
//! `LoadState` is forward-only: `NotRequested -> InView -> Loaded`, with
//! `InView -> Failed` on an image error. The real source URL is only handed
//! out once the state has left `NotRequested`, so "loaded implies requested"
//! holds by construction instead of by keeping two booleans in sync.
//!
//! The loader also tracks whether its viewport watch is still live. After
//! `release` (teardown, or the one-shot transition firing) intersection
//! batches are ignored, which makes late or synthetic observer deliveries
//! harmless.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

use crate::util::viewport::{Intersection, any_intersecting};

/// Caller-supplied image description. Immutable for the loader's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    pub src: String,
    pub alt: String,
    pub sizes: Option<String>,
    pub srcset: Option<String>,
}

impl ImageRequest {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into(), sizes: None, srcset: None }
    }

    #[must_use]
    pub fn with_responsive(mut self, sizes: Option<String>, srcset: Option<String>) -> Self {
        self.sizes = sizes;
        self.srcset = srcset;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotRequested,
    InView,
    Loaded,
    /// The image reported an error. Terminal; the placeholder stays up.
    Failed,
}

impl LoadState {
    /// Value for the `data-load-state` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotRequested => "not-requested",
            Self::InView => "in-view",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Watch {
    #[default]
    Live,
    Released,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LazyLoader {
    state: LoadState,
    watch: Watch,
}

impl LazyLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Whether the viewport watch still needs to deliver signals.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.watch == Watch::Live
    }

    /// Feed one observer batch. Returns `true` when the watch is no longer
    /// needed and should be disconnected.
    pub fn observe(&mut self, entries: &[Intersection]) -> bool {
        if self.watch == Watch::Released {
            return true;
        }
        if self.state == LoadState::NotRequested && any_intersecting(entries) {
            self.state = LoadState::InView;
            self.watch = Watch::Released;
            return true;
        }
        false
    }

    /// No viewport observer could be registered. Request the image now
    /// rather than never.
    pub fn observer_unavailable(&mut self) {
        self.observe(&[Intersection::entering(1.0)]);
    }

    /// The image element finished loading.
    pub fn mark_loaded(&mut self) {
        if self.state == LoadState::InView {
            self.state = LoadState::Loaded;
        }
    }

    /// The image element reported an error.
    pub fn mark_failed(&mut self) {
        if self.state == LoadState::InView {
            self.state = LoadState::Failed;
        }
    }

    /// Component teardown. Later observer batches become no-ops.
    pub fn release(&mut self) {
        self.watch = Watch::Released;
    }

    /// Source URL to attach to the `<img>`, or `None` while not yet requested.
    #[must_use]
    pub fn src<'a>(&self, request: &'a ImageRequest) -> Option<&'a str> {
        if self.state == LoadState::NotRequested {
            None
        } else {
            Some(request.src.as_str())
        }
    }

    /// Responsive source set, gated the same way as `src`.
    #[must_use]
    pub fn srcset<'a>(&self, request: &'a ImageRequest) -> Option<&'a str> {
        self.src(request).and(request.srcset.as_deref())
    }

    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.state != LoadState::Loaded
    }
}
