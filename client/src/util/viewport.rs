//! Scoped viewport-intersection subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lazy images and section reveals both need "tell me once when this element
//! gets near the viewport". The browser side wraps `IntersectionObserver` in a
//! [`ViewportWatch`] guard: creating the guard registers exactly one observer,
//! dropping it disconnects that observer. Callers keep the guard for the
//! lifetime of their component and drop it in `on_cleanup`, so every teardown
//! path releases the observer, including teardown before the first signal.
//!
//! The pure types (`ObserverOptions`, `Intersection`, `WatchControl`) carry no
//! browser dependency so the state machines built on them test natively.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Observer configuration: proximity margin around the viewport and the
/// visibility ratio that counts as "entered".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin_px: i32,
    pub threshold: f64,
}

impl ObserverOptions {
    #[must_use]
    pub const fn new(root_margin_px: i32, threshold: f64) -> Self {
        Self { root_margin_px, threshold }
    }

    /// CSS `rootMargin` value, applied to all four sides.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Lazy images start fetching 80px before they scroll in, at 1% visibility.
pub const LAZY_IMAGE: ObserverOptions = ObserverOptions::new(80, 0.01);

/// Catalog and benefits sections.
pub const SECTION_DEFAULT: ObserverOptions = ObserverOptions::new(0, 0.2);

/// Gallery and accessory kit.
pub const SECTION_WIDE: ObserverOptions = ObserverOptions::new(0, 0.1);

/// Process section; the heat ramp should start once the furnace is clearly visible.
pub const SECTION_PROCESS: ObserverOptions = ObserverOptions::new(0, 0.3);

/// Short sections near the page bottom (testimonials, contact, footer).
pub const SECTION_EARLY: ObserverOptions = ObserverOptions::new(60, 0.05);

/// Platform-neutral copy of an `IntersectionObserverEntry`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    #[must_use]
    pub const fn entering(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio }
    }

    #[must_use]
    pub const fn outside() -> Self {
        Self { is_intersecting: false, ratio: 0.0 }
    }
}

/// What a watch handler wants after processing a batch of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchControl {
    Continue,
    /// Disconnect the observer; no further batches are delivered.
    Release,
}

/// True when any entry in the batch reports the target as intersecting.
#[must_use]
pub fn any_intersecting(entries: &[Intersection]) -> bool {
    entries.iter().any(|entry| entry.is_intersecting)
}

#[cfg(feature = "hydrate")]
pub use browser::{ViewportWatch, watch};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;

    use super::{Intersection, ObserverOptions, WatchControl};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Live observer registration. Dropping it disconnects the observer.
    ///
    /// The callback closure lives inside the guard so it cannot be freed
    /// while the observer can still invoke it.
    pub struct ViewportWatch {
        observer: web_sys::IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl Drop for ViewportWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Observe `element` and feed each entry batch to `handler`.
    ///
    /// When the handler returns [`WatchControl::Release`] the observer is
    /// disconnected from inside the callback; the guard still owns the
    /// closure until it is dropped. Returns `None` if the browser refuses to
    /// construct the observer; callers then treat the element as visible.
    pub fn watch<F>(element: &web_sys::Element, options: ObserverOptions, mut handler: F) -> Option<ViewportWatch>
    where
        F: FnMut(&[Intersection]) -> WatchControl + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let batch = entries
                .iter()
                .map(|value| {
                    let entry = value.unchecked_into::<web_sys::IntersectionObserverEntry>();
                    Intersection { is_intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() }
                })
                .collect::<Vec<_>>();
            if handler(&batch) == WatchControl::Release {
                observer.disconnect();
            }
        }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable: {err:?}");
                    return None;
                }
            };
        observer.observe(element);

        Some(ViewportWatch { observer, _callback: callback })
    }
}
