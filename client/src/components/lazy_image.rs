//! Image that defers its network fetch until it nears the viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the server without `src`/`srcset`, so the browser fetches
//! nothing during the initial document load. After hydration a one-shot
//! [`ViewportWatch`](crate::util::viewport) flips the loader to `InView`,
//! which attaches the real source; the `load` event then swaps the pulsing
//! placeholder out. Everything stateful lives in [`LazyLoader`]; this module
//! only wires browser events into it.

#[cfg(test)]
#[path = "lazy_image_test.rs"]
mod lazy_image_test;

use leptos::prelude::*;

use crate::state::lazy_image::{ImageRequest, LazyLoader, LoadState};
use crate::util::motion::{MOTION_CLASS, MotionProps, merge_style};

const WRAPPER_CLASS: &str = "lazy-image";
const PLACEHOLDER_CLASS: &str = "lazy-image__placeholder";
const IMAGE_CLASS: &str = "lazy-image__img";
const DEFAULT_LOADED_CLASS: &str = "is-loaded";
const DEFAULT_PENDING_CLASS: &str = "is-pending";

/// Viewport-lazy `<img>` with a placeholder that holds its layout box.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] loaded_class: Option<String>,
    #[prop(optional, into)] pending_class: Option<String>,
    #[prop(optional, into)] wrapper_class: Option<String>,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(optional_no_strip)] sizes: Option<String>,
    #[prop(optional_no_strip)] srcset: Option<String>,
    /// `lazy` (default) or `eager`.
    #[prop(optional, into)]
    loading: Option<String>,
    /// `async` (default), `sync` or `auto`.
    #[prop(optional, into)]
    decoding: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] motion: Option<MotionProps>,
) -> impl IntoView {
    let request = StoredValue::new(ImageRequest::new(src, alt).with_responsive(sizes, srcset));
    let loader = RwSignal::new(LazyLoader::new());
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::{LAZY_IMAGE, ViewportWatch, WatchControl, watch};

        let guard = StoredValue::new_local(None::<ViewportWatch>);
        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            if guard.with_value(Option::is_some) || !loader.get_untracked().is_watching() {
                return;
            }
            let handle = watch(&element, LAZY_IMAGE, move |entries| {
                let done = loader.try_update(|l| l.observe(entries)).unwrap_or(true);
                if done { WatchControl::Release } else { WatchControl::Continue }
            });
            match handle {
                Some(handle) => guard.set_value(Some(handle)),
                None => loader.update(LazyLoader::observer_unavailable),
            }
        });
        on_cleanup(move || {
            guard.try_update_value(|w| {
                w.take();
            });
        });
    }
    on_cleanup(move || {
        loader.try_update(LazyLoader::release);
    });

    let wrapper = wrapper_classes(wrapper_class.as_deref());
    let layout = box_style(width, height);
    let image_style = merge_style(style.as_deref(), motion.as_ref());
    let has_motion = motion.is_some();

    let on_load = move |_| loader.update(LazyLoader::mark_loaded);
    let on_error = move |_| {
        loader.update(LazyLoader::mark_failed);
        #[cfg(feature = "hydrate")]
        request.with_value(|r| log::warn!("lazy image failed to load: {}", r.src));
    };

    view! {
        <div
            node_ref=container
            class=wrapper
            style=layout
            data-load-state=move || loader.get().state().as_str()
        >
            <Show when=move || loader.get().shows_placeholder()>
                <div class=PLACEHOLDER_CLASS aria-hidden="true"></div>
            </Show>
            <img
                class=move || {
                    image_classes(
                        class.as_deref(),
                        loaded_class.as_deref(),
                        pending_class.as_deref(),
                        has_motion,
                        loader.get().state(),
                    )
                }
                alt=request.with_value(|r| r.alt.clone())
                src=move || request.with_value(|r| loader.get().src(r).map(str::to_owned))
                srcset=move || request.with_value(|r| loader.get().srcset(r).map(str::to_owned))
                sizes=request.with_value(|r| r.sizes.clone())
                width=width.map(|w| w.to_string())
                height=height.map(|h| h.to_string())
                loading=loading.unwrap_or_else(|| "lazy".to_owned())
                decoding=decoding.unwrap_or_else(|| "async".to_owned())
                style=image_style
                on:load=on_load
                on:error=on_error
            />
        </div>
    }
}

fn wrapper_classes(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("{WRAPPER_CLASS} {extra}"),
        None => WRAPPER_CLASS.to_owned(),
    }
}

/// Reserve the layout box up front when both dimensions are known.
fn box_style(width: Option<u32>, height: Option<u32>) -> Option<String> {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some(format!("aspect-ratio: {w} / {h}; max-width: {w}px")),
        (Some(w), _) if w > 0 => Some(format!("max-width: {w}px")),
        _ => None,
    }
}

fn image_classes(
    base: Option<&str>,
    loaded: Option<&str>,
    pending: Option<&str>,
    motion: bool,
    state: LoadState,
) -> String {
    let phase = if state == LoadState::Loaded {
        loaded.unwrap_or(DEFAULT_LOADED_CLASS)
    } else {
        pending.unwrap_or(DEFAULT_PENDING_CLASS)
    };
    let mut classes = vec![IMAGE_CLASS];
    classes.extend(base.map(str::trim).filter(|c| !c.is_empty()));
    if motion {
        classes.push(MOTION_CLASS);
    }
    classes.extend(Some(phase.trim()).filter(|c| !c.is_empty()));
    classes.join(" ")
}
