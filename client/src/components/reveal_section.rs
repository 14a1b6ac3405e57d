//! `<section>` that reveals itself once it scrolls into view.
//!
//! Animations are plain CSS keyed on the `is-revealed` class; this component
//! only decides when to add it. Uses the same one-shot viewport watch as
//! `LazyImage`, so a section never un-reveals and never leaks its observer.

use leptos::prelude::*;

use crate::util::viewport::ObserverOptions;

pub const REVEALED_CLASS: &str = "is-revealed";

/// Section wrapper with a one-shot reveal.
///
/// `on_reveal` runs at most once, on the first intersecting batch.
#[component]
pub fn RevealSection(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: Option<String>,
    options: ObserverOptions,
    #[prop(optional)] on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let section = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::{ViewportWatch, WatchControl, any_intersecting, watch};

        let guard = StoredValue::new_local(None::<ViewportWatch>);
        Effect::new(move || {
            let Some(element) = section.get() else {
                return;
            };
            if guard.with_value(Option::is_some) || revealed.get_untracked() {
                return;
            }
            let handle = watch(&element, options, move |entries| {
                if !any_intersecting(entries) {
                    return WatchControl::Continue;
                }
                if revealed.try_set(true).is_none()
                    && let Some(callback) = on_reveal
                {
                    callback.run(());
                }
                WatchControl::Release
            });
            match handle {
                Some(handle) => guard.set_value(Some(handle)),
                None => {
                    if revealed.try_set(true).is_none()
                        && let Some(callback) = on_reveal
                    {
                        callback.run(());
                    }
                }
            }
        });
        on_cleanup(move || {
            guard.try_update_value(|w| {
                w.take();
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (options, on_reveal);

    let base = match class {
        Some(extra) => format!("reveal {extra}"),
        None => "reveal".to_owned(),
    };

    view! {
        <section
            node_ref=section
            id=id
            class=move || if revealed.get() { format!("{base} {REVEALED_CLASS}") } else { base.clone() }
        >
            {children()}
        </section>
    }
}
