//! Fixed site header with anchor navigation and a mobile menu.

use leptos::prelude::*;

use crate::state::catalog::{BRAND_NAME, HEADER_LINKS, LOGO_PATH, PHONES};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let sync = move || {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                scrolled.set(crate::state::ui::is_scrolled(y));
            }
        };
        Effect::new(move || sync());
        let handle = window_event_listener(leptos::ev::scroll, move |_| sync());
        on_cleanup(move || handle.remove());
    }

    let close_menu = move |_| ui.update(|u| u.menu_open = false);
    let primary_phone = PHONES.first().copied();

    view! {
        <header class=move || if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" }>
            <div class="site-header__inner container">
                <a class="site-header__brand" href="#hero">
                    <img src=LOGO_PATH alt="" width="40" height="40"/>
                    <span>{BRAND_NAME}</span>
                </a>
                <nav class="site-header__nav" aria-label="Asosiy menyu">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
                {primary_phone.map(|phone| view! {
                    <a class="site-header__phone" href=phone.tel>{phone.display}</a>
                })}
                <button
                    class="site-header__burger"
                    type="button"
                    aria-label="Menyu"
                    aria-expanded=move || if ui.with(|u| u.menu_open) { "true" } else { "false" }
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.with(|u| u.menu_open)>
                <nav class="site-header__mobile" aria-label="Mobil menyu">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href on:click=close_menu>{link.label}</a> })
                        .collect_view()}
                    <button
                        class="btn btn--primary"
                        type="button"
                        on:click=move |_| ui.update(|u| u.open_order(None))
                    >
                        "Buyurtma berish"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
