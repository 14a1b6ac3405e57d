//! Address, phones, opening hours and map, plus the general order button.

use leptos::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::state::catalog::{ADDRESS_LINES, MAP_EMBED_URL, PHONES};
use crate::state::ui::UiState;
use crate::util::viewport::SECTION_EARLY;

#[component]
pub fn Contact() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <RevealSection id="order" class="contact" options=SECTION_EARLY>
            <div class="contact__inner container">
                <div class="contact__info">
                    <h2>"Biz bilan bog'laning"</h2>
                    <address class="contact__address">
                        {ADDRESS_LINES.iter().map(|line| view! { <span>{*line}</span> }).collect_view()}
                    </address>
                    <ul class="contact__phones">
                        {PHONES
                            .iter()
                            .map(|phone| view! { <li><a href=phone.tel>{phone.display}</a></li> })
                            .collect_view()}
                    </ul>
                    <p class="contact__hours">"Har kuni 08:00 - 20:00"</p>
                    <button
                        class="btn btn--primary contact__order"
                        type="button"
                        on:click=move |_| ui.update(|u| u.open_order(None))
                    >
                        "Buyurtma berish"
                    </button>
                </div>
                <div class="contact__map">
                    <iframe
                        src=MAP_EMBED_URL
                        title="Manzil xaritada"
                        {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
        </RevealSection>
    }
}
