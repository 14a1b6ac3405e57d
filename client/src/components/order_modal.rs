//! Lead form modal shared by the catalog cards and the contact section.
//!
//! Reads `RwSignal<UiState>` for the open target and `RwSignal<OrderForm>` for
//! the draft, both provided by the landing page. The draft outlives the modal
//! so a failed submission can be retried after closing and reopening.

use leptos::prelude::*;

use crate::state::order::OrderForm;
use crate::state::ui::UiState;

#[component]
pub fn OrderModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = expect_context::<RwSignal<OrderForm>>();

    let product_label = move || ui.with(|u| u.order.as_ref().and_then(|o| o.product_label.clone()));
    let submitting = move || form.with(OrderForm::is_submitting);

    let close = move || {
        if form.try_update(OrderForm::request_close).unwrap_or(true) {
            ui.try_update(UiState::close_order);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let label = product_label();
        let Some(request) = form.try_update(|f| f.begin_submit(label.as_deref())).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_lead(&request).await;
            if let Err(err) = &outcome {
                log::warn!("lead submission failed: {err:?}");
            }
            let succeeded = outcome.is_ok();
            if form.try_update(|f| f.finish(outcome)).is_none() || !succeeded {
                return;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::order::CLOSE_AFTER_SUCCESS_MS,
            )))
            .await;
            // Only auto-close if nothing happened in the meantime.
            let still_done = form.try_update(|f| f.success_message().is_some() && f.request_close());
            if still_done == Some(true) {
                ui.try_update(UiState::close_order);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="order-modal__backdrop" on:click=move |_| close()>
            <div
                class="order-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="order-modal-title"
                on:click=move |ev| ev.stop_propagation()
            >
                <button class="order-modal__close" type="button" aria-label="Yopish" on:click=move |_| close()>
                    "✕"
                </button>
                <h2 id="order-modal-title" class="order-modal__title">"Buyurtma berish"</h2>
                <Show when=move || product_label().is_some()>
                    <div class="order-modal__product">
                        <span class="order-modal__product-caption">"Tanlangan mahsulot"</span>
                        <strong>{move || product_label().unwrap_or_default()}</strong>
                    </div>
                </Show>
                <form class="order-form" on:submit=on_submit>
                    <label class="order-form__field">
                        <span>"Ism familiya"</span>
                        <input
                            type="text"
                            name="full_name"
                            autocomplete="name"
                            placeholder="Ismingizni kiriting"
                            prop:value=move || form.with(|f| f.draft.full_name.clone())
                            on:input=move |ev| form.update(|f| f.draft.full_name = event_target_value(&ev))
                        />
                    </label>
                    <label class="order-form__field">
                        <span>"Telefon raqam"</span>
                        <input
                            type="tel"
                            name="phone"
                            autocomplete="tel"
                            placeholder="+998 90 123 45 67"
                            prop:value=move || form.with(|f| f.draft.phone.clone())
                            on:input=move |ev| form.update(|f| f.draft.phone = event_target_value(&ev))
                        />
                    </label>
                    <label class="order-form__field">
                        <span>"Izoh (ixtiyoriy)"</span>
                        <textarea
                            name="note"
                            rows="3"
                            placeholder="Qo'shimcha ma'lumot"
                            prop:value=move || form.with(|f| f.draft.note.clone())
                            on:input=move |ev| form.update(|f| f.draft.note = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || form.with(|f| f.error_message().is_some())>
                        <p class="order-form__message order-form__message--error" role="alert">
                            {move || form.with(|f| f.error_message().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show when=move || form.with(|f| f.success_message().is_some())>
                        <p class="order-form__message order-form__message--success" role="status">
                            {move || form.with(|f| f.success_message().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="btn btn--primary order-form__submit" type="submit" disabled=submitting>
                        {move || if submitting() { "Yuborilmoqda..." } else { "Yuborish" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
