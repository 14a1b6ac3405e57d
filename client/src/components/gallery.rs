//! Photo gallery with a keyboard-navigable lightbox.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal_section::RevealSection;
use crate::state::catalog::gallery_images;
use crate::state::ui::Lightbox;
use crate::util::motion::MotionProps;
use crate::util::viewport::SECTION_WIDE;

#[component]
pub fn Gallery() -> impl IntoView {
    let images = StoredValue::new(gallery_images());
    let lightbox = RwSignal::new(Lightbox::new(images.with_value(Vec::len)));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if lightbox.get_untracked().current().is_none() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => lightbox.update(Lightbox::close),
                "ArrowRight" => lightbox.update(Lightbox::next),
                "ArrowLeft" => lightbox.update(Lightbox::prev),
                _ => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    let current_src = move || {
        lightbox
            .get()
            .current()
            .and_then(|i| images.with_value(|imgs| imgs.get(i).cloned()))
            .unwrap_or_default()
    };

    view! {
        <RevealSection id="gallery" class="gallery" options=SECTION_WIDE>
            <div class="container">
                <header class="section-heading">
                    <h2>"Galereya"</h2>
                    <p>"Mijozlarimiz hovlisidagi tandirlar"</p>
                </header>
                <div class="gallery__grid">
                    {images
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <button
                                    class="gallery__item"
                                    type="button"
                                    aria-label=format!("Rasm {}", i + 1)
                                    on:click=move |_| lightbox.update(|lb| lb.open(i))
                                >
                                    <LazyImage
                                        src=src
                                        alt=format!("Tandir galereyasi {}", i + 1)
                                        width=400
                                        height=400
                                        motion=MotionProps::hover_scale(1.05)
                                    />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || lightbox.get().current().is_some()>
                <div class="lightbox" role="dialog" aria-modal="true" on:click=move |_| lightbox.update(Lightbox::close)>
                    <button
                        class="lightbox__nav lightbox__nav--prev"
                        type="button"
                        aria-label="Oldingi"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            lightbox.update(Lightbox::prev);
                        }
                    >
                        "‹"
                    </button>
                    <img class="lightbox__img" src=current_src alt="" on:click=move |ev| ev.stop_propagation()/>
                    <button
                        class="lightbox__nav lightbox__nav--next"
                        type="button"
                        aria-label="Keyingi"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            lightbox.update(Lightbox::next);
                        }
                    >
                        "›"
                    </button>
                    <button class="lightbox__close" type="button" aria-label="Yopish" on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.update(Lightbox::close);
                    }>
                        "✕"
                    </button>
                </div>
            </Show>
        </RevealSection>
    }
}
