//! Above-the-fold hero.
//!
//! The background is fetched eagerly at high priority since it is always
//! visible on first paint; the product shot goes through `LazyImage` with a
//! hover tilt.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::state::catalog::{HERO_BACKGROUND, webp_path};
use crate::state::ui::UiState;
use crate::util::motion::MotionProps;

const HERO_PRODUCT: &str = "/images/tandir-mosaic-70.png";

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id="hero" class="hero">
            <picture>
                <source srcset=webp_path(HERO_BACKGROUND) type="image/webp"/>
                <img
                    class="hero__bg"
                    src=HERO_BACKGROUND
                    alt=""
                    width="1920"
                    height="1080"
                    loading="eager"
                    fetchpriority="high"
                    decoding="async"
                />
            </picture>
            <div class="hero__overlay"></div>
            <div class="hero__inner container">
                <div class="hero__copy">
                    <span class="hero__eyebrow">"Xorazm ustalaridan"</span>
                    <h1 class="hero__title">"Zamonaviy tandirlar"</h1>
                    <p class="hero__lead">
                        "1000°C da pishirilgan, uzoq yillar xizmat qiladigan ko'chma tandirlar. "
                        "Butun O'zbekiston bo'ylab yetkazib beramiz."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" type="button" on:click=move |_| ui.update(|u| u.open_order(None))>
                            "Buyurtma berish"
                        </button>
                        <a class="btn btn--ghost" href="#tandirs">"Tandirlarni ko'rish"</a>
                    </div>
                </div>
                <LazyImage
                    src=HERO_PRODUCT
                    alt="Mozaikali tandir 70 sm"
                    wrapper_class="hero__product"
                    width=560
                    height=560
                    motion=MotionProps::hover_scale(1.05).with_rotate_y(5.0)
                />
            </div>
        </section>
    }
}
