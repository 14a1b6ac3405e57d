//! Accessory kit shipped with every tandir.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal_section::RevealSection;
use crate::state::catalog::ACCESSORIES;
use crate::util::motion::MotionProps;
use crate::util::viewport::SECTION_WIDE;

#[component]
pub fn Accessories() -> impl IntoView {
    view! {
        <RevealSection id="komplektatsiya" class="accessories" options=SECTION_WIDE>
            <div class="container">
                <header class="section-heading">
                    <h2>"Komplektatsiya"</h2>
                    <p>"Har bir tandir bilan birga beriladi"</p>
                </header>
                <ul class="accessories__grid">
                    {ACCESSORIES
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <li class="accessory" style=format!("--stagger: {i}")>
                                    <LazyImage
                                        src=item.image
                                        alt=item.name
                                        wrapper_class="accessory__icon"
                                        width=96
                                        height=96
                                        motion=MotionProps::hover_scale(1.1).with_duration_ms(300)
                                    />
                                    <span class="accessory__name">{item.name}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </RevealSection>
    }
}
