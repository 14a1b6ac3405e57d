//! Benefit cards and headline stats.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal_section::RevealSection;
use crate::state::catalog::{BENEFITS, STATS};
use crate::util::viewport::SECTION_DEFAULT;

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <RevealSection id="benefits" class="benefits" options=SECTION_DEFAULT>
            <div class="container">
                <header class="section-heading">
                    <h2>"Nega aynan bizning tandirlar?"</h2>
                </header>
                <div class="benefits__grid">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(i, benefit)| {
                            view! {
                                <article class="benefit" style=format!("--stagger: {i}")>
                                    <LazyImage
                                        src=benefit.image
                                        alt=benefit.title
                                        wrapper_class="benefit__icon"
                                        width=72
                                        height=72
                                    />
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
                <dl class="stats">
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <div class="stats__item">
                                <dt class="stats__value">{stat.value}</dt>
                                <dd class="stats__label">{stat.label}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </div>
        </RevealSection>
    }
}
