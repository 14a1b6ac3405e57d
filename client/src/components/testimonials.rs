//! Customer reviews.

use leptos::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::state::catalog::TESTIMONIALS;
use crate::util::viewport::SECTION_EARLY;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <RevealSection id="testimonials" class="testimonials" options=SECTION_EARLY>
            <div class="container">
                <header class="section-heading">
                    <h2>"Mijozlarimiz fikri"</h2>
                </header>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, review)| {
                            let stars = "★".repeat(usize::from(review.rating));
                            view! {
                                <figure class="testimonial" style=format!("--stagger: {i}")>
                                    <div class="testimonial__stars" aria-label=format!("{} / 5", review.rating)>
                                        {stars}
                                    </div>
                                    <blockquote>{review.text}</blockquote>
                                    <figcaption class="testimonial__author">
                                        <span class="testimonial__avatar" aria-hidden="true">{review.initial()}</span>
                                        <span>
                                            <strong>{review.name}</strong>
                                            <small>{review.location}</small>
                                        </span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
