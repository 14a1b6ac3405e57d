//! Manufacturing process section with the furnace heat counter.
//!
//! The counter starts when the section is revealed and climbs to 1000°C in
//! fixed ticks. The ramp task stops on its own once the signal is disposed.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal_section::RevealSection;
use crate::state::catalog::PROCESS_FACTS;
use crate::state::heat::HeatRamp;
use crate::util::viewport::SECTION_PROCESS;

const STEPS: &[(&str, &str)] = &[
    ("Loy tayyorlash", "Maxsus tanlangan loy elakdan o'tkaziladi va jun bilan aralashtiriladi"),
    ("Shakl berish", "Usta tandirni qo'lda, qatlamma-qatlam ko'taradi"),
    ("Quritish", "Tandir soyada bir necha kun davomida bir tekis quritiladi"),
    ("Pishirish", "Zamonaviy pechda 1000°C haroratda 24 soat pishiriladi"),
];

#[component]
pub fn Process() -> impl IntoView {
    let heat = RwSignal::new(HeatRamp::default());

    let start_ramp = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let tick = std::time::Duration::from_millis(crate::state::heat::HEAT_TICK_MS);
            loop {
                gloo_timers::future::sleep(tick).await;
                match heat.try_update(|h| {
                    h.step();
                    h.is_done()
                }) {
                    Some(false) => {}
                    Some(true) | None => break,
                }
            }
        });
    });

    view! {
        <RevealSection id="process" class="process" options=SECTION_PROCESS on_reveal=start_ramp>
            <div class="process__inner container">
                <div class="process__furnace">
                    <LazyImage
                        src="/images/furnace.jpg"
                        alt="Tandir pishirish pechi"
                        wrapper_class="process__media"
                        width=600
                        height=450
                    />
                    <div class="heat-gauge" aria-label="Pech harorati">
                        <span class="heat-gauge__value">{move || heat.get().level()} "°C"</span>
                        <div class="heat-gauge__track">
                            <div
                                class="heat-gauge__fill"
                                style=move || format!("width: {:.0}%", heat.get().percent())
                            ></div>
                        </div>
                    </div>
                </div>
                <div class="process__copy">
                    <h2>"1000°C texnologiya"</h2>
                    <ol class="process__steps">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| {
                                view! {
                                    <li class="process__step" style=format!("--stagger: {i}")>
                                        <span class="process__step-num">{i + 1}</span>
                                        <div>
                                            <h3>{*title}</h3>
                                            <p>{*text}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <dl class="process__facts">
                        {PROCESS_FACTS
                            .iter()
                            .map(|fact| view! {
                                <div>
                                    <dt>{fact.label}</dt>
                                    <dd>{fact.value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </RevealSection>
    }
}
