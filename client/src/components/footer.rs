//! Site footer and the floating call button.

use leptos::prelude::*;

use crate::components::reveal_section::RevealSection;
use crate::state::catalog::{BRAND_NAME, FOOTER_LINKS, LOGO_PATH, PHONES, SOCIAL_LINKS};
use crate::util::viewport::SECTION_EARLY;

#[component]
pub fn Footer() -> impl IntoView {
    let primary_phone = PHONES.first().copied();

    view! {
        <RevealSection id="footer" class="site-footer" options=SECTION_EARLY>
            <div class="site-footer__inner container">
                <div class="site-footer__brand">
                    <img src=LOGO_PATH alt="" width="48" height="48" loading="lazy"/>
                    <strong>{BRAND_NAME}</strong>
                    <p>"Sifatli tandirlar - oilangiz dasturxoni uchun"</p>
                </div>
                <nav class="site-footer__links" aria-label="Tezkor havolalar">
                    <h3>"Havolalar"</h3>
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
                <div class="site-footer__social">
                    <h3>"Ijtimoiy tarmoqlar"</h3>
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer">{link.label}</a>
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="site-footer__copy">"© Zamonaviy tandirlar. Barcha huquqlar himoyalangan."</p>
        </RevealSection>
        {primary_phone.map(|phone| view! {
            <a class="call-fab" href=phone.tel aria-label="Qo'ng'iroq qilish">"📞"</a>
        })}
    }
}
