//! The single storefront page.
//!
//! Owns the page-scoped contexts (`UiState`, `OrderForm`) so any section can
//! open the shared order modal, and mounts the modal only while a target is
//! set.

use leptos::prelude::*;

use crate::components::accessories::Accessories;
use crate::components::benefits::Benefits;
use crate::components::catalog::Catalog;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::order_modal::OrderModal;
use crate::components::process::Process;
use crate::components::testimonials::Testimonials;
use crate::state::order::OrderForm;
use crate::state::ui::UiState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let form = RwSignal::new(OrderForm::default());
    provide_context(ui);
    provide_context(form);

    view! {
        <Header/>
        <main>
            <Hero/>
            <Catalog/>
            <Process/>
            <Accessories/>
            <Benefits/>
            <Gallery/>
            <Testimonials/>
            <Contact/>
        </main>
        <Footer/>
        <Show when=move || ui.with(|u| u.order.is_some())>
            <OrderModal/>
        </Show>
    }
}
