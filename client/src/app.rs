//! Root application component and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::landing::LandingPage;
use crate::state::catalog::{HERO_BACKGROUND, webp_path};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="uz">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tandir.css"/>
        <Title text="Zamonaviy tandirlar - Xorazm ustalaridan"/>
        <Meta
            name="description"
            content="Mozaikali va oddiy tandirlar. 1000°C da pishirilgan, 10 yillik kafolat, butun O'zbekiston bo'ylab yetkazib berish."
        />
        <Link rel="icon" href="/images/logo.png"/>
        <Link rel="preload" href=webp_path(HERO_BACKGROUND) as_="image"/>

        <Router>
            <Routes fallback=|| "Sahifa topilmadi.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
