//! Tandir catalog: premium mosaic line and the classic line.

use leptos::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::components::reveal_section::RevealSection;
use crate::state::catalog::{PRODUCT_IMAGE_SIZES, PRODUCTS, Product, ProductLine};
use crate::state::ui::UiState;
use crate::util::motion::MotionProps;
use crate::util::viewport::SECTION_DEFAULT;

#[component]
pub fn Catalog() -> impl IntoView {
    view! {
        <RevealSection id="tandirs" class="catalog" options=SECTION_DEFAULT>
            <div class="container">
                <header class="section-heading">
                    <h2>"Bizning tandirlar"</h2>
                    <p>"Har bir tandir qo'lda yasaladi va 1000°C da pishiriladi"</p>
                </header>
                <ProductGrid line=ProductLine::Premium title="Mozaikali tandirlar"/>
                <ProductGrid line=ProductLine::Classic title="Oddiy tandirlar"/>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProductGrid(line: ProductLine, title: &'static str) -> impl IntoView {
    view! {
        <h3 class="catalog__line-title">{title}</h3>
        <div class="catalog__grid">
            {PRODUCTS
                .iter()
                .filter(|p| p.line == line)
                .enumerate()
                .map(|(i, product)| view! { <ProductCard product=*product index=i/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: Product, index: usize) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let label = product.order_label();
    let on_order = move |_| {
        let label = label.clone();
        ui.update(|u| u.open_order(Some(label)));
    };
    let sizes = product.srcset().map(|_| PRODUCT_IMAGE_SIZES);
    let card_class = if product.featured { "product-card product-card--featured" } else { "product-card" };

    view! {
        <article class=card_class style=format!("--stagger: {index}")>
            {product.featured.then(|| view! { <span class="product-card__badge">"Eng ko'p sotilgan"</span> })}
            <LazyImage
                src=product.image
                alt=product.alt_text()
                wrapper_class="product-card__media"
                width=320
                height=320
                srcset=product.srcset()
                sizes=sizes.map(str::to_owned)
                motion=MotionProps::hover_scale(1.08)
            />
            <div class="product-card__body">
                <h4 class="product-card__size">{product.size}</h4>
                <p class="product-card__price">{product.price} " so'm"</p>
                <button class="btn btn--primary product-card__order" type="button" on:click=on_order>
                    "Buyurtma berish"
                </button>
            </div>
        </article>
    }
}
