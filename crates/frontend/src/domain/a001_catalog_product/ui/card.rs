use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use crate::shared::price_format::{format_price, format_rating};
use contracts::domain::a001_catalog_product::aggregate::Product;
use leptos::prelude::*;

/// Display-only card for one product. `index` drives the entrance stagger.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] index: usize) -> impl IntoView {
    let Product {
        title,
        image,
        description,
        price,
        category,
        rating,
        label,
        ..
    } = product;

    view! {
        <CardAnimated class="product-card" delay_ms=stagger_delay(index, 40)>
            <div class="product-card__image-wrapper">
                {label.map(|l| view! { <span class="product-card__label">{l}</span> })}
                <img class="product-card__image" src=image alt=title.clone() loading="lazy" />
            </div>
            <div class="product-card__body">
                <div class="product-card__category">{category}</div>
                <div class="product-card__title" title=description>{title}</div>
                <div class="product-card__footer">
                    <span class="product-card__price">{format_price(price)}</span>
                    <span class="product-card__rating">
                        {icon("star")}
                        {format_rating(&rating)}
                    </span>
                </div>
            </div>
        </CardAnimated>
    }
}
