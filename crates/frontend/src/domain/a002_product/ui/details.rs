use super::card::fallback_image;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

const KEY_FEATURES: [&str; 5] = [
    "Premium quality wood",
    "Expert craftsmanship",
    "Customizable design",
    "Long-lasting durability",
    "Professional installation",
];

/// Карточка изделия в модальном окне
#[component]
pub fn ProductDetails(
    product: Product,
    on_quote: Callback<Product>,
    on_add: Callback<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let quote = {
        let product = product.clone();
        move |_| on_quote.run(product.clone())
    };
    let add = {
        let product = product.clone();
        move |_| on_add.run(product.clone())
    };

    view! {
        <ModalFrame title={product.name.clone()} on_close=on_close modal_class={"product-modal".to_string()}>
            <div class="product-detail-grid">
                <div class="product-detail-image">
                    <img src=product.image.clone() alt=product.name.clone() on:error=fallback_image />
                </div>
                <div class="product-detail-info">
                    <div class="product-category-badge">{product.category.display_name()}</div>
                    <p class="product-description-full">{product.description.clone()}</p>

                    <div class="product-features">
                        <h4>{icon("star")} " Key Features"</h4>
                        <ul>
                            {KEY_FEATURES
                                .iter()
                                .map(|feature| view! { <li>{icon("check")} " " {*feature}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="product-actions-large">
                        <button class="btn btn-primary" on:click=quote>
                            {icon("mail")}
                            " Get Quote"
                        </button>
                        <button class="btn btn-outline" on:click=add>
                            {icon("plus")}
                            " Add to Quote List"
                        </button>
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
