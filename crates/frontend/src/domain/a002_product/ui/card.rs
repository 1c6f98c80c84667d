use contracts::domain::a002_product::Product;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const PLACEHOLDER_IMAGE: &str = "image/placeholder.jpg";

/// Подменить битую картинку заглушкой (один раз, без зацикливания)
pub fn fallback_image(ev: ev::ErrorEvent) {
    let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if !img.src().ends_with(PLACEHOLDER_IMAGE) {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

#[component]
pub fn ProductCard(product: Product, on_open: Callback<Product>) -> impl IntoView {
    let name = product.name.clone();
    let open = {
        let product = product.clone();
        move |_| on_open.run(product.clone())
    };

    view! {
        <div class="product-card fade-in" data-category=product.category.code() on:click=open>
            <div class="product-image">
                <img src=product.image.clone() alt=name loading="lazy" on:error=fallback_image />
            </div>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="product-description">{product.description.clone()}</p>
            </div>
        </div>
    }
}
