use super::card::ProductCard;
use super::details::ProductDetails;
use crate::layout::global_context::{use_site, ContactPrefill};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifier};
use crate::shared::viewport::scroll_to_section;
use contracts::domain::a002_product::catalog::{all_products, featured_products, filter_products};
use contracts::domain::a002_product::{Product, ProductCategory};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Прокрутить к секции после того, как Leptos её отрисует
fn scroll_after_render(section_id: &'static str) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        if !scroll_to_section(section_id) {
            log::warn!("section #{} not found", section_id);
        }
    });
}

/// Избранные изделия, полный каталог с поиском и модальная карточка изделия
#[component]
pub fn ProductsSection() -> impl IntoView {
    let site = use_site();
    let notifications = use_notifications();

    let selected = RwSignal::new(None::<Product>);
    let all_shown = RwSignal::new(false);
    let category = RwSignal::new("all".to_string());
    let query = RwSignal::new(String::new());

    let visible = move || {
        let category = ProductCategory::from_code(&category.get());
        query.with(|q| filter_products(category, q))
    };

    let on_open = Callback::new(move |product: Product| selected.set(Some(product)));
    let on_close = Callback::new(move |_: ()| selected.set(None));

    let on_quote = Callback::new(move |product: Product| {
        selected.set(None);
        site.contact_prefill
            .set(Some(ContactPrefill::for_product(&product)));
        scroll_after_render("contact");
        notifications.info(&format!("Contact form updated for {}", product.name));
    });

    let on_add = Callback::new(move |product: Product| {
        site.add_to_quote(&product);
        notifications.success(&format!("{} added to quote list!", product.name));
    });

    let view_all = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        all_shown.set(true);
        notifications.success(&format!(
            "All {} products loaded successfully!",
            all_products().len()
        ));
        scroll_after_render("all-products");
    };

    let category_options = std::iter::once(("all", "All Products"))
        .chain(ProductCategory::all().into_iter().map(|c| (c.code(), c.display_name())))
        .collect::<Vec<_>>();

    view! {
        <section id="products" class="products">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Featured Products"</h2>
                    <p class="section-subtitle">"Handcrafted furniture built to last for generations"</p>
                </div>
                <div class="products-grid" id="featuredProducts">
                    {featured_products()
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product on_open=on_open /> })
                        .collect_view()}
                </div>
                <div class="products-cta">
                    <a href="#all-products" class="btn btn-primary" on:click=view_all>
                        {icon("box")}
                        " View All Products"
                    </a>
                </div>
            </div>
        </section>

        <Show when=move || all_shown.get()>
            <section id="all-products" class="all-products">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"All Products"</h2>
                    </div>
                    <div class="products-toolbar">
                        <input
                            type="search"
                            class="products-search"
                            placeholder="Search products..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <select
                            class="products-category"
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {category_options
                                .iter()
                                .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="products-grid" id="allProductsGrid">
                        <For
                            each=visible
                            key=|product| product.id
                            children={move |product| view! { <ProductCard product=product on_open=on_open /> }}
                        />
                    </div>
                    <Show when=move || visible().is_empty()>
                        <p class="products-empty">"No products match your search."</p>
                    </Show>
                </div>
            </section>
        </Show>

        {move || selected.get().map(|product| view! {
            <ProductDetails product=product on_quote=on_quote on_add=on_add on_close=on_close />
        })}
    }
}
