use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use crate::shared::viewport::{back_to_top_visible, smooth_scroll_to};
use leptos::prelude::*;

#[component]
pub fn BackToTop() -> impl IntoView {
    let site = use_site();
    let visible = move || back_to_top_visible(site.scroll_y.get());

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class:show=visible
            style:display={move || if visible() { "block" } else { "none" }}
            aria-label="Back to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            {icon("arrow-up")}
        </button>
    }
}
