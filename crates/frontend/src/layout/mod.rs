pub mod footer;
pub mod global_context;
pub mod header;
pub mod sections;

use crate::shared::notifications::NotificationHost;
use footer::Footer;
use global_context::use_site;
use header::Header;
use leptos::prelude::*;
use sections::BackToTop;

/// Каркас страницы:
/// ```text
/// +------------------------------------------+
/// |          Header (sticky, nav)            |
/// +------------------------------------------+
/// |          sections (children)             |
/// +------------------------------------------+
/// |          Footer                          |
/// +------------------------------------------+
/// ```
/// Поверх всего: кнопка "наверх" и уведомление.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let site = use_site();
    site.init_scroll_tracking();

    view! {
        <Header />
        <main class="main-content">{children()}</main>
        <Footer />
        <BackToTop />
        <NotificationHost />
    }
}
