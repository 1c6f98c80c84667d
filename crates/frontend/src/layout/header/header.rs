use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use crate::shared::viewport::{header_is_scrolled, scroll_to_section};
use leptos::ev;
use leptos::prelude::*;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("products", "Products"),
    ("reviews", "Reviews"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// id секции из якоря; `#` без имени не ведёт никуда
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Счётчик списка расчёта скрыт, пока список пуст
fn quote_badge_display(count: usize) -> &'static str {
    if count > 0 {
        "inline"
    } else {
        "none"
    }
}

/// Плавный переход по якорю внутри страницы
pub fn follow_anchor(ev: &ev::MouseEvent, href: &str) {
    ev.prevent_default();
    if let Some(id) = anchor_target(href) {
        if !scroll_to_section(id) {
            log::debug!("anchor {} has no target section", href);
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();

    // клик мимо меню закрывает его; клики по самому меню и кнопке не всплывают
    let outside = window_event_listener(ev::click, move |_| site.close_menu());
    on_cleanup(move || outside.remove());

    let quote_count = move || site.quote_count();

    view! {
        <header id="header" class="header" class:scrolled=move || header_is_scrolled(site.scroll_y.get())>
            <nav class="navbar container">
                <a href="#home" class="logo" on:click=move |ev| follow_anchor(&ev, "#home")>
                    <span class="logo-text">"WoodCraft"</span>
                    <span class="logo-subtitle">"Carpentry Works"</span>
                </a>

                <ul
                    id="navMenu"
                    class="nav-menu"
                    class:active=move || site.menu_open.get()
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            let href = format!("#{id}");
                            let is_active = move || site.active_section.with(|a| a.as_deref() == Some(id));
                            view! {
                                <li>
                                    <a
                                        href=href.clone()
                                        class:active=is_active
                                        on:click=move |ev| {
                                            site.close_menu();
                                            follow_anchor(&ev, &href);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="nav-quote">
                        {icon("box")}
                        " Quote "
                        <span class="quote-count" style:display={move || quote_badge_display(quote_count())}>
                            {quote_count}
                        </span>
                    </li>
                </ul>

                <button
                    id="navToggle"
                    class="nav-toggle"
                    class:active=move || site.menu_open.get()
                    aria-label="Toggle navigation"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.stop_propagation();
                        site.toggle_menu();
                    }
                >
                    {icon("menu")}
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#reviews"), Some("reviews"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn test_quote_badge_hidden_when_empty() {
        assert_eq!(quote_badge_display(0), "none");
        assert_eq!(quote_badge_display(2), "inline");
    }
}
