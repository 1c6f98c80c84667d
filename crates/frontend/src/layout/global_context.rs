use crate::domain::a002_product::quote_store;
use crate::shared::viewport::{self, active_section, measure_sections};
use contracts::domain::a002_product::{Product, QuoteList};
use contracts::domain::a003_contact::ContactSubject;
use leptos::ev;
use leptos::prelude::*;

/// Данные для подстановки в форму обратной связи
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPrefill {
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactPrefill {
    pub fn for_product(product: &Product) -> Self {
        Self {
            subject: ContactSubject::Product,
            message: product.inquiry_message(),
        }
    }
}

/// Общее состояние страницы, доступно через context
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub menu_open: RwSignal<bool>,
    pub scroll_y: RwSignal<f64>,
    /// id секции под текущей прокруткой
    pub active_section: RwSignal<Option<String>>,
    pub contact_prefill: RwSignal<Option<ContactPrefill>>,
    pub quotes: RwSignal<QuoteList>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            scroll_y: RwSignal::new(0.0),
            active_section: RwSignal::new(None),
            contact_prefill: RwSignal::new(None),
            quotes: RwSignal::new(quote_store::load()),
        }
    }

    pub fn toggle_menu(&self) {
        let open = !self.menu_open.get_untracked();
        self.menu_open.set(open);
        lock_body_scroll(open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
            lock_body_scroll(false);
        }
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.with(|q| q.count())
    }

    /// Добавить изделие в список для расчёта и сохранить список
    pub fn add_to_quote(&self, product: &Product) {
        self.quotes.update(|list| {
            list.add(product, chrono::Utc::now());
            quote_store::save(list);
        });
    }

    /// Следить за прокруткой: шапка, кнопка "наверх", подсветка меню
    pub fn init_scroll_tracking(&self) {
        let this = *self;
        let update = move || {
            let y = viewport::scroll_y();
            this.scroll_y.set(y);
            let sections = measure_sections();
            if let Some(id) = active_section(y, &sections) {
                if this.active_section.with_untracked(|a| a.as_deref() != Some(id)) {
                    this.active_section.set(Some(id.to_string()));
                }
            }
        };
        update();
        let handle = window_event_listener(ev::scroll, move |_| update());
        on_cleanup(move || handle.remove());
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not provided in context")
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        log::warn!("failed to toggle body scroll lock: {:?}", e);
    }
}
