//! Viewport helpers: breakpoints, debounce, scroll position, smooth scrolling
//!
//! Pure calculations are kept separate from the `web_sys` calls so they can be
//! tested natively.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

pub const MOBILE_MAX_WIDTH: f64 = 576.0;
pub const TABLET_MAX_WIDTH: f64 = 992.0;

/// Header gets the `scrolled` class below this offset
pub const HEADER_SCROLLED_OFFSET: f64 = 100.0;
/// Back-to-top button appears below this offset
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// Section counts as active this many pixels before its top edge
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
/// Extra gap between the sticky header and a scrolled-to section
pub const SCROLL_GAP: f64 = 20.0;

/// Page size of the review feed for a viewport width
pub fn page_size_for_width(width: f64) -> usize {
    if width <= MOBILE_MAX_WIDTH {
        3
    } else if width <= TABLET_MAX_WIDTH {
        4
    } else {
        6
    }
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_OFFSET
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Положение секции страницы для подсветки пункта меню
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Секция, внутри которой сейчас находится прокрутка.
/// При пересечении побеждает последняя в порядке документа.
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - SECTION_ACTIVATION_OFFSET;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll target for a section below a sticky header
pub fn scroll_target(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height - SCROLL_GAP
}

// ============================================================================
// Browser access
// ============================================================================

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(TABLET_MAX_WIDTH + 1.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Smooth scroll of the window to an absolute offset
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth scroll to a section, leaving room for the sticky header.
/// Returns false if the section does not exist.
pub fn scroll_to_section(section_id: &str) -> bool {
    let Some(target) = html_element_by_id(section_id) else {
        return false;
    };
    let header_height = html_element_by_id("header")
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or(0.0);
    smooth_scroll_to(scroll_target(f64::from(target.offset_top()), header_height));
    true
}

/// Snapshot of the `section[id]` boxes in document order
pub fn measure_sections() -> Vec<SectionBox> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBox {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

// ============================================================================
// Debounce
// ============================================================================

/// Откладывает вызов до паузы в событиях; новый вызов отменяет предыдущий таймер
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, f);
        // drop of the previous Timeout cancels it
        self.pending.borrow_mut().replace(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBox {
        SectionBox {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn test_page_size_breakpoints() {
        assert_eq!(page_size_for_width(375.0), 3);
        assert_eq!(page_size_for_width(576.0), 3);
        assert_eq!(page_size_for_width(577.0), 4);
        assert_eq!(page_size_for_width(992.0), 4);
        assert_eq!(page_size_for_width(993.0), 6);
        assert_eq!(page_size_for_width(1920.0), 6);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(101.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            section("home", 0.0, 600.0),
            section("services", 600.0, 800.0),
            section("reviews", 1400.0, 500.0),
        ];

        // граница: начало исключается, конец включается
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("home"));
        assert_eq!(active_section(501.0, &sections), Some("services"));
        assert_eq!(active_section(1350.0, &sections), Some("reviews"));
        assert_eq!(active_section(5000.0, &sections), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(1200.0, 80.0), 1100.0);
    }
}
