use crate::domain::a001_review::api::HttpReviewApi;
use crate::domain::a001_review::cache::LocalStorageReviewCache;
use crate::domain::a001_review::ui::{FeedSignals, ReviewsSection, SignalFeedView};
use crate::domain::a001_review::SiteFeedController;
use crate::domain::a002_product::ui::ProductsSection;
use crate::domain::a003_contact::ui::ContactSection;
use crate::layout::global_context::SiteContext;
use crate::layout::sections::{FaqSection, HeroSection, ServicesSection};
use crate::layout::Shell;
use crate::shared::config::site_config;
use crate::shared::notifications::NotificationService;
use crate::shared::viewport::{page_size_for_width, window_width};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let notifications = NotificationService::new();
    provide_context(notifications);
    provide_context(SiteContext::new());

    // Лента отзывов: один контроллер на страницу
    let signals = FeedSignals::new();
    let controller = SiteFeedController::new(
        Rc::new(HttpReviewApi),
        Rc::new(LocalStorageReviewCache::new(site_config().reviews.cache_key.clone())),
        Rc::new(SignalFeedView::new(signals, notifications)),
        page_size_for_width(window_width()),
    );
    let controller = StoredValue::new_local(controller);

    view! {
        <Shell>
            <HeroSection />
            <ServicesSection />
            <ProductsSection />
            <ReviewsSection controller=controller signals=signals />
            <FaqSection />
            <ContactSection />
        </Shell>
    }
}
