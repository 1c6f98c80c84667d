pub mod api;
pub mod cache;
pub mod controller;
pub mod state;
pub mod ui;

use self::api::HttpReviewApi;
use self::cache::LocalStorageReviewCache;
use self::controller::ReviewFeedController;
use self::ui::sink::SignalFeedView;

/// Контроллер, собранный в `App` из браузерных реализаций
pub type SiteFeedController =
    ReviewFeedController<HttpReviewApi, LocalStorageReviewCache, SignalFeedView>;
