use crate::shared::storage;
use contracts::domain::a001_review::Review;

/// Локальная копия последней успешно загруженной ленты.
/// Читается только когда API списка недоступен.
pub trait ReviewCache {
    fn load(&self) -> Option<Vec<Review>>;
    fn store(&self, reviews: &[Review]);
}

/// Кэш в localStorage браузера
#[derive(Debug, Clone)]
pub struct LocalStorageReviewCache {
    key: String,
}

impl LocalStorageReviewCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ReviewCache for LocalStorageReviewCache {
    fn load(&self) -> Option<Vec<Review>> {
        storage::load_json::<Vec<Review>>(&self.key)
    }

    fn store(&self, reviews: &[Review]) {
        storage::save_json(&self.key, &reviews);
    }
}
