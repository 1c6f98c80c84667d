//! Состояние ленты отзывов: пагинация, фильтр, флаг загрузки, отметки "полезно".
//!
//! Только переходы состояния, без сети и DOM. Асинхронную часть ведёт
//! `ReviewFeedController`, который вызывает `begin_*` до запроса и
//! `complete_*` после ответа.

use super::api::ReviewPage;
use contracts::domain::a001_review::{Review, ReviewId, ReviewListQuery};
use contracts::enums::RatingFilter;
use std::collections::HashSet;

/// Фаза цикла загрузки: `Idle → Loading → {Loaded | Failed} → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Параметры одного запроса страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub filter: RatingFilter,
    pub limit: usize,
    pub offset: usize,
    /// Первая страница после сброса: ответ заменяет ленту
    pub reset: bool,
    /// Поколение ленты на момент запроса
    pub generation: u64,
}

impl PageRequest {
    pub fn query(&self) -> ReviewListQuery {
        ReviewListQuery {
            rating: self.filter.query_value(),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Снимок состояния для отрисовки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedSnapshot {
    pub reviews: Vec<Review>,
    pub filter: RatingFilter,
    pub limit: usize,
    pub offset: usize,
    pub total: u64,
    pub has_more: bool,
    pub phase: FetchPhase,
    /// Загружается первая страница (плейсхолдер вместо карточек)
    pub loading_first_page: bool,
    /// Загружается следующая страница (спиннер на кнопке "Load More")
    pub loading_more: bool,
    pub helpful_marked: HashSet<ReviewId>,
    pub submitting: bool,
}

impl FeedSnapshot {
    pub fn is_helpful_marked(&self, id: ReviewId) -> bool {
        self.helpful_marked.contains(&id)
    }
}

#[derive(Debug, Clone)]
pub struct FeedState {
    reviews: Vec<Review>,
    filter: RatingFilter,
    limit: usize,
    /// Смещение последней загруженной страницы
    offset: usize,
    total: u64,
    has_more: bool,
    phase: FetchPhase,
    in_flight: Option<PageRequest>,
    /// Растёт при каждой очистке ленты; ответ старого поколения не применяется
    generation: u64,
    /// Фильтр или размер страницы сменились во время загрузки
    reload_pending: bool,
    helpful_marked: HashSet<ReviewId>,
    helpful_pending: HashSet<ReviewId>,
    submitting: bool,
}

impl FeedState {
    pub fn new(limit: usize) -> Self {
        Self {
            reviews: Vec::new(),
            filter: RatingFilter::All,
            limit,
            offset: 0,
            total: 0,
            has_more: false,
            phase: FetchPhase::Idle,
            in_flight: None,
            generation: 0,
            reload_pending: false,
            helpful_marked: HashSet::new(),
            helpful_pending: HashSet::new(),
            submitting: false,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn filter(&self) -> RatingFilter {
        self.filter
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn clear(&mut self) {
        self.offset = 0;
        self.reviews.clear();
        self.total = 0;
        self.has_more = false;
        self.generation += 1;
        if self.in_flight.is_some() {
            self.reload_pending = true;
        }
    }

    /// Ответ на этот запрос ещё относится к текущей ленте
    pub fn is_current(&self, request: &PageRequest) -> bool {
        request.generation == self.generation
    }

    // ------------------------------------------------------------------
    // Загрузка страниц
    // ------------------------------------------------------------------

    /// Начать загрузку страницы по текущему смещению.
    /// `None`, если загрузка уже идёт: запрос отбрасывается, а не ставится в очередь.
    pub fn begin_page(&mut self, reset: bool) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }
        if reset {
            self.clear();
        }
        Some(self.start(self.offset, reset))
    }

    /// Начать загрузку следующей страницы (`offset + limit`)
    pub fn begin_more(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        Some(self.start(self.offset + self.limit, false))
    }

    fn start(&mut self, offset: usize, reset: bool) -> PageRequest {
        let request = PageRequest {
            filter: self.filter,
            limit: self.limit,
            offset,
            reset,
            generation: self.generation,
        };
        self.phase = FetchPhase::Loading;
        self.in_flight = Some(request.clone());
        request
    }

    /// Успешный ответ. Возвращает число добавленных отзывов.
    ///
    /// Отзывы не под активный фильтр и повторные id отбрасываются.
    /// Ответ устаревшего поколения не применяется вовсе.
    pub fn complete_page(&mut self, request: &PageRequest, page: ReviewPage) -> usize {
        if !self.is_current(request) {
            self.discard_page(request);
            return 0;
        }
        self.in_flight = None;
        self.phase = FetchPhase::Loaded;
        self.offset = request.offset;
        if request.reset {
            self.reviews.clear();
        }

        let received = page.items.len();
        let mut seen: HashSet<ReviewId> = self.reviews.iter().map(|r| r.id).collect();
        let filter = self.filter;
        let fresh: Vec<Review> = page
            .items
            .into_iter()
            .filter(|r| filter.matches(r.rating) && seen.insert(r.id))
            .collect();
        if fresh.len() != received {
            log::warn!(
                "review feed: dropped {} of {} items (filter {:?} or duplicate id)",
                received - fresh.len(),
                received,
                filter
            );
        }

        let appended = fresh.len();
        self.reviews.extend(fresh);
        self.total = page.total;
        self.has_more = page.has_more;
        appended
    }

    /// Ошибка загрузки. Если есть кэш, лента заменяется им целиком.
    /// Возвращает true, если кэш был применён.
    pub fn fail_page(&mut self, request: &PageRequest, cached: Option<Vec<Review>>) -> bool {
        if !self.is_current(request) {
            self.discard_page(request);
            return false;
        }
        self.in_flight = None;
        self.phase = FetchPhase::Failed;
        match cached {
            Some(cached) => {
                self.total = cached.len() as u64;
                self.reviews = cached;
                self.has_more = false;
                true
            }
            None => false,
        }
    }

    /// Ответ устарел: лента очищена, пока шёл запрос. Ничего не применяется.
    pub fn discard_page(&mut self, request: &PageRequest) {
        log::debug!(
            "review feed: discarding stale page rating={} offset={}",
            request.filter.query_value(),
            request.offset
        );
        self.in_flight = None;
        self.phase = FetchPhase::Idle;
    }

    /// Цикл завершён и отрисован
    pub fn settle(&mut self) {
        if self.in_flight.is_none() {
            self.phase = FetchPhase::Idle;
        }
    }

    /// Перезагрузка, отложенная до конца предыдущего запроса
    pub fn begin_pending_reload(&mut self) -> Option<PageRequest> {
        if !self.reload_pending || self.is_loading() {
            return None;
        }
        self.reload_pending = false;
        self.begin_page(true)
    }

    // ------------------------------------------------------------------
    // Фильтр и размер страницы
    // ------------------------------------------------------------------

    /// Сменить фильтр. Лента очищается, смещение сбрасывается.
    /// Во время загрузки перезагрузка откладывается до её окончания.
    pub fn set_filter(&mut self, filter: RatingFilter) {
        self.filter = filter;
        self.clear();
    }

    /// Сменить размер страницы. true, если он изменился (нужна перезагрузка).
    pub fn set_limit(&mut self, limit: usize) -> bool {
        if limit == self.limit {
            return false;
        }
        self.limit = limit;
        self.clear();
        true
    }

    // ------------------------------------------------------------------
    // "Полезно"
    // ------------------------------------------------------------------

    /// false, если отзыв уже отмечен в этой сессии или запрос ещё идёт
    pub fn begin_helpful(&mut self, id: ReviewId) -> bool {
        if self.helpful_marked.contains(&id) || self.helpful_pending.contains(&id) {
            return false;
        }
        self.helpful_pending.insert(id)
    }

    pub fn complete_helpful(&mut self, id: ReviewId, succeeded: bool) {
        self.helpful_pending.remove(&id);
        if !succeeded {
            return;
        }
        self.helpful_marked.insert(id);
        if let Some(review) = self.reviews.iter_mut().find(|r| r.id == id) {
            review.bump_helpful();
        }
    }

    pub fn is_helpful_marked(&self, id: ReviewId) -> bool {
        self.helpful_marked.contains(&id)
    }

    // ------------------------------------------------------------------
    // Отправка отзыва
    // ------------------------------------------------------------------

    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let (loading_first_page, loading_more) = match &self.in_flight {
            Some(req) if req.reset || req.offset == 0 => (true, false),
            Some(_) => (false, true),
            None => (false, false),
        };
        FeedSnapshot {
            reviews: self.reviews.clone(),
            filter: self.filter,
            limit: self.limit,
            offset: self.offset,
            total: self.total,
            has_more: self.has_more,
            phase: self.phase,
            loading_first_page,
            loading_more,
            helpful_marked: self.helpful_marked.clone(),
            submitting: self.submitting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{ServiceType, StarRating};

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id: ReviewId(id),
            name: format!("Customer {}", id),
            email: None,
            phone: None,
            rating,
            title: "Neat work".into(),
            body: "Delivered on time and well finished.".into(),
            service_type: ServiceType::CustomFurniture,
            date: "2024-02-10".into(),
            verified: true,
            helpful: 0,
        }
    }

    fn page(ids: std::ops::Range<i64>, total: u64, has_more: bool) -> ReviewPage {
        ReviewPage {
            items: ids.map(|id| review(id, 5)).collect(),
            total,
            has_more,
        }
    }

    #[test]
    fn test_concurrent_begin_is_dropped() {
        let mut st = FeedState::new(6);
        let first = st.begin_page(true);
        assert!(first.is_some());
        assert_eq!(st.phase(), FetchPhase::Loading);
        assert!(st.begin_page(false).is_none());
        assert!(st.begin_page(true).is_none());
        assert!(st.begin_more().is_none());
    }

    #[test]
    fn test_pagination_scenario() {
        let mut st = FeedState::new(6);

        let req = st.begin_page(true).unwrap();
        assert_eq!(req.query().offset, 0);
        assert_eq!(req.query().rating, "all");
        st.complete_page(&req, page(1..7, 18, true));
        st.settle();
        assert_eq!(st.reviews().len(), 6);
        assert_eq!(st.phase(), FetchPhase::Idle);

        let req = st.begin_more().unwrap();
        assert_eq!(req.offset, 6);
        st.complete_page(&req, page(7..13, 18, true));
        st.settle();
        assert_eq!(st.reviews().len(), 12);
        assert!(st.has_more());

        let req = st.begin_more().unwrap();
        assert_eq!(req.offset, 12);
        st.complete_page(&req, page(13..19, 18, false));
        st.settle();
        assert_eq!(st.reviews().len(), 18);
        assert!(!st.has_more());
        assert!(st.begin_more().is_none());
    }

    #[test]
    fn test_failed_more_keeps_offset_for_retry() {
        let mut st = FeedState::new(4);
        let req = st.begin_page(true).unwrap();
        st.complete_page(&req, page(1..5, 10, true));
        st.settle();

        let req = st.begin_more().unwrap();
        assert!(!st.fail_page(&req, None));
        st.settle();
        assert_eq!(st.offset(), 0);
        assert_eq!(st.reviews().len(), 4);

        let retry = st.begin_more().unwrap();
        assert_eq!(retry.offset, 4);
    }

    #[test]
    fn test_duplicates_and_foreign_ratings_are_dropped() {
        let mut st = FeedState::new(6);
        st.set_filter(RatingFilter::Only(StarRating::Four));

        let req = st.begin_page(true).unwrap();
        assert_eq!(req.query().rating, "4");
        let items = vec![review(1, 4), review(2, 5), review(1, 4), review(3, 4)];
        let appended = st.complete_page(
            &req,
            ReviewPage {
                items,
                total: 3,
                has_more: false,
            },
        );

        assert_eq!(appended, 2);
        assert!(st.reviews().iter().all(|r| r.rating == 4));
    }

    #[test]
    fn test_failure_falls_back_to_cache() {
        let mut st = FeedState::new(6);
        let req = st.begin_page(true).unwrap();
        let cached = vec![review(10, 3), review(11, 5)];

        assert!(st.fail_page(&req, Some(cached.clone())));
        assert_eq!(st.phase(), FetchPhase::Failed);
        assert_eq!(st.reviews(), cached.as_slice());
        assert!(!st.has_more());
        assert!(!st.is_loading());
    }

    #[test]
    fn test_set_limit_resets_only_on_change() {
        let mut st = FeedState::new(6);
        let req = st.begin_page(true).unwrap();
        st.complete_page(&req, page(1..7, 18, true));

        assert!(!st.set_limit(6));
        assert_eq!(st.reviews().len(), 6);

        assert!(st.set_limit(3));
        assert!(st.reviews().is_empty());
        assert_eq!(st.offset(), 0);
    }

    #[test]
    fn test_helpful_once_per_session() {
        let mut st = FeedState::new(6);
        let req = st.begin_page(true).unwrap();
        st.complete_page(&req, page(1..3, 2, false));

        let id = ReviewId(1);
        assert!(st.begin_helpful(id));
        assert!(!st.begin_helpful(id), "pending request blocks a second click");
        st.complete_helpful(id, true);
        assert_eq!(st.reviews()[0].helpful, 1);
        assert!(st.is_helpful_marked(id));
        assert!(!st.begin_helpful(id));

        let other = ReviewId(2);
        assert!(st.begin_helpful(other));
        st.complete_helpful(other, false);
        assert_eq!(st.reviews()[1].helpful, 0);
        assert!(st.begin_helpful(other), "failed request can be retried");
    }

    #[test]
    fn test_filter_change_during_fetch_discards_old_page() {
        let mut st = FeedState::new(6);
        let stale = st.begin_page(true).unwrap();
        st.set_filter(RatingFilter::Only(StarRating::Four));

        let mut items = page(1..7, 18, true).items;
        items[0].rating = 4;
        let appended = st.complete_page(
            &stale,
            ReviewPage {
                items,
                total: 18,
                has_more: true,
            },
        );
        assert_eq!(appended, 0);
        assert!(st.reviews().is_empty());
        assert_eq!(st.offset(), 0);
        assert!(!st.has_more());

        let reload = st.begin_pending_reload().unwrap();
        assert_eq!(reload.query().rating, "4");
        assert_eq!(reload.offset, 0);
        assert!(reload.reset);
        assert!(st.begin_pending_reload().is_none());
    }

    #[test]
    fn test_limit_change_during_fetch_schedules_reload() {
        let mut st = FeedState::new(6);
        let stale = st.begin_page(true).unwrap();
        assert!(st.set_limit(3));

        assert!(!st.fail_page(&stale, Some(vec![review(1, 5)])));
        assert!(st.reviews().is_empty());

        let reload = st.begin_pending_reload().unwrap();
        assert_eq!(reload.limit, 3);
        assert_eq!(reload.offset, 0);
    }

    #[test]
    fn test_no_pending_reload_without_changes() {
        let mut st = FeedState::new(6);
        let req = st.begin_page(true).unwrap();
        st.complete_page(&req, page(1..7, 18, true));
        st.settle();
        assert!(st.begin_pending_reload().is_none());
    }

    #[test]
    fn test_snapshot_loading_flags() {
        let mut st = FeedState::new(6);
        st.begin_page(true).unwrap();
        let snap = st.snapshot();
        assert!(snap.loading_first_page);
        assert!(!snap.loading_more);
    }
}
