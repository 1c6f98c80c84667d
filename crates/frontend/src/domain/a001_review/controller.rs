//! Контроллер ленты отзывов
//!
//! Владеет `FeedState`, ходит в API через `ReviewApi`, пишет кэш через
//! `ReviewCache` и отдаёт результат в `FeedView`. Один экземпляр создаётся
//! в корне приложения и передаётся секции отзывов.
//!
//! Заимствование `RefCell` никогда не держится через `.await`: каждое
//! действие берёт запрос из состояния, отпускает его, ждёт ответ и только
//! потом снова открывает состояние.

use super::api::{ReviewApi, ReviewApiError};
use super::cache::ReviewCache;
use super::state::{FeedSnapshot, FeedState, PageRequest};
use crate::shared::notifications::Notifier;
use crate::shared::viewport::page_size_for_width;
use contracts::domain::a001_review::{DraftError, RatingStats, ReviewDraft, ReviewId};
use contracts::enums::RatingFilter;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

const LOAD_FAILED: &str = "Failed to load reviews. Please try again.";
const SUBMIT_FAILED: &str = "Failed to submit review. Please try again.";
const SUBMIT_SUCCEEDED: &str = "Thank you for your review! It will be visible after approval.";
const HELPFUL_SUCCEEDED: &str = "Thank you for your feedback!";

/// Куда контроллер отдаёт результат
pub trait FeedView: Notifier {
    /// Идёт загрузка страницы
    fn show_loading(&self, snapshot: &FeedSnapshot);
    /// Лента изменилась; вызывается ровно один раз за цикл загрузки
    fn render(&self, snapshot: &FeedSnapshot);
    fn render_stats(&self, stats: &RatingStats);
    /// Отправка отзыва началась или закончилась (`snapshot.submitting`)
    fn show_submitting(&self, snapshot: &FeedSnapshot);
    /// Отзыв принят, форму можно закрыть
    fn review_submitted(&self);
}

/// Действия пользователя над лентой
#[derive(Debug, Clone, PartialEq)]
pub enum FeedCommand {
    LoadInitial,
    LoadMore,
    SetFilter(RatingFilter),
    Submit(ReviewDraft),
    MarkHelpful(ReviewId),
    /// Ширина окна после паузы в событиях resize
    Resize(f64),
    RefreshStats,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] DraftError),

    #[error("a review is already being submitted")]
    InProgress,

    #[error("{0}")]
    Api(#[from] ReviewApiError),
}

pub struct ReviewFeedController<A, C, V> {
    state: Rc<RefCell<FeedState>>,
    api: Rc<A>,
    cache: Rc<C>,
    view: Rc<V>,
}

impl<A, C, V> Clone for ReviewFeedController<A, C, V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            api: Rc::clone(&self.api),
            cache: Rc::clone(&self.cache),
            view: Rc::clone(&self.view),
        }
    }
}

impl<A, C, V> ReviewFeedController<A, C, V>
where
    A: ReviewApi,
    C: ReviewCache,
    V: FeedView,
{
    pub fn new(api: Rc<A>, cache: Rc<C>, view: Rc<V>, limit: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(FeedState::new(limit))),
            api,
            cache,
            view,
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.state.borrow().snapshot()
    }

    pub async fn dispatch(&self, command: FeedCommand) {
        match command {
            FeedCommand::LoadInitial => self.load_initial().await,
            FeedCommand::LoadMore => self.load_more().await,
            FeedCommand::SetFilter(filter) => self.set_filter(filter).await,
            FeedCommand::Submit(draft) => {
                if let Err(e) = self.submit_review(&draft).await {
                    log::debug!("review submit not completed: {}", e);
                }
            }
            FeedCommand::MarkHelpful(id) => self.mark_helpful(id).await,
            FeedCommand::Resize(width) => self.on_resize(width).await,
            FeedCommand::RefreshStats => self.load_stats().await,
        }
    }

    pub async fn load_initial(&self) {
        self.load_page(true).await;
        self.load_stats().await;
    }

    /// Загрузить страницу по текущему смещению; `reset` начинает ленту заново
    pub async fn load_page(&self, reset: bool) {
        let request = self.state.borrow_mut().begin_page(reset);
        match request {
            Some(request) => self.drive(request).await,
            None => log::debug!("review feed: load_page(reset={}) dropped, fetch in flight", reset),
        }
    }

    pub async fn load_more(&self) {
        let request = self.state.borrow_mut().begin_more();
        match request {
            Some(request) => self.drive(request).await,
            None => log::debug!("review feed: load_more ignored"),
        }
    }

    pub async fn set_filter(&self, filter: RatingFilter) {
        self.state.borrow_mut().set_filter(filter);
        self.load_page(true).await;
    }

    /// Пересчитать размер страницы; при смене диапазона лента перезагружается.
    /// Во время загрузки перезагрузка выполнится после текущего ответа.
    pub async fn on_resize(&self, width: f64) {
        let limit = page_size_for_width(width);
        let changed = self.state.borrow_mut().set_limit(limit);
        if changed {
            log::debug!("review feed: page size is now {}", limit);
            self.load_page(true).await;
        }
    }

    /// Выполнить запрос и все перезагрузки, отложенные за время его выполнения
    async fn drive(&self, first: PageRequest) {
        let mut next = Some(first);
        while let Some(request) = next {
            self.run_page(request).await;
            next = self.state.borrow_mut().begin_pending_reload();
        }
    }

    async fn run_page(&self, request: PageRequest) {
        self.view.show_loading(&self.snapshot());
        log::debug!(
            "review feed: GET rating={} limit={} offset={}",
            request.filter.query_value(),
            request.limit,
            request.offset
        );

        let result = self.api.list(&request.query()).await;

        if !self.state.borrow().is_current(&request) {
            self.state.borrow_mut().discard_page(&request);
            return;
        }

        let mut fallback_stats = None;
        let snapshot = match result {
            Ok(page) => {
                let mut state = self.state.borrow_mut();
                state.complete_page(&request, page);
                self.cache.store(state.reviews());
                state.snapshot()
            }
            Err(e) => {
                log::error!("Error loading reviews: {}", e);
                self.view.error(LOAD_FAILED);
                let cached = self.cache.load();
                let mut state = self.state.borrow_mut();
                if state.fail_page(&request, cached) {
                    log::warn!("review feed: showing {} cached reviews", state.reviews().len());
                    fallback_stats = Some(RatingStats::derive_from(state.reviews()));
                }
                state.snapshot()
            }
        };

        self.view.render(&snapshot);
        if let Some(stats) = fallback_stats {
            self.view.render_stats(&stats);
        }
        self.state.borrow_mut().settle();
    }

    pub async fn load_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => self.view.render_stats(&stats),
            Err(e) => {
                log::warn!("Error loading review stats: {}", e);
                let derived = {
                    let state = self.state.borrow();
                    (!state.reviews().is_empty()).then(|| RatingStats::derive_from(state.reviews()))
                };
                if let Some(stats) = derived {
                    self.view.render_stats(&stats);
                }
            }
        }
    }

    /// Проверить и отправить отзыв. Невалидный черновик в сеть не уходит.
    pub async fn submit_review(&self, draft: &ReviewDraft) -> Result<(), SubmitError> {
        let draft = draft.normalized();
        if let Err(e) = draft.validate() {
            self.view.error(&e.to_string());
            return Err(e.into());
        }

        if !self.state.borrow_mut().begin_submit() {
            return Err(SubmitError::InProgress);
        }
        self.view.show_submitting(&self.snapshot());
        let result = self.api.submit(&draft).await;
        self.state.borrow_mut().end_submit();
        self.view.show_submitting(&self.snapshot());

        match result {
            Ok(()) => {
                log::info!("review submitted by {}", draft.name);
                self.view.success(SUBMIT_SUCCEEDED);
                self.view.review_submitted();
                self.load_page(true).await;
                self.load_stats().await;
                Ok(())
            }
            Err(e) => {
                log::error!("Error submitting review: {}", e);
                self.view.error(SUBMIT_FAILED);
                Err(e.into())
            }
        }
    }

    pub async fn mark_helpful(&self, id: ReviewId) {
        if !self.state.borrow_mut().begin_helpful(id) {
            log::debug!("review {} already marked helpful", id);
            return;
        }

        let succeeded = match self.api.mark_helpful(id).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Error marking review {} helpful: {}", id, e);
                false
            }
        };

        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.complete_helpful(id, succeeded);
            state.snapshot()
        };
        if succeeded {
            self.view.render(&snapshot);
            self.view.success(HELPFUL_SUCCEEDED);
        }
    }
}
