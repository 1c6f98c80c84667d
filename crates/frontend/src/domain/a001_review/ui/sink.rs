use crate::domain::a001_review::controller::FeedView;
use crate::domain::a001_review::state::FeedSnapshot;
use crate::shared::notifications::{NotificationKind, NotificationService, Notifier};
use contracts::domain::a001_review::RatingStats;
use leptos::prelude::*;

/// Сигналы, через которые секция отзывов видит состояние контроллера
#[derive(Clone, Copy)]
pub struct FeedSignals {
    pub feed: RwSignal<FeedSnapshot>,
    pub stats: RwSignal<Option<RatingStats>>,
    pub form_open: RwSignal<bool>,
}

impl FeedSignals {
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(FeedSnapshot::default()),
            stats: RwSignal::new(None),
            form_open: RwSignal::new(false),
        }
    }
}

impl Default for FeedSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// `FeedView` поверх сигналов Leptos
#[derive(Clone, Copy)]
pub struct SignalFeedView {
    signals: FeedSignals,
    notifications: NotificationService,
}

impl SignalFeedView {
    pub fn new(signals: FeedSignals, notifications: NotificationService) -> Self {
        Self {
            signals,
            notifications,
        }
    }
}

impl Notifier for SignalFeedView {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.notifications.notify(kind, message);
    }
}

impl FeedView for SignalFeedView {
    fn show_loading(&self, snapshot: &FeedSnapshot) {
        self.signals.feed.set(snapshot.clone());
    }

    fn render(&self, snapshot: &FeedSnapshot) {
        self.signals.feed.set(snapshot.clone());
    }

    fn render_stats(&self, stats: &RatingStats) {
        self.signals.stats.set(Some(stats.clone()));
    }

    fn show_submitting(&self, snapshot: &FeedSnapshot) {
        self.signals.feed.set(snapshot.clone());
    }

    fn review_submitted(&self) {
        self.signals.form_open.set(false);
    }
}
