//! Отзывы клиентов: сущность, черновик с валидацией, статистика, DTO API

pub mod aggregate;
pub mod draft;
pub mod dto;
pub mod stats;

pub use aggregate::{Review, ReviewId};
pub use draft::{DraftError, ReviewDraft};
pub use dto::{ReviewActionResponse, ReviewListQuery, ReviewListResponse, ReviewStatsResponse};
pub use stats::{RatingBreakdown, RatingStats};
