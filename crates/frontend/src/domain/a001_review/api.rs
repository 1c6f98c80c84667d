//! HTTP client for the reviews API

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::a001_review::{
    RatingStats, Review, ReviewActionResponse, ReviewDraft, ReviewId, ReviewListQuery,
    ReviewListResponse, ReviewStatsResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

/// Ошибки обращения к API отзывов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewApiError {
    /// Запрос не дошёл до сервера
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил не-2xx статусом
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// Ответ не удалось разобрать
    #[error("invalid response: {0}")]
    Decode(String),

    /// Корректный ответ с `success: false`
    #[error("{0}")]
    Backend(String),
}

/// Одна страница ленты
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPage {
    pub items: Vec<Review>,
    pub total: u64,
    pub has_more: bool,
}

/// Операции бэкенда отзывов, которыми пользуется лента
#[async_trait(?Send)]
pub trait ReviewApi {
    async fn list(&self, query: &ReviewListQuery) -> Result<ReviewPage, ReviewApiError>;
    async fn stats(&self) -> Result<RatingStats, ReviewApiError>;
    async fn submit(&self, draft: &ReviewDraft) -> Result<(), ReviewApiError>;
    async fn mark_helpful(&self, id: ReviewId) -> Result<(), ReviewApiError>;
}

/// Реализация поверх gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpReviewApi;

fn backend_error(message: Option<String>, fallback: &str) -> ReviewApiError {
    ReviewApiError::Backend(message.unwrap_or_else(|| fallback.to_string()))
}

fn build(builder: RequestBuilder) -> Result<Request, ReviewApiError> {
    builder
        .build()
        .map_err(|e| ReviewApiError::Network(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ReviewApiError> {
    request
        .send()
        .await
        .map_err(|e| ReviewApiError::Network(e.to_string()))
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ReviewApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ReviewApiError::Decode(e.to_string()))
}

/// POST/PUT: тело ответа может объяснить ошибку даже при не-2xx статусе
async fn action_result(response: Response, fallback: &str) -> Result<(), ReviewApiError> {
    let status = response.status();
    let ok = response.ok();
    match decode::<ReviewActionResponse>(response).await {
        Ok(body) if ok && body.success => Ok(()),
        Ok(body) if body.error.is_some() => Err(backend_error(body.error, fallback)),
        Ok(_) if ok => Err(backend_error(None, fallback)),
        Ok(_) => Err(ReviewApiError::Http(status)),
        Err(_) if !ok => Err(ReviewApiError::Http(status)),
        Err(e) => Err(e),
    }
}

#[async_trait(?Send)]
impl ReviewApi for HttpReviewApi {
    async fn list(&self, query: &ReviewListQuery) -> Result<ReviewPage, ReviewApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ReviewApiError::Decode(e.to_string()))?;
        let url = api_url(&format!("/reviews?{}", qs));

        let response = send(build(Request::get(&url))?).await?;
        if !response.ok() {
            return Err(ReviewApiError::Http(response.status()));
        }

        let body: ReviewListResponse = decode(response).await?;
        if !body.success {
            return Err(backend_error(body.error, "Failed to load reviews"));
        }

        Ok(ReviewPage {
            items: body.data,
            total: body.total,
            has_more: body.has_more,
        })
    }

    async fn stats(&self) -> Result<RatingStats, ReviewApiError> {
        let url = api_url("/reviews/stats");

        let response = send(build(Request::get(&url))?).await?;
        if !response.ok() {
            return Err(ReviewApiError::Http(response.status()));
        }

        let body: ReviewStatsResponse = decode(response).await?;
        match body.data {
            Some(stats) if body.success => Ok(stats),
            _ => Err(backend_error(body.error, "Failed to load review stats")),
        }
    }

    async fn submit(&self, draft: &ReviewDraft) -> Result<(), ReviewApiError> {
        let url = api_url("/reviews");

        let request = Request::post(&url)
            .json(draft)
            .map_err(|e| ReviewApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        let response = send(request).await?;

        action_result(response, "Failed to submit review").await
    }

    async fn mark_helpful(&self, id: ReviewId) -> Result<(), ReviewApiError> {
        let url = api_url(&format!("/reviews/{}/helpful", id));

        let response = send(build(Request::put(&url))?).await?;

        action_result(response, "Failed to mark review as helpful").await
    }
}
