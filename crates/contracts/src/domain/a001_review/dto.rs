use super::aggregate::Review;
use super::stats::RatingStats;
use serde::{Deserialize, Serialize};

/// Параметры запроса `GET /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewListQuery {
    /// "all" или "1".."5"
    pub rating: String,
    pub limit: usize,
    pub offset: usize,
}

/// Ответ `GET /reviews`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Review>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ `GET /reviews/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewStatsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<RatingStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ `POST /reviews` и `PUT /reviews/{id}/helpful`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_failure_shape() {
        let resp: ReviewListResponse =
            serde_json::from_str(r#"{"success": false, "error": "db down"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.data.is_empty());
        assert_eq!(resp.error.as_deref(), Some("db down"));
    }

    #[test]
    fn test_list_success_shape() {
        let resp: ReviewListResponse = serde_json::from_str(
            r#"{"success": true, "data": [], "total": 18, "hasMore": true}"#,
        )
        .unwrap();
        assert_eq!(resp.total, 18);
        assert!(resp.has_more);
    }
}
