use crate::enums::ServiceType;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор отзыва (назначается бэкендом)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Отзыв клиента. Принадлежит бэкенду, на клиенте хранится только копия для чтения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub name: String,

    /// Контакты приходят не всегда и не отображаются
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub rating: u8,
    pub title: String,

    /// Текст отзыва (на проводе поле `review`)
    #[serde(rename = "review")]
    pub body: String,

    pub service_type: ServiceType,

    /// ISO-дата отправки
    pub date: String,

    #[serde(default)]
    pub verified: bool,

    /// Счётчик "полезно"
    #[serde(default)]
    pub helpful: u32,
}

impl Review {
    /// Увеличить счётчик "полезно" на единицу
    pub fn bump_helpful(&mut self) {
        self.helpful = self.helpful.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": 42,
            "name": "Anita Sharma",
            "rating": 5,
            "title": "Beautiful wardrobe",
            "review": "The wardrobe was finished on time and looks great.",
            "serviceType": "custom-furniture",
            "date": "2024-03-15T10:00:00Z",
            "verified": true
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.id, ReviewId(42));
        assert_eq!(review.service_type, ServiceType::CustomFurniture);
        assert_eq!(review.helpful, 0);
        assert!(review.verified);
        assert!(review.email.is_none());
    }

    #[test]
    fn test_bump_helpful() {
        let mut review: Review = serde_json::from_str(
            r#"{"id":1,"name":"A","rating":4,"title":"Title","review":"Body","serviceType":"other","date":"2024-01-01","helpful":3}"#,
        )
        .unwrap();
        review.bump_helpful();
        assert_eq!(review.helpful, 4);
    }
}
