use crate::enums::ServiceType;
use crate::shared::patterns::{is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REVIEW_MIN_CHARS: usize = 20;
pub const REVIEW_MAX_CHARS: usize = 1000;
pub const TITLE_MIN_CHARS: usize = 5;

/// Нарушенное правило валидации черновика (первое по порядку проверки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit Indian phone number")]
    InvalidPhone,
    #[error("Please select a rating between 1 and 5 stars")]
    RatingOutOfRange,
    #[error("Please write a more detailed review (at least 20 characters)")]
    ReviewTooShort,
    #[error("Review is too long (maximum 1000 characters)")]
    ReviewTooLong,
    #[error("Review title is too short (minimum 5 characters)")]
    TitleTooShort,
}

/// Черновик отзыва из формы "Write a Review"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// 0 = звёзды не выбраны
    pub rating: u8,
    pub title: String,
    #[serde(rename = "review")]
    pub body: String,
    pub service_type: Option<ServiceType>,
}

impl ReviewDraft {
    /// Копия с обрезанными пробелами, именно она уходит на сервер
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            rating: self.rating,
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            service_type: self.service_type,
        }
    }

    fn has_required_fields(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && self.rating != 0
            && !self.title.is_empty()
            && !self.body.is_empty()
            && self.service_type.is_some()
    }

    /// Валидация нормализованного черновика.
    /// Порядок проверок фиксирован: обязательные поля, email, телефон,
    /// оценка, длина текста, длина заголовка.
    pub fn validate(&self) -> Result<(), DraftError> {
        let draft = self.normalized();

        if !draft.has_required_fields() {
            return Err(DraftError::MissingFields);
        }
        if !is_valid_email(&draft.email) {
            return Err(DraftError::InvalidEmail);
        }
        if !is_valid_phone(&draft.phone) {
            return Err(DraftError::InvalidPhone);
        }
        if !(1..=5).contains(&draft.rating) {
            return Err(DraftError::RatingOutOfRange);
        }

        let body_len = draft.body.chars().count();
        if body_len < REVIEW_MIN_CHARS {
            return Err(DraftError::ReviewTooShort);
        }
        if body_len > REVIEW_MAX_CHARS {
            return Err(DraftError::ReviewTooLong);
        }
        if draft.title.chars().count() < TITLE_MIN_CHARS {
            return Err(DraftError::TitleTooShort);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            name: "Rahul Verma".into(),
            email: "rahul@example.com".into(),
            phone: "9876543210".into(),
            rating: 5,
            title: "Great doors".into(),
            body: "New teak doors fitted perfectly, very neat work.".into(),
            service_type: Some(ServiceType::DoorsWindows),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(valid_draft().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let mut d = valid_draft();
        d.service_type = None;
        assert_eq!(d.validate(), Err(DraftError::MissingFields));

        let mut d = valid_draft();
        d.rating = 0;
        assert_eq!(d.validate(), Err(DraftError::MissingFields));

        let mut d = valid_draft();
        d.name = "   ".into();
        assert_eq!(d.validate(), Err(DraftError::MissingFields));
    }

    #[test]
    fn test_rules_reported_in_fixed_order() {
        // email и телефон оба неверны: сообщается email
        let mut d = valid_draft();
        d.email = "nope".into();
        d.phone = "123".into();
        assert_eq!(d.validate(), Err(DraftError::InvalidEmail));

        let mut d = valid_draft();
        d.phone = "1234567890".into();
        d.rating = 9;
        assert_eq!(d.validate(), Err(DraftError::InvalidPhone));

        let mut d = valid_draft();
        d.rating = 6;
        d.body = "short".into();
        assert_eq!(d.validate(), Err(DraftError::RatingOutOfRange));

        // короткий текст проверяется раньше короткого заголовка
        let mut d = valid_draft();
        d.body = "too short".into();
        d.title = "Hi".into();
        assert_eq!(d.validate(), Err(DraftError::ReviewTooShort));
    }

    #[test]
    fn test_length_bounds() {
        let mut d = valid_draft();
        d.body = "x".repeat(REVIEW_MIN_CHARS);
        assert_eq!(d.validate(), Ok(()));

        d.body = "x".repeat(REVIEW_MAX_CHARS);
        assert_eq!(d.validate(), Ok(()));

        d.body = "x".repeat(REVIEW_MAX_CHARS + 1);
        assert_eq!(d.validate(), Err(DraftError::ReviewTooLong));

        let mut d = valid_draft();
        d.title = "Good".into();
        assert_eq!(d.validate(), Err(DraftError::TitleTooShort));
    }

    #[test]
    fn test_normalized_trims_and_serializes_wire_names() {
        let mut d = valid_draft();
        d.name = "  Rahul  ".into();
        let json = serde_json::to_value(d.normalized()).unwrap();
        assert_eq!(json["name"], "Rahul");
        assert_eq!(json["serviceType"], "doors-windows");
        assert!(json.get("review").is_some());
    }
}
