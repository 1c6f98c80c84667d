use crate::shared::patterns::{is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Тема обращения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    General,
    Product,
    CustomWork,
    Repair,
    Other,
}

impl ContactSubject {
    pub fn code(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Product => "product",
            ContactSubject::CustomWork => "custom-work",
            ContactSubject::Repair => "repair",
            ContactSubject::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Product => "Product Inquiry",
            ContactSubject::CustomWork => "Custom Work",
            ContactSubject::Repair => "Repair & Restoration",
            ContactSubject::Other => "Other",
        }
    }

    pub fn all() -> [ContactSubject; 5] {
        [
            ContactSubject::General,
            ContactSubject::Product,
            ContactSubject::CustomWork,
            ContactSubject::Repair,
            ContactSubject::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit Indian phone number")]
    InvalidPhone,
}

/// Обращение из формы обратной связи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    /// Необязательное поле, проверяется только если заполнено
    pub email: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

impl ContactRequest {
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject,
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let req = self.normalized();

        if req.name.is_empty()
            || req.phone.is_empty()
            || req.subject.is_none()
            || req.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !req.email.is_empty() && !is_valid_email(&req.email) {
            return Err(ContactError::InvalidEmail);
        }
        if !is_valid_phone(&req.phone) {
            return Err(ContactError::InvalidPhone);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Priya".into(),
            phone: "9123456789".into(),
            email: String::new(),
            subject: Some(ContactSubject::General),
            message: "Do you make custom kitchen cabinets?".into(),
        }
    }

    #[test]
    fn test_email_is_optional() {
        assert_eq!(request().validate(), Ok(()));

        let mut r = request();
        r.email = "priya@example.in".into();
        assert_eq!(r.validate(), Ok(()));

        r.email = "priya@".into();
        assert_eq!(r.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_required_and_phone() {
        let mut r = request();
        r.subject = None;
        assert_eq!(r.validate(), Err(ContactError::MissingFields));

        let mut r = request();
        r.phone = "0123456789".into();
        assert_eq!(r.validate(), Err(ContactError::InvalidPhone));
    }

    #[test]
    fn test_subject_codes() {
        assert_eq!(ContactSubject::from_code("product"), Some(ContactSubject::Product));
        assert_eq!(ContactSubject::from_code("nope"), None);
    }
}
