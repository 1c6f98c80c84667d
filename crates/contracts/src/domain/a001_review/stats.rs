use super::aggregate::Review;
use crate::enums::StarRating;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Количество отзывов по каждой оценке 1..=5.
/// На проводе это объект `{"1": n, ..., "5": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<u8, u64>", into = "BTreeMap<u8, u64>")]
pub struct RatingBreakdown([u64; 5]);

impl RatingBreakdown {
    pub fn count(&self, rating: StarRating) -> u64 {
        self.0[rating.value() as usize - 1]
    }

    pub fn add(&mut self, rating: StarRating) {
        self.0[rating.value() as usize - 1] += 1;
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Доля оценки в процентах (0..=100) для ширины полосы
    pub fn percentage(&self, rating: StarRating) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(rating) as f64 / total as f64 * 100.0
        }
    }
}

impl From<BTreeMap<u8, u64>> for RatingBreakdown {
    fn from(map: BTreeMap<u8, u64>) -> Self {
        let mut buckets = [0u64; 5];
        for (rating, count) in map {
            if let Some(r) = StarRating::from_value(rating) {
                buckets[r.value() as usize - 1] = count;
            }
        }
        Self(buckets)
    }
}

impl From<RatingBreakdown> for BTreeMap<u8, u64> {
    fn from(breakdown: RatingBreakdown) -> Self {
        (1u8..=5).zip(breakdown.0).collect()
    }
}

/// Агрегированная статистика отзывов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    /// Средняя оценка; бэкенд иногда присылает её строкой ("4.6")
    #[serde(deserialize_with = "number_or_string")]
    pub average_rating: f64,
    pub total_reviews: u64,
    pub rating_breakdown: RatingBreakdown,
}

impl RatingStats {
    /// Приближённая статистика по уже загруженным отзывам.
    /// Используется только когда эндпоинт статистики недоступен.
    pub fn derive_from(reviews: &[Review]) -> Self {
        let mut breakdown = RatingBreakdown::default();
        let mut sum = 0u64;
        for review in reviews {
            sum += u64::from(review.rating);
            if let Some(rating) = StarRating::from_value(review.rating) {
                breakdown.add(rating);
            }
        }

        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            round_one_decimal(sum as f64 / reviews.len() as f64)
        };

        Self {
            average_rating,
            total_reviews: reviews.len() as u64,
            rating_breakdown: breakdown,
        }
    }

    /// "4.6" для заголовка панели
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_review::aggregate::ReviewId;
    use crate::enums::ServiceType;

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id: ReviewId(id),
            name: format!("Customer {}", id),
            email: None,
            phone: None,
            rating,
            title: "Solid work".into(),
            body: "Everything was delivered as promised.".into(),
            service_type: ServiceType::Other,
            date: "2024-05-01".into(),
            verified: false,
            helpful: 0,
        }
    }

    #[test]
    fn test_derive_from_reviews() {
        let reviews = vec![review(1, 5), review(2, 4), review(3, 4), review(4, 2)];
        let stats = RatingStats::derive_from(&reviews);

        assert_eq!(stats.total_reviews, 4);
        assert_eq!(stats.average_rating, 3.8);
        assert_eq!(stats.rating_breakdown.count(StarRating::Four), 2);
        assert_eq!(stats.rating_breakdown.count(StarRating::Three), 0);
        assert_eq!(stats.rating_breakdown.total(), 4);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let reviews = vec![review(1, 5), review(2, 5), review(3, 4)];
        let stats = RatingStats::derive_from(&reviews);
        assert_eq!(stats.average_rating, 4.7);
        assert_eq!(stats.average_label(), "4.7");
    }

    #[test]
    fn test_derive_from_empty() {
        let stats = RatingStats::derive_from(&[]);
        assert_eq!(stats.total_reviews, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.rating_breakdown.percentage(StarRating::Five), 0.0);
    }

    #[test]
    fn test_deserialize_backend_stats() {
        let json = r#"{
            "averageRating": "4.5",
            "totalReviews": 4,
            "ratingBreakdown": {"5": 2, "4": 2, "3": 0, "2": 0, "1": 0}
        }"#;
        let stats: RatingStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.average_rating, 4.5);
        assert_eq!(stats.rating_breakdown.count(StarRating::Five), 2);
        assert_eq!(stats.rating_breakdown.percentage(StarRating::Four), 50.0);

        let json = r#"{"averageRating": 3.2, "totalReviews": 0, "ratingBreakdown": {}}"#;
        let stats: RatingStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.average_rating, 3.2);
    }
}
