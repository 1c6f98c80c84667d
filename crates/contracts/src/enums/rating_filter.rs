use super::star_rating::StarRating;

/// Активный фильтр ленты отзывов: все или ровно одна оценка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Only(StarRating),
}

impl RatingFilter {
    /// Значение параметра `rating` в запросе списка
    pub fn query_value(&self) -> String {
        match self {
            RatingFilter::All => "all".to_string(),
            RatingFilter::Only(rating) => rating.value().to_string(),
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(RatingFilter::All),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(StarRating::from_value)
                .map(RatingFilter::Only),
        }
    }

    /// Подходит ли оценка под фильтр
    pub fn matches(&self, rating: u8) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Only(expected) => expected.value() == rating,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RatingFilter::All => "All".to_string(),
            RatingFilter::Only(rating) => format!("{}★", rating.value()),
        }
    }

    /// Кнопки панели фильтров в порядке отображения
    pub fn all_options() -> Vec<RatingFilter> {
        std::iter::once(RatingFilter::All)
            .chain(StarRating::descending().into_iter().map(RatingFilter::Only))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        assert_eq!(RatingFilter::All.query_value(), "all");
        assert_eq!(RatingFilter::Only(StarRating::Three).query_value(), "3");
        assert_eq!(
            RatingFilter::from_query_value("5"),
            Some(RatingFilter::Only(StarRating::Five))
        );
        assert_eq!(RatingFilter::from_query_value("all"), Some(RatingFilter::All));
        assert_eq!(RatingFilter::from_query_value("9"), None);
        assert_eq!(RatingFilter::from_query_value("five"), None);
    }

    #[test]
    fn test_matches() {
        assert!(RatingFilter::All.matches(1));
        assert!(RatingFilter::Only(StarRating::Two).matches(2));
        assert!(!RatingFilter::Only(StarRating::Two).matches(3));
    }

    #[test]
    fn test_all_options_order() {
        let labels: Vec<String> = RatingFilter::all_options().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "5★", "4★", "3★", "2★", "1★"]);
    }
}
