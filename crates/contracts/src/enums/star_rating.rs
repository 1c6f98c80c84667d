use serde::{Deserialize, Serialize};

/// Оценка в звёздах (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl StarRating {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(StarRating::One),
            2 => Some(StarRating::Two),
            3 => Some(StarRating::Three),
            4 => Some(StarRating::Four),
            5 => Some(StarRating::Five),
            _ => None,
        }
    }

    /// От пяти звёзд к одной, как в панели фильтров и в гистограмме
    pub fn descending() -> [StarRating; 5] {
        [
            StarRating::Five,
            StarRating::Four,
            StarRating::Three,
            StarRating::Two,
            StarRating::One,
        ]
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StarRating::from_value(value).ok_or_else(|| format!("Rating out of range: {}", value))
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_bounds() {
        assert_eq!(StarRating::from_value(0), None);
        assert_eq!(StarRating::from_value(1), Some(StarRating::One));
        assert_eq!(StarRating::from_value(5), Some(StarRating::Five));
        assert_eq!(StarRating::from_value(6), None);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&StarRating::Four).unwrap(), "4");
        assert!(serde_json::from_str::<StarRating>("7").is_err());
    }
}
