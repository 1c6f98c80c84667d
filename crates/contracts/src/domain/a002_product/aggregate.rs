use serde::{Deserialize, Serialize};

/// Идентификатор изделия в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

/// Категория изделия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Furniture,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Furniture => "furniture",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Furniture => "Furniture",
        }
    }

    pub fn all() -> [ProductCategory; 1] {
        [ProductCategory::Furniture]
    }

    /// `None` для "all" и неизвестных кодов
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Изделие из статического каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Путь к картинке относительно корня сайта
    pub image: String,
    pub category: ProductCategory,
    pub featured: bool,
}

impl Product {
    /// Поиск без учёта регистра по названию и описанию
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Текст для формы обратной связи по кнопке "Get Quote"
    pub fn inquiry_message(&self) -> String {
        format!(
            "Hi, I'm interested in the {}. Please provide more details and pricing information.",
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Product {
        Product {
            id: ProductId(2),
            name: "Classic Wooden Dining Table".into(),
            description: "Timeless dining table design".into(),
            image: "image/16.jpeg".into(),
            category: ProductCategory::Furniture,
            featured: true,
        }
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(ProductCategory::from_code("furniture"), Some(ProductCategory::Furniture));
        assert_eq!(ProductCategory::from_code("all"), None);
    }

    #[test]
    fn test_matches_query_ignores_case() {
        let p = table();
        assert!(p.matches_query("DINING"));
        assert!(p.matches_query("  timeless "));
        assert!(p.matches_query(""));
        assert!(!p.matches_query("wardrobe"));
    }

    #[test]
    fn test_inquiry_message() {
        assert_eq!(
            table().inquiry_message(),
            "Hi, I'm interested in the Classic Wooden Dining Table. Please provide more details and pricing information."
        );
    }
}
