use serde::{Deserialize, Serialize};

/// Категория услуги, к которой относится отзыв
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    CustomFurniture,
    DoorsWindows,
    RepairRestoration,
    Commercial,
    /// Неизвестные теги с бэкенда тоже попадают сюда
    #[serde(other)]
    Other,
}

impl ServiceType {
    /// Получить код категории (значение на проводе)
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::CustomFurniture => "custom-furniture",
            ServiceType::DoorsWindows => "doors-windows",
            ServiceType::RepairRestoration => "repair-restoration",
            ServiceType::Commercial => "commercial",
            ServiceType::Other => "other",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::CustomFurniture => "Custom Furniture",
            ServiceType::DoorsWindows => "Doors & Windows",
            ServiceType::RepairRestoration => "Repair & Restoration",
            ServiceType::Commercial => "Commercial Carpentry",
            ServiceType::Other => "Other Services",
        }
    }

    /// Все категории в порядке отображения в форме
    pub fn all() -> [ServiceType; 5] {
        [
            ServiceType::CustomFurniture,
            ServiceType::DoorsWindows,
            ServiceType::RepairRestoration,
            ServiceType::Commercial,
            ServiceType::Other,
        ]
    }

    /// Парсинг из строки (значение `<select>`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "custom-furniture" => Some(ServiceType::CustomFurniture),
            "doors-windows" => Some(ServiceType::DoorsWindows),
            "repair-restoration" => Some(ServiceType::RepairRestoration),
            "commercial" => Some(ServiceType::Commercial),
            "other" => Some(ServiceType::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip_through_from_code() {
        for service in ServiceType::all() {
            assert_eq!(ServiceType::from_code(service.code()), Some(service));
        }
        assert_eq!(ServiceType::from_code(""), None);
    }

    #[test]
    fn test_unknown_tag_degrades_to_other() {
        let parsed: ServiceType = serde_json::from_str("\"garden-sheds\"").unwrap();
        assert_eq!(parsed, ServiceType::Other);

        let parsed: ServiceType = serde_json::from_str("\"doors-windows\"").unwrap();
        assert_eq!(parsed, ServiceType::DoorsWindows);
    }
}
