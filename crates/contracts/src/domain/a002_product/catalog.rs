//! Статический каталог изделий мастерской

use super::aggregate::{Product, ProductCategory, ProductId};
use once_cell::sync::Lazy;

/// Сколько избранных изделий показывать на главной
pub const FEATURED_LIMIT: usize = 5;

/// (id, название, описание, картинка, избранное)
const ENTRIES: &[(u32, &str, &str, &str, bool)] = &[
    (1, "Elegant Wooden Bed Frame", "Beautifully crafted bed frame with intricate wood carvings and sturdy construction", "image/1.jpeg", true),
    (2, "Classic Wooden Dining Table", "Timeless dining table design perfect for family gatherings and special occasions", "image/16.jpeg", true),
    (3, "Premium Wardrobe Unit", "Spacious wardrobe with multiple compartments and premium wood finish", "image/8.jpeg", true),
    (4, "Modern TV Entertainment Unit", "Contemporary design TV unit with storage space and sleek wood finish", "image/4.jpeg", true),
    (5, "Traditional Wooden Sofa Set", "Classic sofa design combining comfort with traditional wood craftsmanship", "image/5.jpeg", true),
    (6, "Compact Study Desk", "Functional study desk with drawers and space-saving design", "image/19.jpeg", false),
    (7, "Rustic Wooden Bookshelf", "Elegant bookshelf with multiple shelves for books and decor", "image/7.jpeg", false),
    (8, "Modern Office Chair", "Ergonomic office chair with adjustable height and lumbar support", "image/20.jpeg", false),
    (9, "Antique Wooden Cabinet", "Vintage cabinet with intricate carvings and ample storage", "image/14.jpeg", false),
    (10, "Outdoor Wooden Bench", "Durable bench for garden or patio with weather-resistant finish", "image/15.jpeg", false),
    (11, "Kids Wooden Play Table", "Safe and sturdy play table for children with rounded edges", "image/18.jpeg", false),
    (12, "Executive Desk", "Large executive desk with drawers and cable management", "image/12.jpeg", false),
    (13, "Wall-Mounted Shelves", "Space-saving wall shelves for books and display items", "image/2.jpeg", false),
    (14, "Dining Room Chairs Set", "Set of 4 comfortable dining chairs with wooden frames", "image/16.jpeg", false),
    (15, "Bedside Table", "Compact bedside table with drawer and shelf", "image/17.jpeg", false),
    (16, "Console Table", "Slim console table perfect for entryways or hallways", "image/13.jpeg", false),
    (17, "Rocking Chair", "Traditional rocking chair with smooth motion and comfort", "image/21.jpeg", false),
    (18, "Storage Ottoman", "Multi-purpose ottoman with hidden storage compartment", "image/10.jpeg", false),
];

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|(id, name, description, image, featured)| Product {
            id: ProductId(*id),
            name: (*name).to_string(),
            description: (*description).to_string(),
            image: (*image).to_string(),
            category: ProductCategory::Furniture,
            featured: *featured,
        })
        .collect()
});

/// Все изделия в порядке каталога
pub fn all_products() -> &'static [Product] {
    &CATALOG
}

/// Первые избранные изделия для главной страницы
pub fn featured_products() -> Vec<Product> {
    CATALOG
        .iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

pub fn find_product(id: ProductId) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Фильтр по категории (`None` = все) и строке поиска
pub fn filter_products(category: Option<ProductCategory>, query: &str) -> Vec<Product> {
    CATALOG
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .filter(|p| p.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_featured() {
        assert_eq!(all_products().len(), 18);
        let featured = featured_products();
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.featured));
        assert_eq!(featured[0].id, ProductId(1));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = filter_products(None, "DESK");
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Compact Study Desk", "Executive Desk"]);

        // совпадение по описанию
        let found = filter_products(Some(ProductCategory::Furniture), "lumbar");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId(8));

        assert_eq!(filter_products(None, "  ").len(), 18);
        assert!(filter_products(None, "spaceship").is_empty());
    }

    #[test]
    fn test_find_and_inquiry_message() {
        let product = find_product(ProductId(17)).unwrap();
        assert_eq!(
            product.inquiry_message(),
            "Hi, I'm interested in the Rocking Chair. Please provide more details and pricing information."
        );
        assert!(find_product(ProductId(99)).is_none());
    }
}
