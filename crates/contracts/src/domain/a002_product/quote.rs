use super::aggregate::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Позиция списка для запроса цены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// Список изделий, по которым клиент хочет получить цену.
/// Хранится в localStorage как JSON-массив.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteList {
    items: Vec<QuoteItem>,
}

impl QuoteList {
    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    /// Количество разных изделий (не штук)
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Добавить изделие; повторное добавление увеличивает количество
    pub fn add(&mut self, product: &Product, now: DateTime<Utc>) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(QuoteItem {
                product: product.clone(),
                quantity: 1,
                added_at: now,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::catalog::find_product;

    #[test]
    fn test_add_increments_quantity() {
        let bed = find_product(ProductId(1)).unwrap();
        let desk = find_product(ProductId(6)).unwrap();
        let now = Utc::now();

        let mut list = QuoteList::default();
        list.add(bed, now);
        list.add(desk, now);
        list.add(bed, now);

        assert_eq!(list.count(), 2);
        assert_eq!(list.quantity_of(ProductId(1)), 2);
        assert_eq!(list.quantity_of(ProductId(6)), 1);
        assert_eq!(list.quantity_of(ProductId(3)), 0);
    }

    #[test]
    fn test_storage_shape_is_flat_array() {
        let mut list = QuoteList::default();
        list.add(find_product(ProductId(2)).unwrap(), Utc::now());

        let json = serde_json::to_value(&list).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["id"], 2);
        assert_eq!(first["quantity"], 1);
        assert!(first.get("addedAt").is_some());

        let restored: QuoteList = serde_json::from_value(json).unwrap();
        assert_eq!(restored, list);
    }
}
