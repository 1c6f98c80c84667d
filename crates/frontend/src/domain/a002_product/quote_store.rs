//! Список для запроса цены в localStorage

use crate::shared::config::site_config;
use crate::shared::storage;
use contracts::domain::a002_product::QuoteList;

pub fn load() -> QuoteList {
    storage::load_json::<QuoteList>(&site_config().quotes.storage_key).unwrap_or_default()
}

pub fn save(list: &QuoteList) {
    storage::save_json(&site_config().quotes.storage_key, list);
}
