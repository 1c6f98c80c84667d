pub mod quote_store;
pub mod ui;
