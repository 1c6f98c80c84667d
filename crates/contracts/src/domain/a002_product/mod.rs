//! Каталог изделий и список для запроса цены

pub mod aggregate;
pub mod catalog;
pub mod quote;

pub use aggregate::{Product, ProductCategory, ProductId};
pub use quote::{QuoteItem, QuoteList};
