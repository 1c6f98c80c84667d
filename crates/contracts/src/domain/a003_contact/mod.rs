//! Форма обратной связи

pub mod aggregate;

pub use aggregate::{ContactError, ContactRequest, ContactSubject};
