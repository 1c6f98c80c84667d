//! Общие типы сайта мастерской: отзывы, каталог, обратная связь.
//! Используются фронтендом и описывают формат обмена с API отзывов.

pub mod domain;
pub mod enums;
pub mod shared;
