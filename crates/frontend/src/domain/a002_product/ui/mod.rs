pub mod card;
pub mod details;
pub mod view;

pub use view::ProductsSection;
