pub mod form;

pub use form::ContactSection;
