pub mod back_to_top;
pub mod faq;
pub mod hero;
pub mod services;

pub use back_to_top::BackToTop;
pub use faq::FaqSection;
pub use hero::HeroSection;
pub use services::ServicesSection;
