pub mod rating_filter;
pub mod service_type;
pub mod star_rating;

pub use rating_filter::RatingFilter;
pub use service_type::ServiceType;
pub use star_rating::StarRating;
