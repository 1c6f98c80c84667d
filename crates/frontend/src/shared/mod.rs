pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod form_fields;
pub mod icons;
pub mod modal_frame;
pub mod notifications;
pub mod stars;
pub mod storage;
pub mod viewport;
