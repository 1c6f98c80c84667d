pub mod a001_review;
pub mod a002_product;
pub mod a003_contact;
