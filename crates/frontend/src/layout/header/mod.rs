pub mod header;

pub use header::{follow_anchor, Header};
