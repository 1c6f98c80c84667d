pub mod card;
pub mod filter_bar;
pub mod sink;
pub mod stats_panel;
pub mod view;
pub mod write_form;

pub use sink::{FeedSignals, SignalFeedView};
pub use view::ReviewsSection;
