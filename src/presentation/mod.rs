pub mod display;

pub use display::{format_duration, walk_spinner, SearchSummary};
