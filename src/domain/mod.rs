pub mod args;
pub mod pattern;
pub mod validation;
pub mod file_walker;

pub use args::ArgumentStore;
pub use pattern::{mask_to_regex, MatchPredicate, SearchMode};
pub use validation::{validate, SearchParams};
pub use file_walker::{scan_directory, search, walk, ScanOutcome};
