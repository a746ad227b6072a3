pub mod logging;
pub mod result_writer;

pub use logging::{Logger, LoggerTrait};
pub use result_writer::write_results;
