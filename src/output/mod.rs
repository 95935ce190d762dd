//! Result files and console reporting.

mod report;
mod writer;

pub use report::ConsoleReport;
pub use writer::{input_stem, ResultWriter, WriteError, WrittenFiles};
