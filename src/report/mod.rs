//! Module for printing the report and serializing the summary file.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
