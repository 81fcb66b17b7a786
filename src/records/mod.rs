//! Module for loading the captured log records from the JSON logfile.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
