//! Module for the exclusive categorization of records by log level.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
