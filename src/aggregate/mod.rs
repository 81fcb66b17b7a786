//! Module for aggregating duplicate problem records by content prefix.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
