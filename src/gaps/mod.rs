//! Module for finding anomalously long pauses between adjacent records.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
