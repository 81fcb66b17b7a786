//! Module for the independent problem pattern checks over the records.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
