//! Module for the basic statistics over the loaded records.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
