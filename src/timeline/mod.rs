//! Module for extracting the key build events into a timeline.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
