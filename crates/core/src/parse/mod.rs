//! Parsers for platform enumeration tool output
//!
//! Each parser takes the raw text a tool produced and returns structured
//! candidates. Malformed lines are skipped, never fatal; running the
//! tools and capturing their output is the binary crate's job.

pub mod lsusb;
pub mod udev;
pub mod wmic;
