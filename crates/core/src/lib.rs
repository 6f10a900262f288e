//! Core data model and parsing for usbwatch
//!
//! This crate holds everything that can be tested without touching the
//! host: the serial normalizer, the parsers for the platform enumeration
//! tools' text output, the mass-storage classification policy, the
//! allow-list set, and report assembly with both renderings.
//!
//! Process spawning, the network fetch, and address resolution live in the
//! `usbwatch` binary crate.

pub mod allowlist;
pub mod classify;
pub mod collect;
pub mod error;
pub mod parse;
pub mod report;
pub mod serial;

pub use allowlist::AllowList;
pub use classify::InterfaceFilter;
pub use error::{Error, Result};
pub use report::{DeviceMap, DeviceRecord, EnumeratedDevice};
