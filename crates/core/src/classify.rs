//! Mass-storage classification policy
//!
//! The udev property dump exposes the interface descriptors of a device as
//! one string of colon-separated `class/subclass/protocol` hex triples,
//! e.g. `:080650:030000:`. A device counts as mass storage when one of its
//! interfaces carries class code `08`.

use serde::{Deserialize, Serialize};

/// Interface-class marker for the USB mass-storage class (`08`).
const CLASS_MARKER: &str = ":08";

/// Composite class/subclass/protocol signature for SCSI bulk-only transport.
const EXACT_MARKER: &str = "080650";

/// Classification policy for the `ID_USB_INTERFACES` signature.
///
/// The class-byte match is the canonical policy; the exact triple trades
/// coverage for fewer false positives and is kept selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceFilter {
    /// Match on the interface class byte alone (`:08`).
    #[default]
    Class,
    /// Match the exact class/subclass/protocol triple (`080650`).
    Exact,
}

impl InterfaceFilter {
    /// Decide whether an interface signature marks a mass-storage device.
    pub fn is_mass_storage(&self, interfaces: &str) -> bool {
        match self {
            Self::Class => interfaces.contains(CLASS_MARKER),
            Self::Exact => interfaces.contains(EXACT_MARKER),
        }
    }
}
