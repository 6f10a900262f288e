//! `udevadm info` property-dump parser
//!
//! The dump is line-oriented `E: KEY=VALUE` text. Only the three keys the
//! enumerator needs are extracted; everything else is ignored.

/// Properties extracted from a per-device property dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UdevProperties {
    /// `ID_SERIAL_SHORT` — short-form unique hardware identifier.
    pub serial_short: Option<String>,
    /// `ID_USB_INTERFACES` — interface-class signature string.
    pub usb_interfaces: Option<String>,
    /// `ID_MODEL` — human-readable model string.
    pub model: Option<String>,
}

const SERIAL_KEY: &str = "E: ID_SERIAL_SHORT=";
const INTERFACES_KEY: &str = "E: ID_USB_INTERFACES=";
const MODEL_KEY: &str = "E: ID_MODEL=";

/// Extract the consumed properties from a property dump.
///
/// If a key appears more than once the last occurrence wins.
pub fn parse_property_dump(output: &str) -> UdevProperties {
    let mut props = UdevProperties::default();

    for line in output.lines() {
        if let Some(value) = line.strip_prefix(SERIAL_KEY) {
            props.serial_short = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(INTERFACES_KEY) {
            props.usb_interfaces = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(MODEL_KEY) {
            props.model = Some(value.trim().to_string());
        }
    }

    props
}
