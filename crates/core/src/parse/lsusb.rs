//! `lsusb` bus-listing parser
//!
//! A listing line looks like:
//!
//! ```text
//! Bus 001 Device 004: ID abcd:1234 Example Corp. Flash Drive
//! ```
//!
//! The bus and device index tokens identify the device node under
//! `/dev/bus/usb`; the device token carries one trailing punctuation
//! character that must be stripped.

/// A candidate device position on the USB bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusAddress {
    /// Bus index token, e.g. `001`.
    pub bus: String,
    /// Device index token with the trailing colon stripped, e.g. `004`.
    pub device: String,
}

impl BusAddress {
    /// Device node path for this bus position.
    pub fn path(&self) -> String {
        format!("/dev/bus/usb/{}/{}", self.bus, self.device)
    }
}

/// Parse bus-listing text into candidate addresses.
///
/// Blank lines and lines with fewer than six whitespace tokens are
/// silently skipped.
pub fn parse_bus_listing(output: &str) -> Vec<BusAddress> {
    let mut candidates = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 6 {
            continue;
        }

        let bus = parts[1];
        let token = parts[3];
        let Some(last) = token.chars().last() else {
            continue;
        };
        let device = &token[..token.len() - last.len_utf8()];

        candidates.push(BusAddress {
            bus: bus.to_string(),
            device: device.to_string(),
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_listing_line() {
        let listing = "Bus 001 Device 004: ID abcd:1234 Example Corp. Flash Drive\n";
        let candidates = parse_bus_listing(listing);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].bus, "001");
        assert_eq!(candidates[0].device, "004");
        assert_eq!(candidates[0].path(), "/dev/bus/usb/001/004");
    }

    #[test]
    fn skips_blank_and_short_lines() {
        let listing = "\n\nBus 001 Device 002: ID\nBus 002 Device 003: ID 1d6b:0002 Hub\n";
        let candidates = parse_bus_listing(listing);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path(), "/dev/bus/usb/002/003");
    }

    #[test]
    fn parses_multiple_lines() {
        let listing = "\
Bus 001 Device 001: ID 1d6b:0002 Linux Foundation 2.0 root hub
Bus 001 Device 004: ID 0781:5567 SanDisk Corp. Cruzer Blade
Bus 002 Device 001: ID 1d6b:0003 Linux Foundation 3.0 root hub
";
        let candidates = parse_bus_listing(listing);

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1].path(), "/dev/bus/usb/001/004");
    }

    #[test]
    fn empty_output_yields_no_candidates() {
        assert!(parse_bus_listing("").is_empty());
    }
}
