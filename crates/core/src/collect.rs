//! Folding parsed tool output into the canonical device map

use tracing::debug;

use crate::classify::InterfaceFilter;
use crate::parse::{udev, wmic};
use crate::report::{DeviceMap, EnumeratedDevice};
use crate::serial;

/// Fold per-device property dumps into a device map.
///
/// `dumps` pairs each candidate's bus path with its captured property dump.
/// Candidates without a non-empty short serial or whose interface signature
/// fails the filter are dropped; the map key collapses duplicate serials.
pub fn from_property_dumps(
    dumps: impl IntoIterator<Item = (String, String)>,
    filter: InterfaceFilter,
) -> DeviceMap {
    let mut devices = DeviceMap::new();

    for (path, dump) in dumps {
        let props = udev::parse_property_dump(&dump);

        let interfaces = props.usb_interfaces.unwrap_or_default();
        let Some(raw_serial) = props.serial_short.filter(|s| !s.is_empty()) else {
            debug!("Skipping {}: no short serial", path);
            continue;
        };
        if !filter.is_mass_storage(&interfaces) {
            debug!("Skipping {}: not mass storage ({})", path, interfaces);
            continue;
        }

        devices.insert(
            serial::normalize(&raw_serial),
            EnumeratedDevice {
                bus_device: Some(path),
                name: props.model.unwrap_or_default(),
            },
        );
    }

    devices
}

/// Fold a removable-disk table into a device map.
///
/// The table query itself is the classification filter on this platform,
/// so every parsed row becomes an entry. Bus paths are not available and
/// stay `None`.
pub fn from_disk_table(table: &str, fields: &[&str]) -> DeviceMap {
    wmic::parse_disk_table(table, fields)
        .into_iter()
        .map(|row| {
            (
                serial::normalize(&row.serial),
                EnumeratedDevice {
                    bus_device: None,
                    name: row.model,
                },
            )
        })
        .collect()
}
