//! Canonical device records and report assembly

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::allowlist::AllowList;
use crate::error::Result;

/// Classification constant; only mass-storage devices are reported.
pub const MASS_STORAGE_TYPE: &str = "Mass Storage Device";
/// The enumerators only see currently-present devices.
pub const STATUS_CONNECTED: &str = "connected";
/// Bus path sentinel for platforms without a per-device bus query.
pub const BUS_NOT_APPLICABLE: &str = "N/A";
/// Address sentinel when interface enumeration fails or finds nothing.
pub const IP_UNKNOWN: &str = "unknown";

/// One enumerated device, keyed by normalized serial in a [`DeviceMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumeratedDevice {
    /// Bus device path, `None` where the platform cannot supply one.
    pub bus_device: Option<String>,
    /// Human-readable model name, may be empty.
    pub name: String,
}

/// Enumerator output: normalized serial -> device.
///
/// The map key enforces serial uniqueness within one run, and the ordered
/// map gives the report a deterministic record order.
pub type DeviceMap = BTreeMap<String, EnumeratedDevice>;

/// Canonical output record, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Normalized serial; join key against the allow-list.
    pub device: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub status: String,
    pub bus_device: String,
    /// Comma-joined local IPv4 addresses, or [`IP_UNKNOWN`].
    pub ip: String,
    pub allow: bool,
}

/// Join enumerated devices with the allow-list and local addresses.
pub fn assemble(devices: &DeviceMap, allow_list: &AllowList, ip: &str) -> Vec<DeviceRecord> {
    devices
        .iter()
        .map(|(serial, device)| DeviceRecord {
            device: serial.clone(),
            kind: MASS_STORAGE_TYPE.to_string(),
            name: device.name.clone(),
            status: STATUS_CONNECTED.to_string(),
            bus_device: device
                .bus_device
                .clone()
                .unwrap_or_else(|| BUS_NOT_APPLICABLE.to_string()),
            ip: ip.to_string(),
            allow: allow_list.contains(serial),
        })
        .collect()
}

/// Serialize the report as pretty-printed JSON.
///
/// This is the only fatal error path in a run; every other failure
/// degrades to an empty or partial result.
pub fn to_json(records: &[DeviceRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Device: {}\nType: {}\nName: {}\nStatus: {}\nBus Device: {}\nIP: {}\nAllow: {}",
            self.device, self.kind, self.name, self.status, self.bus_device, self.ip, self.allow
        )
    }
}
