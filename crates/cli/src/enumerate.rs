//! Platform device enumerators
//!
//! Two closed variants selected once at startup by host OS. Both produce
//! the same map shape: normalized serial -> bus path + model name. All
//! command failures are contained; an enumerator returns fewer (or zero)
//! entries, never an error.

use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};
use usbwatch_core::collect;
use usbwatch_core::parse::lsusb;
use usbwatch_core::report::DeviceMap;

use crate::config::EnumerateSettings;

/// Field list requested from the removable-disk listing command.
///
/// The table parser derives the serial column position from this list, so
/// it must match the `get` argument exactly.
const DISK_FIELDS: &[&str] = &["Model", "SerialNumber", "Status"];

/// Host platform enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enumerator {
    /// lsusb bus listing plus a per-device udev property dump
    Posix,
    /// Single removable-disk table query
    Windows,
}

impl Enumerator {
    /// Pick the enumerator for the running host, `None` if unsupported.
    pub fn for_host() -> Option<Self> {
        match std::env::consts::OS {
            "linux" => Some(Self::Posix),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Enumerate attached mass-storage devices.
    pub async fn enumerate(&self, settings: &EnumerateSettings) -> DeviceMap {
        match self {
            Self::Posix => enumerate_posix(settings).await,
            Self::Windows => enumerate_windows(settings).await,
        }
    }
}

/// Run one external command, bounded by the configured timeout.
///
/// Returns `None` on spawn failure, non-zero exit, or timeout; the caller
/// decides whether that kills the whole enumeration or just one candidate.
/// `kill_on_drop` ensures a timed-out command does not keep running after
/// its future is dropped.
async fn run_command(program: &str, args: &[&str], timeout_secs: u64) -> Option<String> {
    let result = timeout(
        Duration::from_secs(timeout_secs),
        Command::new(program).args(args).kill_on_drop(true).output(),
    )
    .await;

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            warn!("Failed to run {}: {}", program, e);
            return None;
        }
        Err(_) => {
            warn!("{} timed out after {}s", program, timeout_secs);
            return None;
        }
    };

    if !output.status.success() {
        warn!("{} exited with {}", program, output.status);
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

async fn enumerate_posix(settings: &EnumerateSettings) -> DeviceMap {
    let Some(listing) = run_command("lsusb", &[], settings.command_timeout_secs).await else {
        return DeviceMap::new();
    };

    let mut dumps = Vec::new();
    for candidate in lsusb::parse_bus_listing(&listing) {
        let path = candidate.path();
        let name_arg = format!("--name={path}");
        let dump = run_command(
            "udevadm",
            &["info", "--query=all", &name_arg],
            settings.command_timeout_secs,
        )
        .await;

        match dump {
            Some(dump) => dumps.push((path, dump)),
            None => warn!("Skipping {}: device query failed", path),
        }
    }

    let devices = collect::from_property_dumps(dumps, settings.interface_filter);
    info!("Enumerated {} mass-storage device(s)", devices.len());
    devices
}

async fn enumerate_windows(settings: &EnumerateSettings) -> DeviceMap {
    let fields = DISK_FIELDS.join(",");
    let args = [
        "diskdrive",
        "where",
        "MediaType='Removable Media'",
        "get",
        fields.as_str(),
    ];

    let Some(table) = run_command("wmic", &args, settings.command_timeout_secs).await else {
        return DeviceMap::new();
    };
    if table.lines().filter(|line| !line.trim().is_empty()).count() < 2 {
        info!("Removable-disk listing returned no rows");
        return DeviceMap::new();
    }

    let devices = collect::from_disk_table(&table, DISK_FIELDS);
    info!("Enumerated {} removable device(s)", devices.len());
    devices
}
