//! Local address resolution

use std::net::IpAddr;

use tracing::warn;
use usbwatch_core::report::IP_UNKNOWN;

/// Comma-joined non-loopback IPv4 addresses of the host.
///
/// Returns the `"unknown"` sentinel when interface enumeration fails or no
/// qualifying address exists; the report never omits the field.
pub fn local_ipv4_addresses() -> String {
    let interfaces = match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            warn!("Failed to enumerate interface addresses: {}", e);
            return IP_UNKNOWN.to_string();
        }
    };

    let ips: Vec<String> = interfaces
        .iter()
        .filter(|iface| !iface.is_loopback())
        .filter_map(|iface| match iface.ip() {
            IpAddr::V4(v4) => Some(v4.to_string()),
            IpAddr::V6(_) => None,
        })
        .collect();

    if ips.is_empty() {
        IP_UNKNOWN.to_string()
    } else {
        ips.join(", ")
    }
}
