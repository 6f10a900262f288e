//! End-to-end assembly tests over canned enumeration-tool output.
//!
//! These drive the full parse -> classify -> normalize -> assemble chain
//! without spawning any external tool.

use usbwatch_core::parse::lsusb;
use usbwatch_core::report::{self, BUS_NOT_APPLICABLE};
use usbwatch_core::{AllowList, InterfaceFilter, collect};

const BUS_LISTING: &str = "Bus 001 Device 004: ID abcd:1234 Example\n";

const PROPERTY_DUMP: &str = "\
E: ID_SERIAL_SHORT=ABC123
E: ID_USB_INTERFACES=abc:080650:def
E: ID_MODEL=ExampleDrive
";

/// Pair every listing candidate with a canned property dump.
fn dumps_for(listing: &str, dump: &str) -> Vec<(String, String)> {
    lsusb::parse_bus_listing(listing)
        .into_iter()
        .map(|candidate| (candidate.path(), dump.to_string()))
        .collect()
}

#[test]
fn posix_scenario_assembles_expected_record() {
    let devices = collect::from_property_dumps(
        dumps_for(BUS_LISTING, PROPERTY_DUMP),
        InterfaceFilter::Class,
    );
    let allow = AllowList::from_lines("ABC123\n");

    let records = report::assemble(&devices, &allow, "192.168.1.10");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.device, "ABC123");
    assert_eq!(record.kind, "Mass Storage Device");
    assert_eq!(record.name, "ExampleDrive");
    assert_eq!(record.status, "connected");
    assert_eq!(record.bus_device, "/dev/bus/usb/001/004");
    assert_eq!(record.ip, "192.168.1.10");
    assert!(record.allow);
}

#[test]
fn non_storage_interface_is_filtered_out() {
    let dump = "E: ID_SERIAL_SHORT=ABC123\nE: ID_USB_INTERFACES=abc:0300:def\n";
    let devices =
        collect::from_property_dumps(dumps_for(BUS_LISTING, dump), InterfaceFilter::Class);
    assert!(devices.is_empty());
}

#[test]
fn missing_serial_is_filtered_out() {
    let dump = "E: ID_USB_INTERFACES=abc:080650:def\nE: ID_MODEL=ExampleDrive\n";
    let devices =
        collect::from_property_dumps(dumps_for(BUS_LISTING, dump), InterfaceFilter::Class);
    assert!(devices.is_empty());
}

#[test]
fn exact_filter_rejects_relaxed_signature() {
    let dump = "E: ID_SERIAL_SHORT=ABC123\nE: ID_USB_INTERFACES=abc:0803ff:def\n";

    let relaxed =
        collect::from_property_dumps(dumps_for(BUS_LISTING, dump), InterfaceFilter::Class);
    assert_eq!(relaxed.len(), 1);

    let strict = collect::from_property_dumps(dumps_for(BUS_LISTING, dump), InterfaceFilter::Exact);
    assert!(strict.is_empty());
}

#[test]
fn duplicate_serials_collapse_after_normalization() {
    // Two candidates whose serials agree on the first 20 characters must
    // produce a single entry.
    let dumps = vec![
        (
            "/dev/bus/usb/001/004".to_string(),
            format!(
                "E: ID_SERIAL_SHORT={}XXXX\nE: ID_USB_INTERFACES=:080650:\n",
                "S".repeat(20)
            ),
        ),
        (
            "/dev/bus/usb/001/005".to_string(),
            format!(
                "E: ID_SERIAL_SHORT={}YYYY\nE: ID_USB_INTERFACES=:080650:\n",
                "S".repeat(20)
            ),
        ),
    ];

    let devices = collect::from_property_dumps(dumps, InterfaceFilter::Class);

    assert_eq!(devices.len(), 1);
    assert!(devices.contains_key(&"S".repeat(20)));
}

#[test]
fn windows_scenario_uses_bus_sentinel() {
    let table = "Model  SerialNumber  Status\nExampleDrive SN000111222333 OK\n";
    let devices = collect::from_disk_table(table, &["Model", "SerialNumber", "Status"]);

    let records = report::assemble(&devices, &AllowList::default(), "unknown");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].device, "SN000111222333");
    assert_eq!(records[0].name, "ExampleDrive");
    assert_eq!(records[0].bus_device, BUS_NOT_APPLICABLE);
    assert!(!records[0].allow);
}

#[test]
fn empty_enumeration_yields_zero_records() {
    let devices = collect::from_disk_table("", &["Model", "SerialNumber", "Status"]);
    let records = report::assemble(&devices, &AllowList::from_lines("SN1\n"), "10.0.0.1");
    assert!(records.is_empty());
}
