//! Removable-disk table parser (wmic-style output)
//!
//! The listing command prints one header line and one whitespace-separated
//! row per disk, with columns in alphabetical order of the requested field
//! list. Model names may contain spaces, so the serial column is located
//! from the field list and every token before it is folded back into the
//! model — not assumed to always be second-to-last.

/// One parsed row of the disk table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Model tokens joined with single spaces, may be empty.
    pub model: String,
    /// Raw serial number token.
    pub serial: String,
}

/// Parse a disk table into rows.
///
/// `fields` is the field list the listing command was asked for. The first
/// non-blank line is the header and is discarded; rows with too few tokens
/// are silently skipped. Returns no rows when `SerialNumber` was not among
/// the requested fields.
pub fn parse_disk_table(output: &str, fields: &[&str]) -> Vec<TableRow> {
    let mut ordered: Vec<&str> = fields.to_vec();
    ordered.sort_unstable_by_key(|f| f.to_ascii_lowercase());

    let Some(serial_pos) = ordered
        .iter()
        .position(|f| f.eq_ignore_ascii_case("SerialNumber"))
    else {
        return Vec::new();
    };
    let trailing = ordered.len() - serial_pos - 1;
    let min_tokens = serial_pos + 1 + trailing;

    let mut rows = Vec::new();
    let mut saw_header = false;

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < min_tokens {
            continue;
        }

        let serial_idx = tokens.len() - 1 - trailing;
        rows.push(TableRow {
            model: tokens[..serial_idx].join(" "),
            serial: tokens[serial_idx].to_string(),
        });
    }

    rows
}
