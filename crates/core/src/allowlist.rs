//! Allow-list membership set

use std::collections::HashSet;

/// Set of serial numbers considered authorized.
///
/// Built once per run from the fetched line list and read-only afterwards.
/// An empty list means nothing is allowed, which is the safe default when
/// the fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: HashSet<String>,
}

impl AllowList {
    /// Build the set from a newline-delimited body.
    ///
    /// Each line is trimmed; blank lines are discarded. Lookup is exact
    /// string match, so entries are expected to already be in canonical
    /// (capped) form.
    pub fn from_lines(body: &str) -> Self {
        let entries = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { entries }
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.entries.contains(serial)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
