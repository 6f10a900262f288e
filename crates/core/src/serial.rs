//! Serial number normalization

/// Maximum length of a canonical serial identifier, in characters.
pub const SERIAL_CAP: usize = 20;

/// Truncate a raw serial to the canonical cap.
///
/// The two enumeration backends report serials of different native lengths
/// for the same physical unit; capping both sides makes identifiers
/// comparable across backends and against the allow-list. Strings at or
/// under the cap pass through unchanged, including the empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars().take(SERIAL_CAP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_serial_passes_through() {
        assert_eq!(normalize("ABC123"), "ABC123");
    }

    #[test]
    fn serial_at_cap_passes_through() {
        let s = "A".repeat(SERIAL_CAP);
        assert_eq!(normalize(&s), s);
    }

    #[test]
    fn long_serial_is_truncated() {
        let s = "0123456789ABCDEFGHIJKLMNOP";
        let normalized = normalize(s);
        assert_eq!(normalized.chars().count(), SERIAL_CAP);
        assert_eq!(normalized, "0123456789ABCDEFGHIJ");
    }

    #[test]
    fn empty_serial_passes_through() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 25 two-byte characters must not panic and must cap at 20 chars
        let s = "é".repeat(25);
        assert_eq!(normalize(&s).chars().count(), SERIAL_CAP);
    }
}
