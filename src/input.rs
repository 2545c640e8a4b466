//! Input utility functions

/// Parse a user-entered analysis location.
///
/// Locations are hexadecimal, with an optional bank context prepended and
/// separated by a colon: `0150` names a fixed-region address, `3:4000`
/// names an address in bank 3's switchable window.
pub fn parse_start(text: &str) -> Option<(Option<u16>, u16)> {
    let pieces: Vec<&str> = text.split(':').collect();

    match pieces.as_slice() {
        [addr] => Some((None, u16::from_str_radix(addr, 16).ok()?)),
        [bank, addr] => Some((
            Some(u16::from_str_radix(bank, 16).ok()?),
            u16::from_str_radix(addr, 16).ok()?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_start;

    #[test]
    fn bare_addresses_parse_without_a_bank() {
        assert_eq!(parse_start("0150"), Some((None, 0x0150)));
        assert_eq!(parse_start("C000"), Some((None, 0xC000)));
    }

    #[test]
    fn bank_prefixes_parse() {
        assert_eq!(parse_start("3:4000"), Some((Some(3), 0x4000)));
        assert_eq!(parse_start("1F:7FFF"), Some((Some(0x1F), 0x7FFF)));
    }

    #[test]
    fn junk_is_rejected() {
        assert_eq!(parse_start(""), None);
        assert_eq!(parse_start("xyz"), None);
        assert_eq!(parse_start("1:2:3"), None);
    }
}
