//! Syntactic IP address validation
//!
//! Pure classification of strings as IPv4, IPv6, or invalid. No I/O, no
//! side effects; these functions never fail, they only return booleans.
//! Once accepted, an address is treated as an opaque token — the checker
//! never parses it into octets or groups.

/// Check whether `s` is a syntactically valid IPv4 address.
///
/// The input must split into exactly 4 dot-separated segments, each the
/// canonical decimal string of an integer in [0, 255]. Leading zeros,
/// signs, and stray characters are rejected: `"01.2.3.4"`, `"1.2.3.256"`,
/// and `"1.2.3"` are all invalid.
pub fn is_valid_ipv4(s: &str) -> bool {
    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() != 4 {
        return false;
    }
    segments.iter().all(|segment| is_canonical_octet(segment))
}

/// Check whether `s` looks like an IPv6 address.
///
/// This is a weak structural heuristic, not RFC 4291 validation: the
/// string must contain a colon and split into at least 2 colon-separated
/// groups. It accepts malformed inputs such as `"fe80:1"`. The looseness
/// is a deliberate, documented product decision; tightening it would
/// change the set of accepted inputs.
pub fn is_valid_ipv6(s: &str) -> bool {
    s.contains(':') && s.split(':').count() >= 2
}

/// Check whether `s` is a syntactically valid IPv4 or IPv6 address.
pub fn is_valid(s: &str) -> bool {
    is_valid_ipv4(s) || is_valid_ipv6(s)
}

/// A segment is valid iff it is the canonical decimal rendering of an
/// integer in [0, 255]: digits only, no leading zero unless the segment
/// is exactly "0".
fn is_canonical_octet(segment: &str) -> bool {
    if segment.is_empty() || segment.len() > 3 {
        return false;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return false;
    }
    match segment.parse::<u16>() {
        Ok(n) => n <= 255,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("10.0.0.5"));
    }

    #[test]
    fn test_invalid_ipv4() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("01.2.3.4"));
        assert!(!is_valid_ipv4("1.2.3.04"));
        assert!(!is_valid_ipv4("1.2.3.+4"));
        assert!(!is_valid_ipv4("1.2.3."));
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4(" 1.2.3.4"));
    }

    #[test]
    fn test_ipv6_heuristic() {
        assert!(is_valid_ipv6("::1"));
        assert!(is_valid_ipv6("2001:db8::8a2e:370:7334"));
        // Known looseness: not a real IPv6 address, but accepted
        assert!(is_valid_ipv6("fe80:1"));

        assert!(!is_valid_ipv6("not-an-ip"));
        assert!(!is_valid_ipv6("192.168.1.1"));
        assert!(!is_valid_ipv6(""));
    }

    #[test]
    fn test_is_valid_is_the_disjunction() {
        let samples = [
            "192.168.1.1",
            "256.1.1.1",
            "1.2.3",
            "01.2.3.4",
            "::1",
            "fe80:1",
            "not-an-ip",
            "",
            "1.2.3.4:",
            "....",
        ];
        for s in samples {
            assert_eq!(
                is_valid(s),
                is_valid_ipv4(s) || is_valid_ipv6(s),
                "disjunction property violated for {:?}",
                s
            );
        }
    }
}
