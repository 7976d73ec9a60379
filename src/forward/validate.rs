/// Check whether a string is a valid port spec: either a single port or a
/// hyphenated range "a-b", both sides decimal digits in 1-65535.
pub fn is_valid_port(spec: &str) -> bool {
    if spec.is_empty() {
        return false;
    }

    if let Some((start, end)) = spec.split_once('-') {
        return match (parse_port(start), parse_port(end)) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        };
    }

    parse_port(spec).is_some()
}

/// Parse a decimal port number in 1-65535. Digits only: no sign, no
/// whitespace, no hex/octal.
pub fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // u16::from_str would accept a leading '+', hence the digit check above
    match s.parse::<u16>() {
        Ok(port) if port >= 1 => Some(port),
        _ => None,
    }
}

/// Check whether a string is a dotted-quad IPv4 literal: exactly four
/// dot-separated decimal groups, each 0-255, no leading zeros.
pub fn is_valid_ipv4(spec: &str) -> bool {
    let groups: Vec<&str> = spec.split('.').collect();
    if groups.len() != 4 {
        return false;
    }

    groups.iter().all(|group| is_valid_octet(group))
}

fn is_valid_octet(group: &str) -> bool {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    // "0" is fine, "01" is not
    if group.len() > 1 && group.starts_with('0') {
        return false;
    }

    matches!(group.parse::<u16>(), Ok(value) if value <= 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_port_boundaries() {
        assert!(is_valid_port("1"));
        assert!(is_valid_port("22"));
        assert!(is_valid_port("65535"));

        assert!(!is_valid_port("0"));
        assert!(!is_valid_port("65536"));
        assert!(!is_valid_port("-1"));
        assert!(!is_valid_port("abc"));
        assert!(!is_valid_port(""));
    }

    #[test]
    fn test_port_rejects_garbage() {
        assert!(!is_valid_port("+22"));
        assert!(!is_valid_port(" 22"));
        assert!(!is_valid_port("22 "));
        assert!(!is_valid_port("2a"));
        assert!(!is_valid_port("0x16"));
    }

    #[test]
    fn test_port_ranges() {
        assert!(is_valid_port("80-90"));
        assert!(is_valid_port("80-80"));
        assert!(is_valid_port("1-65535"));

        assert!(!is_valid_port("90-80"));
        assert!(!is_valid_port("0-10"));
        assert!(!is_valid_port("80-65536"));
        assert!(!is_valid_port("80-"));
        assert!(!is_valid_port("-80"));
        assert!(!is_valid_port("a-b"));
    }

    #[test]
    fn test_valid_ipv4() {
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("127.0.0.1"));
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("255.255.255.255"));
    }

    #[test]
    fn test_invalid_ipv4() {
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("192.168.1"));
        assert!(!is_valid_ipv4("192.168.1.1.1"));
        assert!(!is_valid_ipv4("192.168..1"));
        assert!(!is_valid_ipv4(".192.168.1.1"));
        assert!(!is_valid_ipv4("192.168.1.1."));
        assert!(!is_valid_ipv4("256.0.0.1"));
        assert!(!is_valid_ipv4("192.168.01.1"));
        assert!(!is_valid_ipv4("192.168.1.a"));
        assert!(!is_valid_ipv4("192.168.1.-1"));
        assert!(!is_valid_ipv4("example.com"));
    }
}
