use thiserror::Error;

/// Error from parsing a mapping specification. Terminal for the whole call:
/// a single bad entry fails the parse, nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("mapping specification is empty")]
    EmptyInput,

    #[error("mapping specification contains no entries")]
    NoValidEntries,

    #[error("mapping entry '{0}' needs at least local:remote")]
    MalformedEntry(String),

    #[error("invalid port spec '{0}'")]
    MalformedRange(String),

    #[error("port range '{0}' is out of bounds (ports are 1-65535, start <= end)")]
    InvalidRange(String),

    #[error("mapping '{0}' forwards one local port to a range of remote ports")]
    AmbiguousFanout(String),

    #[error("mapping '{entry}' pairs a {local_count}-port local range with a {remote_count}-port remote range")]
    RangeLengthMismatch {
        entry: String,
        local_count: usize,
        remote_count: usize,
    },
}

/// An inclusive port interval resolved from one side of a mapping entry.
///
/// `is_range` records whether the spec was written with a hyphen; "80-80"
/// is a range of one, plain "80" is not a range at all. The distinction
/// matters for the fanout rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
    pub is_range: bool,
}

impl PortRange {
    /// Number of ports in the interval.
    pub fn count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Port at offset `i`, clamped to the start for single ports.
    pub fn port_at(&self, i: usize) -> u16 {
        if self.is_range {
            self.start + i as u16
        } else {
            self.start
        }
    }
}

/// One validated mapping entry, ready for expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub local: PortRange,
    pub host: String,
    pub remote: PortRange,
}

impl ResolvedEntry {
    /// How many forwarding directives this entry expands into.
    pub fn expansion_count(&self) -> usize {
        if self.local.is_range {
            self.local.count()
        } else {
            self.remote.count()
        }
    }
}

/// Parse a comma-separated mapping specification into resolved entries.
///
/// Grammar per entry: `local[:host]:remote` where local and remote are a
/// single port or an inclusive range `a-b`. A missing or empty host field
/// falls back to `default_host`. Entry order is preserved; it becomes the
/// order of the emitted flags.
pub fn parse_mappings(input: &str, default_host: &str) -> Result<Vec<ResolvedEntry>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut entries = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        entries.push(parse_entry(token, default_host)?);
    }

    if entries.is_empty() {
        return Err(ParseError::NoValidEntries);
    }

    Ok(entries)
}

fn parse_entry(token: &str, default_host: &str) -> Result<ResolvedEntry, ParseError> {
    let (local_spec, rest) = token
        .split_once(':')
        .ok_or_else(|| ParseError::MalformedEntry(token.to_string()))?;

    let (host_spec, remote_spec) = match rest.split_once(':') {
        Some((host, remote)) if !host.is_empty() => (host, remote),
        Some((_, remote)) => (default_host, remote),
        None => (default_host, rest),
    };

    let local = resolve_spec(local_spec)?;
    let remote = resolve_spec(remote_spec)?;

    // One local listener cannot bind several remote targets, and a
    // hyphenated spec counts as a range even when start == end.
    if !local.is_range && remote.is_range {
        return Err(ParseError::AmbiguousFanout(token.to_string()));
    }

    if local.is_range && remote.is_range && local.count() != remote.count() {
        return Err(ParseError::RangeLengthMismatch {
            entry: token.to_string(),
            local_count: local.count(),
            remote_count: remote.count(),
        });
    }

    Ok(ResolvedEntry {
        local,
        host: host_spec.to_string(),
        remote,
    })
}

/// Resolve a single side of an entry into a PortRange.
fn resolve_spec(spec: &str) -> Result<PortRange, ParseError> {
    if let Some((start_s, end_s)) = spec.split_once('-') {
        let start = resolve_port(start_s, spec)?;
        let end = resolve_port(end_s, spec)?;

        if start > end {
            return Err(ParseError::InvalidRange(spec.to_string()));
        }

        return Ok(PortRange {
            start,
            end,
            is_range: true,
        });
    }

    let port = resolve_port(spec, spec)?;

    Ok(PortRange {
        start: port,
        end: port,
        is_range: false,
    })
}

/// Parse one half of a spec, distinguishing "not a number" from
/// "a number outside 1-65535".
fn resolve_port(s: &str, spec: &str) -> Result<u16, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedRange(spec.to_string()));
    }

    match s.parse::<u32>() {
        Ok(value) if (1..=65535).contains(&value) => Ok(value as u16),
        Ok(_) => Err(ParseError::InvalidRange(spec.to_string())),
        // more digits than u32 holds is still just out of bounds
        Err(_) => Err(ParseError::InvalidRange(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_to_single() {
        let entries = parse_mappings("80:443", "10.0.0.1").unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.local.start, 80);
        assert!(!entry.local.is_range);
        assert_eq!(entry.host, "10.0.0.1");
        assert_eq!(entry.remote.start, 443);
        assert_eq!(entry.expansion_count(), 1);
    }

    #[test]
    fn test_explicit_host() {
        let entries = parse_mappings("8080:192.168.1.5:80", "10.0.0.1").unwrap();
        assert_eq!(entries[0].host, "192.168.1.5");
    }

    #[test]
    fn test_empty_host_falls_back_to_default() {
        let entries = parse_mappings("8080::80", "10.0.0.1").unwrap();
        assert_eq!(entries[0].host, "10.0.0.1");
    }

    #[test]
    fn test_matched_ranges() {
        let entries = parse_mappings("80-82:10.0.0.5:80-82", "10.0.0.1").unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert!(entry.local.is_range);
        assert!(entry.remote.is_range);
        assert_eq!(entry.expansion_count(), 3);
    }

    #[test]
    fn test_range_to_single_remote() {
        let entries = parse_mappings("8000-8002:80", "10.0.0.1").unwrap();

        let entry = &entries[0];
        assert_eq!(entry.expansion_count(), 3);
        assert_eq!(entry.remote.port_at(0), 80);
        assert_eq!(entry.remote.port_at(2), 80);
    }

    #[test]
    fn test_multiple_entries_preserve_order() {
        let entries = parse_mappings("80:443, 22:2222, 3000:3000", "10.0.0.1").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].local.start, 80);
        assert_eq!(entries[1].local.start, 22);
        assert_eq!(entries[2].local.start, 3000);
    }

    #[test]
    fn test_blank_tokens_skipped() {
        let entries = parse_mappings(" 80:443 , , 22:22 ", "10.0.0.1").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_mappings("", "10.0.0.1"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_only_blank_tokens() {
        assert_eq!(
            parse_mappings(" , , ", "10.0.0.1"),
            Err(ParseError::NoValidEntries)
        );
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            parse_mappings("8080", "10.0.0.1"),
            Err(ParseError::MalformedEntry("8080".to_string()))
        );
    }

    #[test]
    fn test_fanout_rejected() {
        assert_eq!(
            parse_mappings("22:9000-9002", "10.0.0.1"),
            Err(ParseError::AmbiguousFanout("22:9000-9002".to_string()))
        );
    }

    #[test]
    fn test_single_element_range_is_still_fanout() {
        // "9000-9000" was written as a range, so the fanout rule applies
        assert_eq!(
            parse_mappings("22:9000-9000", "10.0.0.1"),
            Err(ParseError::AmbiguousFanout("22:9000-9000".to_string()))
        );
    }

    #[test]
    fn test_range_length_mismatch() {
        assert_eq!(
            parse_mappings("1-3:host:1-4", "10.0.0.1"),
            Err(ParseError::RangeLengthMismatch {
                entry: "1-3:host:1-4".to_string(),
                local_count: 3,
                remote_count: 4,
            })
        );
    }

    #[test]
    fn test_inverted_range() {
        assert_eq!(
            parse_mappings("90-80:100", "10.0.0.1"),
            Err(ParseError::InvalidRange("90-80".to_string()))
        );
    }

    #[test]
    fn test_out_of_bounds_ports() {
        assert_eq!(
            parse_mappings("0:80", "10.0.0.1"),
            Err(ParseError::InvalidRange("0".to_string()))
        );
        assert_eq!(
            parse_mappings("80:65536", "10.0.0.1"),
            Err(ParseError::InvalidRange("65536".to_string()))
        );
        assert_eq!(
            parse_mappings("99999999999:80", "10.0.0.1"),
            Err(ParseError::InvalidRange("99999999999".to_string()))
        );
    }

    #[test]
    fn test_garbage_specs() {
        assert!(matches!(
            parse_mappings("abc:80", "10.0.0.1"),
            Err(ParseError::MalformedRange(_))
        ));
        assert!(matches!(
            parse_mappings("80:", "10.0.0.1"),
            Err(ParseError::MalformedRange(_))
        ));
        assert!(matches!(
            parse_mappings("80-x:80-y", "10.0.0.1"),
            Err(ParseError::MalformedRange(_))
        ));
    }

    #[test]
    fn test_whole_call_fails_on_one_bad_entry() {
        // No partial success: the valid first entry is discarded too
        assert!(parse_mappings("80:443, bogus", "10.0.0.1").is_err());
    }
}
