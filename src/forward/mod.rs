//! Port-forwarding mapping grammar: validation, parsing, and flag building.
//!
//! A mapping specification is a comma-separated list of entries of the form
//! `local[:host]:remote`, where each side is a single port or an inclusive
//! range `a-b`. Ranges pair positionally, so `80-82:80-82` becomes three
//! `-L` flags. Everything here is pure string-in, value-out; no I/O.

pub mod flags;
pub mod parse;
pub mod validate;

pub use flags::{build_flags, expand_entries, BuildError, ForwardingDirective, MAX_DIRECTIVES};
pub use parse::{parse_mappings, ParseError, PortRange, ResolvedEntry};
pub use validate::{is_valid_ipv4, is_valid_port};
