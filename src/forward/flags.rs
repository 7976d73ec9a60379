use std::fmt;

use thiserror::Error;

use super::parse::ResolvedEntry;

/// Hard cap on directives emitted by one build. The command line is handed
/// to an external client; past this point it stops being a usable invocation.
pub const MAX_DIRECTIVES: usize = 256;

/// Error from serializing resolved entries into a flags string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no forwarding directives to build")]
    NoDirectives,

    #[error("{count} forwarding directives requested, at most {max} supported")]
    TooManyDirectives { count: usize, max: usize },

    #[error("forwarding flags need {needed} bytes, capacity is {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },
}

/// One fully expanded forwarding rule: a single local port bound to a single
/// remote target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingDirective {
    pub local_port: u16,
    pub target_host: String,
    pub remote_port: u16,
}

impl fmt::Display for ForwardingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-L {}:{}:{}",
            self.local_port, self.target_host, self.remote_port
        )
    }
}

/// Expand resolved entries into concrete directives, positionally: ranges
/// are paired index-for-index, a single port repeats against its partner.
/// Entry order, then within-entry ascending order.
pub fn expand_entries(entries: &[ResolvedEntry]) -> Vec<ForwardingDirective> {
    let mut directives = Vec::new();

    for entry in entries {
        for i in 0..entry.expansion_count() {
            directives.push(ForwardingDirective {
                local_port: entry.local.port_at(i),
                target_host: entry.host.clone(),
                remote_port: entry.remote.port_at(i),
            });
        }
    }

    directives
}

/// Serialize resolved entries into a space-joined flags string.
///
/// `capacity`, when given, is the byte budget of the caller's command
/// buffer; the running length is checked before each append and nothing
/// partial is returned on overflow.
pub fn build_flags(
    entries: &[ResolvedEntry],
    capacity: Option<usize>,
) -> Result<String, BuildError> {
    let total: usize = entries.iter().map(|e| e.expansion_count()).sum();

    if total == 0 {
        return Err(BuildError::NoDirectives);
    }
    if total > MAX_DIRECTIVES {
        return Err(BuildError::TooManyDirectives {
            count: total,
            max: MAX_DIRECTIVES,
        });
    }

    let mut flags = String::new();

    for directive in expand_entries(entries) {
        let token = directive.to_string();
        let needed = flags.len() + token.len() + usize::from(!flags.is_empty());

        if let Some(capacity) = capacity {
            if needed > capacity {
                return Err(BuildError::BufferOverflow { needed, capacity });
            }
        }

        if !flags.is_empty() {
            flags.push(' ');
        }
        flags.push_str(&token);
    }

    Ok(flags)
}
