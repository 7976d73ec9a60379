use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default username when the field is left blank.
pub const DEFAULT_USERNAME: &str = "root";

/// Default ssh port when the field is left blank.
pub const DEFAULT_PORT: u16 = 22;

/// One set of connection parameters: who, where, and which ports to forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// SSH username
    pub username: String,

    /// Server address (IPv4 literal)
    pub host: String,

    /// SSH port
    pub port: u16,

    /// Raw port-mapping specification, e.g. "8080:80, 9000-9002:9000-9002"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<String>,

    /// Timestamp of last connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

impl ConnectionProfile {
    /// Create a profile with defaults and no mappings.
    pub fn new(host: String) -> Self {
        ConnectionProfile {
            username: DEFAULT_USERNAME.to_string(),
            host,
            port: DEFAULT_PORT,
            mappings: None,
            last_used: None,
        }
    }

    /// The `user@host` destination argument.
    pub fn user_at_host(&self) -> String {
        format!("{}@{}", self.username, self.host)
    }

    /// Whether this profile forwards any ports.
    pub fn has_mappings(&self) -> bool {
        self.mappings
            .as_ref()
            .map(|m| !m.trim().is_empty())
            .unwrap_or(false)
    }

    /// Update the last_used timestamp to now.
    pub fn mark_used(&mut self) {
        self.last_used = Some(Utc::now());
    }

    /// Two profiles describe the same destination when user, host, and port
    /// all match; mappings are a per-session detail.
    pub fn same_destination(&self, other: &ConnectionProfile) -> bool {
        self.username == other.username && self.host == other.host && self.port == other.port
    }
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Form-side view of a profile: every field as typed text, converted into a
/// validated ConnectionProfile only on submission.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub username: String,
    pub host: String,
    pub port: String,
    pub mappings: String,
}

impl ProfileDraft {
    /// Prefill a draft from an existing profile (editing a recent entry).
    pub fn from_profile(profile: &ConnectionProfile) -> Self {
        ProfileDraft {
            username: profile.username.clone(),
            host: profile.host.clone(),
            port: profile.port.to_string(),
            mappings: profile.mappings.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = ConnectionProfile::new("192.168.1.1".to_string());
        assert_eq!(profile.username, "root");
        assert_eq!(profile.port, 22);
        assert!(profile.mappings.is_none());
    }

    #[test]
    fn test_user_at_host() {
        let mut profile = ConnectionProfile::new("192.168.1.1".to_string());
        profile.username = "ubuntu".to_string();
        assert_eq!(profile.user_at_host(), "ubuntu@192.168.1.1");
    }

    #[test]
    fn test_has_mappings() {
        let mut profile = ConnectionProfile::new("192.168.1.1".to_string());
        assert!(!profile.has_mappings());

        profile.mappings = Some("   ".to_string());
        assert!(!profile.has_mappings());

        profile.mappings = Some("8080:80".to_string());
        assert!(profile.has_mappings());
    }

    #[test]
    fn test_same_destination() {
        let a = ConnectionProfile::new("192.168.1.1".to_string());
        let mut b = ConnectionProfile::new("192.168.1.1".to_string());
        b.mappings = Some("80:80".to_string());
        assert!(a.same_destination(&b));

        b.port = 2222;
        assert!(!a.same_destination(&b));
    }
}
