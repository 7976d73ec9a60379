use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::ConnectionProfile;

/// Most recent connections kept on disk.
const MAX_ENTRIES: usize = 20;

/// Container for recent connections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// Version of the history format
    #[serde(default = "default_version")]
    pub version: String,

    /// Recent profiles, most recent first
    #[serde(default)]
    pub entries: Vec<ConnectionProfile>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl History {
    /// Create a new empty history
    pub fn new() -> Self {
        History {
            version: default_version(),
            entries: Vec::new(),
        }
    }

    /// Record a connection: stamp it, drop older entries for the same
    /// destination, insert at the front, keep the list bounded.
    pub fn record(&mut self, mut profile: ConnectionProfile) {
        profile.mark_used();

        self.entries.retain(|entry| !entry.same_destination(&profile));
        self.entries.insert(0, profile);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Get a recent profile by position
    pub fn get(&self, index: usize) -> Option<&ConnectionProfile> {
        self.entries.get(index)
    }

    /// Number of recent profiles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no recent profiles
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Load history from file
pub fn load_history(path: &Path) -> Result<History> {
    if !path.exists() {
        // Return empty history if file doesn't exist
        return Ok(History::new());
    }

    let content = fs::read_to_string(path).context("Failed to read history file")?;

    let history: History =
        serde_json::from_str(&content).context("Failed to parse history JSON")?;

    Ok(history)
}

/// Save history to file
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create history directory")?;
    }

    let content =
        serde_json::to_string_pretty(history).context("Failed to serialize history")?;

    fs::write(path, content).context("Failed to write history file")?;

    Ok(())
}

/// Get the default history file path (~/.ssh/sshmap.json)
pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".ssh")
        .join("sshmap.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(host: &str, port: u16) -> ConnectionProfile {
        let mut profile = ConnectionProfile::new(host.to_string());
        profile.port = port;
        profile
    }

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert_eq!(history.version, "1.0");
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_newest_first() {
        let mut history = History::new();
        history.record(profile("10.0.0.1", 22));
        history.record(profile("10.0.0.2", 22));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().host, "10.0.0.2");
        assert_eq!(history.get(1).unwrap().host, "10.0.0.1");
    }

    #[test]
    fn test_record_stamps_last_used() {
        let mut history = History::new();
        history.record(profile("10.0.0.1", 22));
        assert!(history.get(0).unwrap().last_used.is_some());
    }

    #[test]
    fn test_record_dedupes_destination() {
        let mut history = History::new();
        history.record(profile("10.0.0.1", 22));
        history.record(profile("10.0.0.2", 22));

        let mut again = profile("10.0.0.1", 22);
        again.mappings = Some("80:80".to_string());
        history.record(again);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().host, "10.0.0.1");
        assert_eq!(history.get(0).unwrap().mappings, Some("80:80".to_string()));
    }

    #[test]
    fn test_different_port_is_different_destination() {
        let mut history = History::new();
        history.record(profile("10.0.0.1", 22));
        history.record(profile("10.0.0.1", 2222));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_record_bounded() {
        let mut history = History::new();
        for i in 0..30 {
            history.record(profile(&format!("10.0.0.{}", i), 22));
        }
        assert_eq!(history.len(), MAX_ENTRIES);
        assert_eq!(history.get(0).unwrap().host, "10.0.0.29");
    }

    #[test]
    fn test_serialization() {
        let mut history = History::new();
        let mut p = profile("192.168.1.1", 2222);
        p.username = "admin".to_string();
        p.mappings = Some("8080:80".to_string());
        history.record(p);

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.version, history.version);
        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.get(0).unwrap().username, "admin");
        assert_eq!(
            deserialized.get(0).unwrap().mappings,
            Some("8080:80".to_string())
        );
    }
}
