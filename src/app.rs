use anyhow::{anyhow, Result};
use std::path::PathBuf;

use crate::forward::validate::parse_port;
use crate::forward::{build_flags, expand_entries, is_valid_ipv4, parse_mappings, ForwardingDirective};
use crate::models::{AppMode, ConnectionProfile, FormField, ProfileDraft, DEFAULT_PORT, DEFAULT_USERNAME};
use crate::ssh::{
    build_command_line,
    history::{default_history_path, load_history, save_history, History},
    FLAGS_CAPACITY,
};

/// Main application state
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Recent connections
    pub history: History,

    /// Path to history file
    history_path: PathBuf,

    /// Currently selected entry in the recent list
    pub selected_index: usize,

    /// Should the application quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Error message to display
    pub error_message: Option<String>,

    /// Connection handed off to the main loop for launching
    pub pending_connection: Option<(ConnectionProfile, Vec<ForwardingDirective>)>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let history_path = default_history_path();
        let history = load_history(&history_path)?;

        // With nothing to pick from, drop straight into the form
        let mode = if history.is_empty() {
            new_form_mode(ProfileDraft::default())
        } else {
            AppMode::Recent
        };

        Ok(App {
            mode,
            history,
            history_path,
            selected_index: 0,
            should_quit: false,
            status_message: None,
            error_message: None,
            pending_connection: None,
        })
    }

    // ==================== Recent list ====================

    pub fn select_next(&mut self) {
        if self.selected_index < self.history.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Start a blank connection form
    pub fn start_new_connection(&mut self) {
        self.mode = new_form_mode(ProfileDraft::default());
    }

    /// Open the form prefilled from the selected recent entry
    pub fn start_edit_selected(&mut self) {
        if let Some(profile) = self.history.get(self.selected_index) {
            self.mode = new_form_mode(ProfileDraft::from_profile(profile));
        }
    }

    // ==================== Form submission ====================

    /// Validate the draft, build the forwarding flags, and move to the
    /// preview dialog. Any failure keeps the user in the form with the
    /// error shown.
    pub fn submit_form(&mut self, draft: ProfileDraft) {
        match prepare_connection(&draft) {
            Ok((profile, directives, command)) => {
                self.mode = AppMode::Preview {
                    profile,
                    directives,
                    command,
                };
            }
            Err(err) => {
                self.set_error(err.to_string());
                self.mode = new_form_mode(draft);
            }
        }
    }

    /// Hand the previewed connection to the main loop
    pub fn confirm_connection(&mut self) {
        if let AppMode::Preview {
            profile,
            directives,
            ..
        } = &self.mode
        {
            self.pending_connection = Some((profile.clone(), directives.clone()));
        }
    }

    /// Go back from the preview into the form, keeping what was typed
    pub fn return_to_form(&mut self) {
        if let AppMode::Preview { profile, .. } = &self.mode {
            self.mode = new_form_mode(ProfileDraft::from_profile(profile));
        }
    }

    /// Called by the main loop after the ssh client exits
    pub fn complete_connection(&mut self, profile: ConnectionProfile, error: Option<String>) {
        match error {
            None => {
                self.history.record(profile);
                if let Err(err) = save_history(&self.history_path, &self.history) {
                    self.set_error(format!("Failed to save history: {}", err));
                } else {
                    self.set_status("Session ended");
                }
                self.selected_index = 0;
            }
            Some(message) => self.set_error(message),
        }

        self.mode = AppMode::Recent;
    }

    // ==================== Messages and navigation ====================

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
        self.status_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    pub fn return_to_recent(&mut self) {
        self.mode = AppMode::Recent;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Fresh form state focused on the first field
fn new_form_mode(draft: ProfileDraft) -> AppMode {
    let field_buffer = draft.username.clone();
    AppMode::EditForm {
        draft,
        focused_field: FormField::Username,
        field_buffer,
        editing_mode: false,
    }
}

/// Turn a draft into a validated profile plus its forwarding directives and
/// command-line preview. Blank username and port fall back to their
/// defaults; host must be an IPv4 literal; mappings are optional.
fn prepare_connection(
    draft: &ProfileDraft,
) -> Result<(ConnectionProfile, Vec<ForwardingDirective>, String)> {
    let username = match draft.username.trim() {
        "" => DEFAULT_USERNAME.to_string(),
        name => name.to_string(),
    };

    let host = draft.host.trim();
    if !is_valid_ipv4(host) {
        return Err(anyhow!("'{}' is not a valid IPv4 address", host));
    }

    let port = match draft.port.trim() {
        "" => DEFAULT_PORT,
        spec => parse_port(spec)
            .ok_or_else(|| anyhow!("'{}' is not a valid port (1-65535)", spec))?,
    };

    let mut profile = ConnectionProfile {
        username,
        host: host.to_string(),
        port,
        mappings: None,
        last_used: None,
    };

    let mappings = draft.mappings.trim();
    if mappings.is_empty() {
        let command = build_command_line(&profile, None);
        return Ok((profile, Vec::new(), command));
    }

    // The per-entry remote host defaults to the server being connected to
    let entries = parse_mappings(mappings, &profile.host)?;
    let flags = build_flags(&entries, Some(FLAGS_CAPACITY))?;
    let directives = expand_entries(&entries);

    profile.mappings = Some(mappings.to_string());
    let command = build_command_line(&profile, Some(&flags));

    Ok((profile, directives, command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str, host: &str, port: &str, mappings: &str) -> ProfileDraft {
        ProfileDraft {
            username: username.to_string(),
            host: host.to_string(),
            port: port.to_string(),
            mappings: mappings.to_string(),
        }
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let (profile, directives, command) =
            prepare_connection(&draft("", "192.168.1.1", "", "")).unwrap();

        assert_eq!(profile.username, "root");
        assert_eq!(profile.port, 22);
        assert!(directives.is_empty());
        assert_eq!(command, "ssh root@192.168.1.1 -p 22");
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(prepare_connection(&draft("root", "example.com", "22", "")).is_err());
        assert!(prepare_connection(&draft("root", "256.1.1.1", "22", "")).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(prepare_connection(&draft("root", "10.0.0.1", "0", "")).is_err());
        assert!(prepare_connection(&draft("root", "10.0.0.1", "65536", "")).is_err());
        assert!(prepare_connection(&draft("root", "10.0.0.1", "ssh", "")).is_err());
    }

    #[test]
    fn test_mappings_default_to_server_host() {
        let (profile, directives, command) =
            prepare_connection(&draft("root", "10.0.0.1", "22", "8080:80")).unwrap();

        assert_eq!(profile.mappings, Some("8080:80".to_string()));
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].target_host, "10.0.0.1");
        assert_eq!(command, "ssh -L 8080:10.0.0.1:80 root@10.0.0.1 -p 22");
    }

    #[test]
    fn test_bad_mappings_surface_parse_error() {
        let result = prepare_connection(&draft("root", "10.0.0.1", "22", "22:9000-9002"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("range of remote ports"));
    }

    #[test]
    fn test_ranged_mappings_expand() {
        let (_, directives, command) =
            prepare_connection(&draft("root", "10.0.0.1", "22", "80-82:10.0.0.5:80-82")).unwrap();

        assert_eq!(directives.len(), 3);
        assert_eq!(
            command,
            "ssh -L 80:10.0.0.5:80 -L 81:10.0.0.5:81 -L 82:10.0.0.5:82 root@10.0.0.1 -p 22"
        );
    }
}
