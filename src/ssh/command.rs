use anyhow::{Context, Result};
use std::process::Command;

use crate::forward::ForwardingDirective;
use crate::models::ConnectionProfile;

/// Byte budget for the serialized forwarding flags. The assembled command
/// line is handed to the system shell/client, which has a bounded command
/// buffer; flags are checked against this before assembly.
pub const FLAGS_CAPACITY: usize = 2048;

/// Launch the external ssh client for a profile.
///
/// Tears nothing down itself; the caller is responsible for releasing the
/// terminal first. Blocks until the client exits.
pub fn connect(profile: &ConnectionProfile, directives: &[ForwardingDirective]) -> Result<()> {
    let mut cmd = Command::new("ssh");

    for directive in directives {
        cmd.arg("-L").arg(format!(
            "{}:{}:{}",
            directive.local_port, directive.target_host, directive.remote_port
        ));
    }

    cmd.arg(profile.user_at_host());
    cmd.arg("-p").arg(profile.port.to_string());

    // This takes over the terminal until the session ends
    let status = cmd.status().context("Failed to execute SSH command")?;

    if !status.success() {
        return Err(anyhow::anyhow!(
            "SSH connection failed with exit code: {}",
            status.code().unwrap_or(-1)
        ));
    }

    Ok(())
}

/// Build the command line as a single display string.
///
/// `"ssh <flags> <user>@<host> -p <port>"` when flags are present,
/// `"ssh <user>@<host> -p <port>"` otherwise.
pub fn build_command_line(profile: &ConnectionProfile, flags: Option<&str>) -> String {
    let mut parts = vec!["ssh".to_string()];

    if let Some(flags) = flags.filter(|f| !f.is_empty()) {
        parts.push(flags.to_string());
    }

    parts.push(profile.user_at_host());
    parts.push(format!("-p {}", profile.port));

    parts.join(" ")
}
