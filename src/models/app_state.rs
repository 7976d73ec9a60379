use crate::forward::ForwardingDirective;
use crate::models::{ConnectionProfile, ProfileDraft};

/// Application mode/state
#[derive(Debug, Clone, Default)]
pub enum AppMode {
    /// Startup view listing recent connections
    #[default]
    Recent,

    /// Filling in connection parameters
    EditForm {
        /// Current state of the form being edited
        draft: ProfileDraft,
        /// Which field is currently focused
        focused_field: FormField,
        /// Current text being edited (for the focused field)
        field_buffer: String,
        /// Whether the focused field is in edit mode (true) or just selected (false)
        editing_mode: bool,
    },

    /// Showing the assembled command line before launching
    Preview {
        /// Profile the command was built from
        profile: ConnectionProfile,
        /// Expanded forwarding directives (empty for a plain connection)
        directives: Vec<ForwardingDirective>,
        /// The command line as it will be run
        command: String,
    },

    /// Help overlay
    Help,
}

/// Fields in the connection form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Host,
    Port,
    Mappings,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(&self) -> FormField {
        match self {
            FormField::Username => FormField::Host,
            FormField::Host => FormField::Port,
            FormField::Port => FormField::Mappings,
            FormField::Mappings => FormField::Username,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn previous(&self) -> FormField {
        match self {
            FormField::Username => FormField::Mappings,
            FormField::Host => FormField::Username,
            FormField::Port => FormField::Host,
            FormField::Mappings => FormField::Port,
        }
    }

    /// Whether this is the last field in the form
    pub fn is_last(&self) -> bool {
        matches!(self, FormField::Mappings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut field = FormField::Username;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Username);
    }

    #[test]
    fn test_previous_inverts_next() {
        for field in [
            FormField::Username,
            FormField::Host,
            FormField::Port,
            FormField::Mappings,
        ] {
            assert_eq!(field.next().previous(), field);
        }
    }
}
