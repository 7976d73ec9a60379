pub mod dialogs;
pub mod form;
pub mod help;
pub mod recent;

pub use dialogs::render_preview_dialog;
pub use form::render_form_view;
pub use help::render_help_view;
pub use recent::render_recent_view;
