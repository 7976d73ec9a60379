use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::models::{AppMode, FormField, ProfileDraft};

/// Handle keyboard input based on current app mode (with timeout for non-blocking)
pub fn handle_input(app: &mut App) -> Result<()> {
    // Use poll with timeout so the loop keeps drawing
    if !event::poll(std::time::Duration::from_millis(100))? {
        return Ok(());
    }

    if let Event::Key(key) = event::read()? {
        // Clear messages on any key press
        app.clear_messages();

        match &app.mode {
            AppMode::Recent => handle_recent_input(app, key),
            AppMode::EditForm { .. } => handle_form_input(app, key),
            AppMode::Preview { .. } => handle_preview_input(app, key),
            AppMode::Help => app.return_to_recent(),
        }
    }

    Ok(())
}

/// Handle input in the recent-connections list
fn handle_recent_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Actions
        KeyCode::Char('n') => app.start_new_connection(),
        KeyCode::Char(' ') | KeyCode::Enter => app.start_edit_selected(),

        // Help
        KeyCode::Char('?') => app.show_help(),

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        _ => {}
    }
}

/// Handle input in the connection form
fn handle_form_input(app: &mut App, key: KeyEvent) {
    // Submission leaves the mode, so collect the draft first when needed
    let submit_draft = |draft: &mut ProfileDraft,
                        focused_field: &FormField,
                        field_buffer: &str| {
        apply_field_buffer(draft, focused_field, field_buffer);
        draft.clone()
    };

    if let AppMode::EditForm {
        draft,
        focused_field,
        field_buffer,
        editing_mode,
    } = &mut app.mode
    {
        let current_field = *focused_field;

        if *editing_mode {
            // EDITING MODE: typing into the current field
            match key.code {
                // Save the field; on the last field this submits the form
                KeyCode::Enter => {
                    if current_field.is_last() {
                        let finished = submit_draft(draft, &current_field, field_buffer);
                        app.submit_form(finished);
                    } else {
                        apply_field_buffer(draft, &current_field, field_buffer);
                        *editing_mode = false;
                    }
                }

                // Exit editing mode without saving
                KeyCode::Esc => {
                    *field_buffer = get_field_value(draft, &current_field);
                    *editing_mode = false;
                }

                // Tab: save, exit editing, move to next field
                KeyCode::Tab => {
                    apply_field_buffer(draft, &current_field, field_buffer);
                    *editing_mode = false;
                    let next_field = current_field.next();
                    *focused_field = next_field;
                    *field_buffer = get_field_value(draft, &next_field);
                }

                // Shift+Tab: save, exit editing, move to previous field
                KeyCode::BackTab => {
                    apply_field_buffer(draft, &current_field, field_buffer);
                    *editing_mode = false;
                    let prev_field = current_field.previous();
                    *focused_field = prev_field;
                    *field_buffer = get_field_value(draft, &prev_field);
                }

                // Type characters
                KeyCode::Char(c) => {
                    field_buffer.push(c);
                }

                // Backspace
                KeyCode::Backspace => {
                    field_buffer.pop();
                }

                _ => {}
            }
        } else {
            // NAVIGATION MODE: moving between fields
            match key.code {
                // Navigate fields
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                    let next_field = current_field.next();
                    *focused_field = next_field;
                    *field_buffer = get_field_value(draft, &next_field);
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                    let prev_field = current_field.previous();
                    *focused_field = prev_field;
                    *field_buffer = get_field_value(draft, &prev_field);
                }

                // Enter: activate editing mode
                KeyCode::Enter | KeyCode::Char('i') => {
                    *editing_mode = true;
                }

                // Submit the whole form
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let finished = submit_draft(draft, &current_field, field_buffer);
                    app.submit_form(finished);
                }

                // Cancel and return to the recent list
                KeyCode::Esc | KeyCode::Char('q') => {
                    app.return_to_recent();
                }

                _ => {}
            }
        }
    }
}

/// Handle input in the command preview dialog
fn handle_preview_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_connection();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.return_to_form();
        }
        _ => {}
    }
}

/// Get the current value of a field for editing
pub fn get_field_value(draft: &ProfileDraft, field: &FormField) -> String {
    match field {
        FormField::Username => draft.username.clone(),
        FormField::Host => draft.host.clone(),
        FormField::Port => draft.port.clone(),
        FormField::Mappings => draft.mappings.clone(),
    }
}

/// Apply the field buffer to the draft
fn apply_field_buffer(draft: &mut ProfileDraft, field: &FormField, buffer: &str) {
    let value = buffer.to_string();
    match field {
        FormField::Username => draft.username = value,
        FormField::Host => draft.host = value,
        FormField::Port => draft.port = value,
        FormField::Mappings => draft.mappings = value,
    }
}
