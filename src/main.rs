use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use sshmap::app::App;
use sshmap::models::AppMode;
use sshmap::ssh::connect;
use sshmap::ui::{render_form_view, render_help_view, render_preview_dialog, render_recent_view};
use sshmap::utils::handle_input;

fn main() -> Result<()> {
    // Initialize the application
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the application
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Run the main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            match &app.mode {
                AppMode::Recent => {
                    render_recent_view(frame, app, area);
                }
                AppMode::EditForm {
                    draft,
                    focused_field,
                    field_buffer,
                    editing_mode,
                } => {
                    render_form_view(
                        frame,
                        draft,
                        focused_field,
                        field_buffer,
                        *editing_mode,
                        app.error_message.as_deref(),
                        area,
                    );
                }
                AppMode::Preview {
                    directives,
                    command,
                    ..
                } => {
                    render_preview_dialog(frame, command, directives.len(), area);
                }
                AppMode::Help => {
                    render_help_view(frame, area);
                }
            }
        })?;

        // Handle input
        handle_input(app)?;

        // Check if we should quit
        if app.should_quit {
            break;
        }

        // Check if there's a pending SSH connection
        if let Some((profile, directives)) = app.pending_connection.take() {
            // Cleanup terminal before SSH
            disable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

            // Execute SSH connection
            let result = connect(&profile, &directives);

            // Restore terminal after SSH
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            enable_raw_mode()?;

            // Update app with connection result
            match result {
                Ok(_) => app.complete_connection(profile, None),
                Err(e) => app.complete_connection(profile, Some(format!("SSH error: {}", e))),
            }

            // Force a redraw
            terminal.clear()?;
        }
    }

    Ok(())
}
