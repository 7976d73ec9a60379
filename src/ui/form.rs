use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{FormField, ProfileDraft};

/// Render the connection form view
pub fn render_form_view(
    frame: &mut Frame,
    draft: &ProfileDraft,
    focused_field: &FormField,
    field_buffer: &str,
    editing_mode: bool,
    error_message: Option<&str>,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Form
        Constraint::Length(3), // Instructions / error
    ])
    .split(area);

    // Title with mode indicator
    let mode_text = if editing_mode {
        "New Connection - EDITING MODE"
    } else {
        "New Connection - NAVIGATION MODE"
    };
    let title = Paragraph::new(mode_text)
        .style(
            Style::default()
                .fg(if editing_mode { Color::Green } else { Color::Cyan })
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_form(frame, draft, focused_field, field_buffer, editing_mode, chunks[1]);

    // Errors take the instructions slot until the next key press
    if let Some(message) = error_message {
        let error = Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(" Error "));
        frame.render_widget(error, chunks[2]);
        return;
    }

    let instructions_text = if editing_mode {
        "Type to edit │ Enter: Save field │ Tab: Save & next field │ Esc: Cancel edit"
    } else {
        "j/k/↑/↓: Navigate │ Enter: Edit field │ Ctrl+S: BUILD COMMAND │ Esc: Back"
    };
    let instructions = Paragraph::new(instructions_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(if editing_mode { Color::Green } else { Color::Cyan }))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Enter on the mappings field also builds the command "),
        );
    frame.render_widget(instructions, chunks[2]);
}

fn render_form(
    frame: &mut Frame,
    draft: &ProfileDraft,
    focused_field: &FormField,
    field_buffer: &str,
    editing_mode: bool,
    area: Rect,
) {
    let form_chunks = Layout::vertical([
        Constraint::Length(3), // Username
        Constraint::Length(3), // Host
        Constraint::Length(3), // Port
        Constraint::Length(3), // Mappings
        Constraint::Min(0),
    ])
    .split(area);

    // Helper to render a field
    let render_field = |frame: &mut Frame, field: FormField, label: &str, area: Rect| {
        let is_focused = focused_field == &field;
        let is_editing = is_focused && editing_mode;

        let value = if is_focused {
            field_buffer.to_string()
        } else {
            match field {
                FormField::Username => draft.username.clone(),
                FormField::Host => draft.host.clone(),
                FormField::Port => draft.port.clone(),
                FormField::Mappings => draft.mappings.clone(),
            }
        };

        let style = if is_editing {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let border_style = if is_editing {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let title = if is_editing {
            format!(" {} [EDITING] ", label)
        } else if is_focused {
            format!(" {} [Press Enter to edit] ", label)
        } else {
            format!(" {} ", label)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let text = if is_focused && value.is_empty() {
            Span::styled("_", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value, style)
        };

        frame.render_widget(Paragraph::new(text).block(block), area);
    };

    render_field(frame, FormField::Username, "Username (default: root)", form_chunks[0]);
    render_field(frame, FormField::Host, "Server IP (IPv4)", form_chunks[1]);
    render_field(frame, FormField::Port, "SSH port (default: 22)", form_chunks[2]);
    render_field(
        frame,
        FormField::Mappings,
        "Port mappings (local[:host]:remote, comma-separated, ranges like 80-82)",
        form_chunks[3],
    );
}
