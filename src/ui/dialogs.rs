use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the command preview dialog
pub fn render_preview_dialog(
    frame: &mut Frame,
    command: &str,
    directive_count: usize,
    area: Rect,
) {
    // Create a centered dialog box
    let dialog_area = centered_rect(70, 40, area);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Command
        Constraint::Length(3), // Actions
    ])
    .split(dialog_area);

    // Title
    let title = Paragraph::new("Ready to Connect")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(title, chunks[0]);

    // The assembled command line
    let summary = if directive_count > 0 {
        format!(
            "{}\n\n{} port forwarding rule{}",
            command,
            directive_count,
            if directive_count == 1 { "" } else { "s" }
        )
    } else {
        format!("{}\n\nNo port forwarding", command)
    };
    let message = Paragraph::new(summary)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Command "));
    frame.render_widget(message, chunks[1]);

    // Actions
    let actions = Paragraph::new("Enter/Y: Connect  │  N/Esc: Back to form")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, chunks[2]);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
