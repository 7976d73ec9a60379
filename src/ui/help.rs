use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the help overlay
pub fn render_help_view(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Help content
        Constraint::Length(3), // Close instruction
    ])
    .split(area);

    // Title
    let title = Paragraph::new("Help")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    // Help content
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Recent connections:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  j / ↓         - Move down"),
        Line::from("  k / ↑         - Move up"),
        Line::from("  Space / Enter - Edit the selected connection"),
        Line::from("  n             - Start a new connection"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Connection form:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab / Shift+Tab - Move between fields"),
        Line::from("  Enter           - Edit the focused field"),
        Line::from("  Ctrl+S          - Build the command and preview it"),
        Line::from("  Esc             - Back to the recent list"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Port mappings:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  8080:80                  - local 8080 to port 80 on the server"),
        Line::from("  8080:192.168.1.5:80      - local 8080 to port 80 on another host"),
        Line::from("  9000-9002:9000-9002      - three rules, paired in order"),
        Line::from("  80:80, 443:443           - comma-separated entries"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Other:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?             - Show this help"),
        Line::from("  q             - Quit"),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Keybindings "))
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, chunks[1]);

    // Close instruction
    let close = Paragraph::new("Press any key to close")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(close, chunks[2]);
}
