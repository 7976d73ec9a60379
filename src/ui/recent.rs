use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

/// Render the recent-connections view
pub fn render_recent_view(frame: &mut Frame, app: &App, area: Rect) {
    // Split the area into header, table, and footer
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(0),    // Table
        Constraint::Length(3), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_recent_table(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Pick a recent connection or start a new one",
            Style::default().fg(Color::Magenta),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" sshmap "));

    frame.render_widget(header, area);
}

/// Render the table of recent connections
fn render_recent_table(frame: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["User", "Host", "Port", "Port mappings", "Last used"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));

    let header = Row::new(header_cells)
        .style(Style::default())
        .height(1)
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .history
        .entries
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let is_selected = i == app.selected_index;

            let base_style = if is_selected {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let last_used = profile
                .last_used
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());

            let cells = vec![
                Cell::from(profile.username.clone()),
                Cell::from(profile.host.clone()),
                Cell::from(profile.port.to_string()),
                Cell::from(profile.mappings.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(last_used),
            ];

            Row::new(cells).style(base_style).height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(15), // User
            Constraint::Percentage(20), // Host
            Constraint::Percentage(10), // Port
            Constraint::Percentage(35), // Mappings
            Constraint::Percentage(20), // Last used
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Recent connections ({}) ", app.history.len())),
    )
    .column_spacing(1);

    frame.render_widget(table, area);
}

/// Render the footer with keybindings help
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keybindings = vec![
        ("Enter", "Edit selected"),
        ("n", "New connection"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut footer_spans = Vec::new();
    for (i, (key, desc)) in keybindings.iter().enumerate() {
        if i > 0 {
            footer_spans.push(Span::raw(" │ "));
        }
        footer_spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        footer_spans.push(Span::raw(":"));
        footer_spans.push(Span::raw(*desc));
    }

    let mut footer = Paragraph::new(Line::from(footer_spans))
        .block(Block::default().borders(Borders::ALL));

    // Show status or error messages
    if let Some(ref msg) = app.status_message {
        footer = Paragraph::new(msg.clone())
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title(" Status "));
    } else if let Some(ref msg) = app.error_message {
        footer = Paragraph::new(msg.clone())
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title(" Error "));
    }

    frame.render_widget(footer, area);
}
