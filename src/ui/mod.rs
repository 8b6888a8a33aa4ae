// UI module for rendering the TUI.
// Counters, contribution heatmap, and a status line for the displayed snapshot.

mod calendar;
mod counters;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::stats::{DisplayedStats, SnapshotOrigin};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let displayed = app.stats.borrow().clone();
    draw_stats(frame, &displayed);
}

/// Render one snapshot; split out so it can be drawn without an `App`.
pub fn draw_stats(frame: &mut Frame, displayed: &DisplayedStats) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Counters
            Constraint::Min(9),    // Heatmap
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, &displayed.snapshot.identity, chunks[0]);
    counters::draw_counters(frame, &displayed.snapshot, chunks[1]);
    calendar::draw_calendar(frame, &displayed.snapshot.contribution_calendar, chunks[2]);
    draw_status_bar(frame, displayed.origin, chunks[3]);
}

fn draw_title(frame: &mut Frame, identity: &str, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " folio-stats ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(identity.to_string(), Style::default().fg(Color::White)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_status_bar(frame: &mut Frame, origin: SnapshotOrigin, area: Rect) {
    let color = match origin {
        SnapshotOrigin::Seed => Color::Yellow,
        SnapshotOrigin::Cache => Color::Cyan,
        SnapshotOrigin::Refresh => Color::Green,
    };

    let status = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(color)),
        Span::styled(origin.label(), Style::default().fg(color)),
        Span::styled("   q: quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}
