// Counter cards for repositories, contributions, and years active.

use ratatui::{prelude::*, widgets::*};

use crate::stats::ProfileStatsSnapshot;

/// Draw the three counters side by side.
pub fn draw_counters(frame: &mut Frame, snapshot: &ProfileStatsSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let counters = [
        ("Repositories", snapshot.repository_count.display()),
        ("Contributions", snapshot.display_total()),
        ("Years", format!("{}Y", snapshot.years_active)),
    ];

    for ((label, value), area) in counters.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", label));
        let text = Paragraph::new(value)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);
        frame.render_widget(text, *area);
    }
}
