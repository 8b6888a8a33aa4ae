// Contribution heatmap.
// One column per week, one row per weekday (Sunday first), shaded by level.

use chrono::{Datelike, Duration};
use ratatui::{prelude::*, widgets::*};

use crate::stats::ContributionDay;

const CELL: &str = "■ ";
const WEEKDAY_LABELS: [&str; 7] = ["   ", "Mon", "   ", "Wed", "   ", "Fri", "   "];

/// Group days into week columns; `None` marks a day with no data.
fn week_columns(days: &[ContributionDay]) -> Vec<[Option<u8>; 7]> {
    let Some(first) = days.iter().map(|day| day.date).min() else {
        return Vec::new();
    };

    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let mut columns: Vec<[Option<u8>; 7]> = Vec::new();

    for day in days {
        let week = ((day.date - start).num_days() / 7) as usize;
        if columns.len() <= week {
            columns.resize(week + 1, [None; 7]);
        }
        let row = day.date.weekday().num_days_from_sunday() as usize;
        columns[week][row] = Some(day.level);
    }

    columns
}

fn level_color(level: u8) -> Color {
    match level {
        0 => Color::Rgb(22, 27, 34),
        1 => Color::Rgb(14, 68, 41),
        2 => Color::Rgb(0, 109, 50),
        3 => Color::Rgb(38, 166, 65),
        _ => Color::Rgb(57, 211, 83),
    }
}

/// Draw the most recent weeks that fit in `area`.
pub fn draw_calendar(frame: &mut Frame, days: &[ContributionDay], area: Rect) {
    let total = days.iter().fold(0u64, |acc, d| acc.saturating_add(d.count));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Contributions ({} days, {} total) ", days.len(), total));

    let columns = week_columns(days);
    if columns.is_empty() {
        let text = Paragraph::new("No contribution history")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    // Border plus weekday label column
    let usable = area.width.saturating_sub(2 + 4) as usize;
    let visible = (usable / CELL.chars().count()).min(columns.len());
    let shown = &columns[columns.len() - visible..];

    let lines: Vec<Line> = (0..7)
        .map(|row| {
            let mut spans = vec![Span::styled(
                format!("{} ", WEEKDAY_LABELS[row]),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(shown.iter().map(|week| match week[row] {
                Some(level) => Span::styled(CELL, Style::default().fg(level_color(level))),
                None => Span::raw("  "),
            }));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, level: u8) -> ContributionDay {
        ContributionDay {
            date: date.parse().unwrap(),
            count: u64::from(level),
            level,
        }
    }

    #[test]
    fn test_week_columns() {
        // 2024-01-03 is a Wednesday, 2024-01-07 a Sunday
        let days = vec![day("2024-01-03", 1), day("2024-01-06", 2), day("2024-01-07", 4)];
        let columns = week_columns(&days);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0][3], Some(1));
        assert_eq!(columns[0][6], Some(2));
        assert_eq!(columns[0][0], None);
        assert_eq!(columns[1][0], Some(4));
    }

    #[test]
    fn test_week_columns_empty() {
        assert!(week_columns(&[]).is_empty());
    }

    #[test]
    fn test_huge_counts_render() {
        let mut days = vec![day("2024-01-01", 4), day("2024-01-02", 4)];
        days[0].count = u64::MAX;
        days[1].count = u64::MAX;

        let mut terminal =
            Terminal::new(ratatui::backend::TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| draw_calendar(frame, &days, frame.area()))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(&u64::MAX.to_string()));
    }

    #[test]
    fn test_level_colors_distinct() {
        let colors: Vec<Color> = (0..=4).map(level_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(level_color(9), level_color(4));
    }
}
