/*
[INPUT]:  Currently visible notifications
[OUTPUT]: Toast overlay rendered into the top-right corner
[POS]:    TUI UI notification rendering
[UPDATE]: When changing toast placement or styling
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::notify::{NotificationCenter, Severity};

fn severity_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    };
    Style::default().fg(color)
}

pub(in crate::tui) fn draw_notifications(
    frame: &mut ratatui::Frame,
    area: Rect,
    center: &NotificationCenter,
) {
    let visible = center.current();
    if visible.is_empty() {
        return;
    }

    let width = area.width.min(44);
    let height = (visible.len() as u16 + 2).min(area.height);
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height,
    };

    let lines: Vec<Line> = visible
        .iter()
        .map(|entry| Line::from(Span::styled(entry.message.clone(), severity_style(entry.severity))))
        .collect();

    frame.render_widget(Clear, overlay);
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, overlay);
}
