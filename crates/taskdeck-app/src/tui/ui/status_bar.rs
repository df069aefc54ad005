/*
[INPUT]:  Board health snapshot, counters, and refresh stamp
[OUTPUT]: Status bar rendered into Ratatui frame
[POS]:    TUI UI status bar rendering
[UPDATE]: When adding indicators or changing the layout
*/

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use taskdeck_adapter::HealthState;

use crate::controller::TaskBoard;

pub(in crate::tui) fn draw_status_bar(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    board: &TaskBoard,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::Blue));

    let (health_color, health_text) = match board.health().map(|snapshot| snapshot.status) {
        Some(HealthState::Healthy) => (Color::Green, "healthy"),
        Some(HealthState::Unhealthy) => (Color::Red, "unhealthy"),
        Some(HealthState::Unknown) | None => (Color::DarkGray, "unknown"),
    };

    let mut spans = vec![
        Span::styled(
            "Taskdeck",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("● ", Style::default().fg(health_color)),
        Span::styled(health_text, Style::default().fg(health_color)),
        Span::raw(" | "),
        Span::raw(format!(
            "{} tasks ({} active / {} done)",
            board.total(),
            board.active_count(),
            board.completed_count()
        )),
        Span::raw(" | "),
        Span::raw(format!("refreshed: {}", board.last_refreshed_label())),
    ];

    if board.is_loading() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("loading…", Style::default().fg(Color::Yellow)));
    }
    if board.is_busy() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("working…", Style::default().fg(Color::Red)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
