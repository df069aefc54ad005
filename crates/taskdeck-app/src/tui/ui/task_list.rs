/*
[INPUT]:  Board task projections and list selection state
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing row format or list styling
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::TuiState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut TuiState,
) {
    let visible = app.board.visible_tasks();
    let items = if visible.is_empty() {
        vec![ListItem::new("No tasks found")]
    } else {
        visible
            .iter()
            .map(|task| {
                let marker = if task.completed { "[x]" } else { "[ ]" };
                let stamp = task
                    .created_timestamp()
                    .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| task.created_at.clone());
                let line = match task.description.as_deref() {
                    Some(description) => {
                        format!("{} {} | {} | {}", marker, task.title, description, stamp)
                    }
                    None => format!("{} {} | {}", marker, task.title, stamp),
                };
                let style = if task.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let title = format!("Tasks ({})", app.board.filter().label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
