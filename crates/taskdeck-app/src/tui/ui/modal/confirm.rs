/*
[INPUT]:  Confirmation message, action context, and key events
[OUTPUT]: Yes/no dialog rendering and the collected answer
[POS]:    TUI UI modal - destructive action confirmation
[UPDATE]: When adding confirmable actions
*/

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Actions that require a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tui) enum ConfirmAction {
    DeleteTask { task_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tui) enum ConfirmAnswer {
    Yes,
    No,
    Pending,
}

pub(in crate::tui) struct ConfirmModal {
    title: String,
    message: String,
    action: ConfirmAction,
}

impl ConfirmModal {
    pub(in crate::tui) fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        action: ConfirmAction,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ConfirmAnswer {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConfirmAnswer::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ConfirmAnswer::No,
            _ => ConfirmAnswer::Pending,
        }
    }

    pub(in crate::tui) fn action(&self) -> ConfirmAction {
        self.action
    }
}

pub(in crate::tui) fn draw_confirm(frame: &mut ratatui::Frame, area: Rect, modal: &ConfirmModal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::raw(modal.message.clone())),
        Line::default(),
        Line::from(vec![
            Span::styled("[y]", key_style),
            Span::raw(" Delete  "),
            Span::styled("[n]", key_style),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
