use crate::toast::ToastStack;
use crate::ui::{layout::create_toast_area, styles::toast_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Stack toasts in the bottom-right corner, newest at the bottom
pub fn render_toasts(f: &mut Frame, toasts: &ToastStack, area: Rect) {
    if toasts.is_empty() {
        return;
    }
    let now = Instant::now();
    let column = create_toast_area(area, toasts.len());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); toasts.len()])
        .split(column);

    for (toast, row) in toasts.iter().zip(rows.iter()) {
        let style = toast_style(toast.kind, toast.phase(now));
        f.render_widget(Clear, *row);
        let paragraph = Paragraph::new(toast.message.clone())
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, *row);
    }
}
