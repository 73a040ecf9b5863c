use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

/// Free-text box that sends a description to the server for assignment
pub fn render_composer(f: &mut Frame, app: &AppState, area: Rect) {
    let composing = app.ui_mode == UiMode::ComposingTask;
    let border = if composing {
        focused_border_style()
    } else {
        border_style()
    };

    // Submit button label: "Assign" or the in-flight label
    let button = match app.busy {
        Some(label) if composing => Span::styled(format!(" {} ", label), modal_title_style()),
        _ => Span::styled(" Assign ", title_style()),
    };

    let line = if composing {
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.task_draft.clone()),
            Span::styled("█", modal_title_style()), // Cursor
        ])
    } else if app.task_draft.is_empty() {
        Line::styled("Press 'a' to describe a new task", hint_style())
    } else {
        Line::from(vec![Span::raw("> "), Span::raw(app.task_draft.clone())])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" New task ", title_style()))
            .title(Title::from(button).alignment(Alignment::Right)),
    );
    f.render_widget(paragraph, area);
}
