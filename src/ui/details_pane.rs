use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, hint_style, status_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render a short preview of the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new("No task selected").block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    // Title
    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style()),
        Span::styled(task.status.label(), status_style(task.status)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Assignee: ", title_style()),
        Span::raw(task.assignee_display().to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Deadline: ", title_style()),
        Span::raw(task.deadline_label()),
    ]));
    lines.push(Line::raw(""));

    // Description
    if !task.description.trim().is_empty() {
        for desc_line in task.description.lines() {
            lines.push(Line::styled(desc_line.to_string(), default_style()));
        }
    } else {
        lines.push(Line::styled("(no description)", hint_style()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("Enter for full details", hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
