use crate::app::AppState;
use crate::domain::TaskStatus;
use crate::ui::{
    layout::create_modal_area,
    styles::{
        disabled_style, hint_style, importance_style, modal_bg_style, modal_title_style,
        priority_style, status_style,
    },
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MODAL_HEIGHT: u16 = 20;

/// Render the task detail modal with its status control
pub fn render_task_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let (Some(modal), Some(task)) = (&app.modal, app.modal_task()) else {
        return;
    };
    let modal_area = create_modal_area(area, MODAL_HEIGHT);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let label = |text: &'static str| Span::styled(text, modal_title_style());
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        label("  Description: "),
        Span::raw(task.description.clone()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        label("  Priority:    "),
        Span::styled(format!(" P{} ", task.priority), priority_style(task.priority_level())),
        label("   Importance: "),
        Span::styled(
            format!(" I{} ", task.importance),
            importance_style(task.importance_level()),
        ),
    ]));
    lines.push(Line::from(vec![
        label("  Deadline:    "),
        Span::raw(task.deadline_label()),
    ]));
    lines.push(Line::from(vec![
        label("  Assignee:    "),
        Span::raw(task.assignee_display().to_string()),
    ]));
    lines.push(Line::from(vec![
        label("  Assigned by: "),
        Span::raw(task.assigner_display().to_string()),
    ]));
    if let Some(created) = task.created_at.as_deref().filter(|s| !s.is_empty()) {
        lines.push(Line::from(vec![
            label("  Created:     "),
            Span::raw(created.to_string()),
        ]));
    }
    if let Some(suggestions) = task.suggestions.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(Line::raw(""));
        lines.push(Line::from(label("  Suggestions:")));
        for suggestion in suggestions.lines() {
            lines.push(Line::raw(format!("    {}", suggestion)));
        }
    }
    lines.push(Line::raw(""));

    // Status control
    lines.push(status_control_line(modal.control, modal.committed, modal.editable));
    lines.push(Line::raw(""));

    let hint = if modal.editable {
        "  ←/→ choose status  ·  Enter save  ·  Esc close"
    } else {
        "  Only the assignee can change the status  ·  Esc close"
    };
    lines.push(Line::styled(hint, hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", task.title), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// "Status: ‹ IN PROGRESS ›" with a marker when unsaved
fn status_control_line(control: TaskStatus, committed: TaskStatus, editable: bool) -> Line<'static> {
    if !editable {
        return Line::from(vec![
            Span::styled("  Status:      ", modal_title_style()),
            Span::styled(format!("  {}  ", control.label()), disabled_style()),
        ]);
    }

    let mut spans = vec![
        Span::styled("  Status:      ", modal_title_style()),
        Span::raw("‹ "),
        Span::styled(control.label(), status_style(control)),
        Span::raw(" ›"),
    ];
    if control != committed {
        spans.push(Span::styled(
            format!("  (was {}, Enter to save)", committed.label()),
            hint_style(),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::signed_in_app;
    use crate::app::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_task_modal(f, app, f.size())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_status_control_line() {
        let text = line_text(&status_control_line(TaskStatus::Paused, TaskStatus::Open, true));
        assert!(text.contains("‹ PAUSED ›"));
        assert!(text.contains("was OPEN"));

        let text = line_text(&status_control_line(TaskStatus::Open, TaskStatus::Open, true));
        assert!(!text.contains("was"));

        let text = line_text(&status_control_line(TaskStatus::Open, TaskStatus::Open, false));
        assert!(!text.contains('‹'));
    }

    #[test]
    fn test_modal_for_assignee() {
        let (mut app, _api) = signed_in_app(1, 0);
        app.dispatch(Action::OpenTask(1));
        let content = screen(&app);
        assert!(content.contains("Task 1"));
        assert!(content.contains("Enter save"));
    }

    #[test]
    fn test_modal_for_assigner_is_read_only() {
        let (mut app, _api) = signed_in_app(0, 1);
        app.dispatch(Action::OpenTask(1));
        let content = screen(&app);
        assert!(content.contains("Only the assignee"));
    }

    #[test]
    fn test_no_modal_draws_nothing() {
        let (app, _api) = signed_in_app(1, 0);
        let content = screen(&app);
        assert!(content.trim().is_empty());
    }
}
