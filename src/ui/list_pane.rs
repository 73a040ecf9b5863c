use crate::app::AppState;
use crate::domain::{Tab, Task};
use crate::ui::styles::{
    border_style, default_style, error_style, hint_style, importance_style, priority_style,
    selected_style, status_style, title_style,
};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list for the current tab and page
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let page = app.current_page();
    let title = format!(" {} ({}) ", app.view.tab.title(), page.filtered_count);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if page.tasks.is_empty() {
        let message = match app.view.tab {
            Tab::AssignedToMe => "Nothing assigned to you. Enjoy the calm.",
            Tab::AssignedByMe => "You haven't assigned anything yet. Press 'a' to create a task.",
        };
        let empty = Paragraph::new(Line::styled(message, hint_style())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let today = Local::now().date_naive();
    let items: Vec<ListItem> = page
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, app, today);
            let style = if idx == app.selected {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Name to show for a user id, "You" for the signed-in user
fn person<'a>(app: &AppState, user_id: &str, display: &'a str) -> &'a str {
    if app.is_current_user(user_id) {
        "You"
    } else {
        display
    }
}

/// Create a single row
/// Format: [P5] [I3] Fix login bug  ⇢ Ana Ruiz  📅 2025-12-01  (IN PROGRESS)
fn create_task_line(task: &Task, app: &AppState, today: NaiveDate) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!(" P{} ", task.priority),
        priority_style(task.priority_level()),
    ));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!(" I{} ", task.importance),
        importance_style(task.importance_level()),
    ));
    spans.push(Span::raw(" "));

    spans.push(Span::raw(task.title.clone()));
    spans.push(Span::raw("  "));

    // Counterpart: who does it on "by me", who asked on "to me"
    let counterpart = match app.view.tab {
        Tab::AssignedToMe => format!(
            "⇠ {}",
            person(app, &task.assign_by, task.assigner_display())
        ),
        Tab::AssignedByMe => format!(
            "⇢ {}",
            person(app, &task.assignee, task.assignee_display())
        ),
    };
    spans.push(Span::styled(counterpart, hint_style()));
    spans.push(Span::raw("  "));

    let deadline = format!("📅 {}", task.deadline_label());
    if task.is_overdue(today) {
        spans.push(Span::styled(format!("{} overdue", deadline), error_style()));
    } else {
        spans.push(Span::raw(deadline));
    }
    spans.push(Span::raw("  "));

    spans.push(Span::styled(
        format!("({})", task.status.label()),
        status_style(task.status),
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::signed_in_app;
    use crate::app::Action;
    use crate::domain::task::sample_task;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let (app, _api) = signed_in_app(1, 0);
        let mut task = sample_task(5, "me", "boss");
        task.title = "Fix login bug".to_string();
        task.assigner_name = Some("The Boss".to_string());
        task.deadline = Some("2025-12-01".to_string());
        task.priority = 5;

        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let text = line_text(&create_task_line(&task, &app, today));

        assert!(text.contains("P5"));
        assert!(text.contains("I2"));
        assert!(text.contains("Fix login bug"));
        assert!(text.contains("The Boss"));
        assert!(text.contains("2025-12-01 overdue"));
        assert!(text.contains("(OPEN)"));
    }

    #[test]
    fn test_self_shown_as_you() {
        let (mut app, _api) = signed_in_app(0, 1);
        app.dispatch(Action::SwitchTab(Tab::AssignedByMe));
        let task = sample_task(9, "me", "me");
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let text = line_text(&create_task_line(&task, &app, today));
        assert!(text.contains("⇢ You"));
    }

    #[test]
    fn test_render_shows_only_current_page() {
        let (app, _api) = signed_in_app(8, 0);
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_list_pane(f, &app, f.size()))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Assigned to me (8)"));
        assert!(content.contains("Task 6"));
        assert!(!content.contains("Task 7"));
    }
}
