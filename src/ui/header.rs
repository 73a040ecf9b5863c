use crate::app::AppState;
use crate::domain::{tab_counts, Tab};
use crate::ui::styles::{border_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Tabs},
    Frame,
};

/// Tab strip with per-tab counts and the signed-in user
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let (to_me, by_me) = app
        .user
        .as_ref()
        .map(|u| tab_counts(&app.tasks, &u.id))
        .unwrap_or((0, 0));

    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| {
            let count = match tab {
                Tab::AssignedToMe => to_me,
                Tab::AssignedByMe => by_me,
            };
            Line::raw(format!(" {} ({}) ", tab.title(), count))
        })
        .collect();

    let selected = Tab::all()
        .iter()
        .position(|tab| *tab == app.view.tab)
        .unwrap_or(0);

    let who = app
        .user
        .as_ref()
        .map(|u| match u.email.as_deref() {
            Some(email) => format!(" {} <{}> ", u.name, email),
            None => format!(" {} ", u.name),
        })
        .unwrap_or_default();

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(selected_style())
        .divider(Span::styled("│", hint_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Tasks ", title_style()))
                .title(Title::from(Span::styled(who, title_style())).alignment(Alignment::Right)),
        );

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::signed_in_app;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_header_counts_both_tabs() {
        let (app, _api) = signed_in_app(3, 2);
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
        terminal.draw(|f| render_header(f, &app, f.size())).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Assigned to me (3)"));
        assert!(content.contains("Assigned by me (2)"));
        assert!(content.contains("Ana Ruiz <ana@example.com>"));
    }
}
