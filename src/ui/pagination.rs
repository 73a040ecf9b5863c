use crate::domain::PageView;
use crate::ui::styles::{default_style, disabled_style, hint_style, selected_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render "‹ Prev  1 [2] 3  Next ›" under the list
pub fn render_pagination(f: &mut Frame, page: &PageView, area: Rect) {
    if page.total_pages == 0 {
        return;
    }
    let paragraph = Paragraph::new(pagination_line(page)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn pagination_line(page: &PageView) -> Line<'static> {
    let edge = |enabled: bool| if enabled { default_style() } else { disabled_style() };

    let mut spans = vec![
        Span::styled("‹ Prev", edge(page.has_previous())),
        Span::raw("  "),
    ];
    for n in 1..=page.total_pages {
        if n == page.page {
            spans.push(Span::styled(format!("[{}]", n), selected_style()));
        } else {
            spans.push(Span::styled(format!(" {} ", n), hint_style()));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled("Next ›", edge(page.has_next())));
    Line::from(spans)
}
