use crate::app::{AppState, AuthForm};
use crate::domain::AuthMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the sign-in or sign-up form
pub fn render_auth_form(f: &mut Frame, app: &AppState, area: Rect) {
    let form = app.active_form();
    let height = (form.fields.len() as u16) * 3 + 6;
    let modal_area = create_modal_area(area, height);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let title_text = match app.auth_mode {
        AuthMode::Login => " Sign in ",
        AuthMode::Register => " Create account ",
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.extend(form_lines(form));

    let switch_hint = match app.auth_mode {
        AuthMode::Login => "No account? Ctrl+R to register",
        AuthMode::Register => "Have an account? Ctrl+R to sign in",
    };
    match app.busy {
        Some(label) => lines.push(Line::styled(label, modal_title_style())),
        None => lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to quit")),
    }
    lines.push(Line::styled(switch_hint, hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Label, value and cursor for each field; secrets are masked
fn form_lines(form: &AuthForm) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, field) in form.fields.iter().enumerate() {
        let editing = idx == form.focused;
        let marker = if field.required { "" } else { " (optional)" };
        let label = if editing {
            format!("{}{}: (editing)", field.label, marker)
        } else {
            format!("{}{}:", field.label, marker)
        };
        lines.push(Line::raw(label));

        let shown = if field.secret {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(shown, modal_title_style()),
            if editing {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));
    }
    lines
}
