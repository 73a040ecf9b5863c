use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the keys that work in `mode`
pub fn hints_for(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Auth => " Tab/↓ next field   Shift+Tab/↑ previous   Enter submit   Ctrl+R login/register   Esc quit",
        UiMode::Normal => " ↑/↓ select   ←/→ page   1-9 jump   Tab switch tab   Enter open   a new task   r refresh   o logout   q quit",
        UiMode::ComposingTask => " Type the task description   Enter assign   Esc back",
        UiMode::TaskModal => " ←/→ status   Enter save   Esc close",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints_for(mode))).style(hint_style());
    f.render_widget(paragraph, area);
}
