pub mod composer;
pub mod details_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod pagination;
pub mod styles;
pub mod toast_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use composer::render_composer;
use details_pane::render_details_pane;
use header::render_header;
use input_form::render_auth_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_task_modal;
use pagination::render_pagination;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};
use styles::modal_title_style;
use toast_pane::render_toasts;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    if app.ui_mode == UiMode::Auth {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(size);
        render_keybindings(f, app.ui_mode, rows[0]);
        render_auth_form(f, app, rows[1]);
        render_toasts(f, &app.toasts, size);
        return;
    }

    let layout = create_layout(size);

    // Render keybindings bar, or the in-flight label while a call runs
    match app.busy {
        Some(label) if app.ui_mode != UiMode::ComposingTask => {
            f.render_widget(
                Paragraph::new(format!(" {}", label)).style(modal_title_style()),
                layout.keybindings_area,
            );
        }
        _ => render_keybindings(f, app.ui_mode, layout.keybindings_area),
    }

    // Render panes
    render_header(f, app, layout.header_area);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);
    render_pagination(f, &app.current_page(), layout.pagination_area);
    render_composer(f, app, layout.composer_area);

    // Render modal if active
    if app.ui_mode == UiMode::TaskModal {
        render_task_modal(f, app, size);
    }

    render_toasts(f, &app.toasts, size);
}
