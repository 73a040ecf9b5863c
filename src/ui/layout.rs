use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
    pub pagination_area: Rect,
    pub composer_area: Rect,
}

/// Create the dashboard layout
/// - Top bar: keybindings (1 row)
/// - Header: user + tab strip (3 rows)
/// - Main area: List (65%) | Details (35%)
/// - Pagination bar (1 row)
/// - Composer for new tasks (3 rows)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List + details
            Constraint::Length(1), // Pagination
            Constraint::Length(3), // Composer
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // List pane
            Constraint::Percentage(35), // Details pane
        ])
        .split(rows[2]);

    MainLayout {
        keybindings_area: rows[0],
        header_area: rows[1],
        list_area: main[0],
        details_area: main[1],
        pagination_area: rows[3],
        composer_area: rows[4],
    }
}

/// Create centered modal area with a fixed height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Bottom-right column for `count` stacked toasts, one row each plus borders
pub fn create_toast_area(area: Rect, count: usize) -> Rect {
    let width = (area.width / 2).max(20).min(area.width);
    let height = ((count as u16).saturating_mul(3)).min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.pagination_area.height, 1);
        assert_eq!(layout.composer_area.height, 3);
        assert!(layout.list_area.height > 0);
        assert_eq!(layout.list_area.height, layout.details_area.height);
        assert!(layout.list_area.width > layout.details_area.width);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 18);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 18);

        let tiny = create_modal_area(Rect::new(0, 0, 40, 10), 18);
        assert!(tiny.height <= 10);
    }

    #[test]
    fn test_toast_area_hugs_bottom_right() {
        let area = Rect::new(0, 0, 100, 40);
        let toasts = create_toast_area(area, 2);
        assert_eq!(toasts.height, 6);
        assert_eq!(toasts.x + toasts.width, 100);
        assert_eq!(toasts.y + toasts.height, 40);
    }
}
