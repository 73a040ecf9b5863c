use crate::domain::{Level, TaskStatus};
use crate::toast::{ToastKind, ToastPhase};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the pane that has focus
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Greyed-out control
pub fn disabled_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::DIM)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Priority badge: red/yellow/green
pub fn priority_style(level: Level) -> Style {
    let color = match level {
        Level::High => Color::Red,
        Level::Medium => Color::Yellow,
        Level::Low => Color::Green,
    };
    Style::default().fg(Color::Black).bg(color)
}

/// Importance badge, a separate palette from priority
pub fn importance_style(level: Level) -> Style {
    let color = match level {
        Level::High => Color::Magenta,
        Level::Medium => Color::Blue,
        Level::Low => Color::Gray,
    };
    Style::default().fg(Color::White).bg(color)
}

/// Status badge
pub fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Open => Style::default().fg(Color::Cyan),
        TaskStatus::InProgress => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        TaskStatus::Paused => Style::default().fg(Color::Yellow),
        TaskStatus::Finished | TaskStatus::Closed => Style::default().fg(Color::Green),
        TaskStatus::Unknown => Style::default().fg(Color::Gray),
    }
}

/// Toast banner, dimmed while leaving
pub fn toast_style(kind: ToastKind, phase: ToastPhase) -> Style {
    let bg = match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let style = Style::default().fg(Color::White).bg(bg);
    match phase {
        ToastPhase::Visible => style.add_modifier(Modifier::BOLD),
        _ => style.add_modifier(Modifier::DIM),
    }
}
