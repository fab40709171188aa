use crate::domain::{SessionMode, TimerPhase};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Accent color for a session mode
pub fn mode_color(mode: SessionMode) -> Color {
    match mode {
        SessionMode::Work => Color::Cyan,
        SessionMode::Break => Color::Green,
    }
}

pub fn mode_style(mode: SessionMode) -> Style {
    Style::default()
        .fg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Highlight for the currently selected mode button
pub fn mode_button_active_style(mode: SessionMode) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Phase badge style
pub fn phase_style(phase: TimerPhase) -> Style {
    match phase {
        TimerPhase::Running => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        TimerPhase::Paused => Style::default().fg(Color::Yellow),
        TimerPhase::Idle => Style::default().fg(Color::Gray),
    }
}

/// Countdown digits
pub fn clock_style(mode: SessionMode) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(mode_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Progress gauge for the running session
pub fn gauge_style(mode: SessionMode) -> Style {
    Style::default().fg(mode_color(mode)).bg(Color::DarkGray)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Active navigation tab
pub fn tab_active_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Inactive navigation tab
pub fn tab_inactive_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
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

/// KPI figure style
pub fn kpi_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Selected tag chip
pub fn tag_chip_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Chip under the cursor in the capture modal
pub fn tag_chip_focused_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Tag badge style
pub fn tag_style() -> Style {
    Style::default().fg(Color::Blue)
}

/// Placeholder / empty-state text
pub fn muted_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Colors cycled through for the tag distribution bars
pub const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::LightRed,
    Color::Green,
    Color::Yellow,
    Color::Red,
];
