use crate::app::AppState;
use crate::domain::{UiMode, View};
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(status) = &app.status_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", status), error_style())));
        f.render_widget(paragraph, area);
        return;
    }

    let hints = match (app.ui_mode, app.view) {
        (UiMode::Tagging, _) => Line::from(vec![
            Span::raw(" type + Enter add tag   "),
            Span::raw("F1-F5 suggestion   "),
            Span::raw("←/→ select chip   "),
            Span::raw("Del remove   "),
            Span::raw("Ctrl+S save   "),
            Span::raw("Esc discard"),
        ]),
        (UiMode::Normal, View::Timer) => Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("w focus   "),
            Span::raw("b break   "),
            Span::raw("Tab stats   "),
            Span::raw("q quit"),
        ]),
        (UiMode::Normal, View::Stats) => Line::from(vec![
            Span::raw(" a analyze   "),
            Span::raw("↑/↓ history   "),
            Span::raw("Space start/pause   "),
            Span::raw("Tab timer   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
