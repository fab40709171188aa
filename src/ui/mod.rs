pub mod keybindings;
pub mod layout;
pub mod stats_pane;
pub mod styles;
pub mod tag_modal;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{UiMode, View};
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use stats_pane::render_stats_pane;
use styles::{tab_active_style, tab_inactive_style};
use tag_modal::render_tag_modal;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    render_nav(f, app, layout.nav_area);

    match app.view {
        View::Timer => render_timer_pane(f, app, layout.content_area),
        View::Stats => render_stats_pane(f, app, layout.content_area),
    }

    // Capture step sits above everything
    if app.ui_mode == UiMode::Tagging {
        render_tag_modal(f, app, size);
    }
}

/// Navigation tabs
fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let tab = |label: &'static str, view: View| {
        let style = if app.view == view {
            tab_active_style()
        } else {
            tab_inactive_style()
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        Span::raw(" "),
        tab("[1] Timer", View::Timer),
        Span::raw("   "),
        tab("[2] Stats", View::Stats),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
