use crate::app::AppState;
use crate::domain::{SessionMode, TagCapture};
use crate::ui::{
    layout::create_modal_area,
    styles::{
        hint_style, modal_bg_style, modal_title_style, mode_style, muted_style, tag_chip_focused_style,
        tag_chip_style, tag_style,
    },
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn modal_title(mode: SessionMode) -> String {
    match mode {
        SessionMode::Work => format!(" {} Focus session complete ", mode.symbol()),
        SessionMode::Break => format!(" {} Break complete ", mode.symbol()),
    }
}

fn chip_line(capture: &TagCapture) -> Line<'static> {
    if capture.selected.is_empty() {
        return Line::from(Span::styled("  (no tags yet)", muted_style()));
    }

    let mut spans = vec![Span::raw("  ")];
    for (i, tag) in capture.selected.iter().enumerate() {
        let style = if capture.focused == Some(i) {
            tag_chip_focused_style()
        } else {
            tag_chip_style()
        };
        spans.push(Span::styled(format!(" {} ", tag), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn suggestion_line(capture: &TagCapture) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, tag) in capture.suggestions().iter().enumerate() {
        let style = if capture.selected.iter().any(|t| t == tag) {
            muted_style()
        } else {
            tag_style()
        };
        spans.push(Span::styled(format!("[F{}]", i + 1), modal_title_style()));
        spans.push(Span::styled(format!(" {}  ", tag), style));
    }
    Line::from(spans)
}

/// Render the tag capture step over the current view
pub fn render_tag_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(capture) = &app.capture else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  What did you do during this "),
        Span::styled(capture.mode.name(), mode_style(capture.mode)),
        Span::raw(" session?"),
    ]));
    lines.push(Line::raw(""));

    // Selected tags
    lines.push(chip_line(capture));
    lines.push(Line::raw(""));

    // Input with cursor
    lines.push(Line::from(vec![
        Span::styled("  Tag: ", modal_title_style()),
        Span::raw(capture.input.clone()),
        Span::styled("█", modal_title_style()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled("  Suggestions:", hint_style())));
    lines.push(suggestion_line(capture));
    lines.push(Line::raw(""));

    // Options
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Add tag  "),
        Span::styled("[←/→ Del]", modal_title_style()),
        Span::raw(" Remove  "),
        Span::styled("[Ctrl+S]", modal_title_style()),
        Span::raw(" Save  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Discard"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(modal_title(capture.mode), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
