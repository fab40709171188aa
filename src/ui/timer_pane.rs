use crate::app::AppState;
use crate::domain::{SessionMode, TimerPhase};
use crate::ui::styles::{
    border_style, clock_style, default_style, gauge_style, hint_style, mode_button_active_style,
    mode_style, phase_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Label shown on a mode button, e.g. "[w] Focus (53m)"
fn mode_button_label(mode: SessionMode) -> String {
    let key = match mode {
        SessionMode::Work => 'w',
        SessionMode::Break => 'b',
    };
    format!(" [{}] {} ({}m) ", key, mode.name(), mode.duration_secs() / 60)
}

fn phase_label(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Idle => "Ready",
        TimerPhase::Running => "Running",
        TimerPhase::Paused => "Paused",
    }
}

/// Render the countdown view
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;
    let mode = timer.mode();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" PolyFocus ", title_style()))
        .border_style(border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode buttons
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Mode label
            Constraint::Length(3), // Clock
            Constraint::Length(1), // Phase
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    // Mode buttons
    let buttons: Vec<Span> = [SessionMode::Work, SessionMode::Break]
        .into_iter()
        .flat_map(|m| {
            let style = if m == mode {
                mode_button_active_style(m)
            } else {
                default_style()
            };
            [Span::styled(mode_button_label(m), style), Span::raw("  ")]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        chunks[0],
    );

    let label = Line::from(Span::styled(
        format!("{} {}", mode.symbol(), mode.name()),
        mode_style(mode),
    ));
    f.render_widget(Paragraph::new(label).alignment(Alignment::Center), chunks[2]);

    let clock = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("   {}   ", timer.remaining_formatted()),
            clock_style(mode),
        )),
        Line::raw(""),
    ];
    f.render_widget(Paragraph::new(clock).alignment(Alignment::Center), chunks[3]);

    let phase = Line::from(Span::styled(
        phase_label(timer.phase()),
        phase_style(timer.phase()),
    ));
    f.render_widget(Paragraph::new(phase).alignment(Alignment::Center), chunks[4]);

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(chunks[6])[1];
    let gauge = Gauge::default()
        .gauge_style(gauge_style(mode))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress() * 100.0));
    f.render_widget(gauge, gauge_area);

    let controls = if timer.is_running() {
        "[Space] Pause   [r] Reset"
    } else {
        "[Space] Start   [r] Reset"
    };
    f.render_widget(
        Paragraph::new(Span::styled(controls, hint_style())).alignment(Alignment::Center),
        chunks[8],
    );
}
