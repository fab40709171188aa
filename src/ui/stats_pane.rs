use crate::app::AppState;
use crate::insight::PLACEHOLDER_MESSAGE;
use crate::report::stats::RecentSession;
use crate::report::{
    calculate_kpis, format_end_time, history, recent_sessions, tag_distribution, TagShare,
};
use crate::ui::layout::create_stats_layout;
use crate::ui::styles::{
    border_style, default_style, kpi_style, mode_color, mode_style, muted_style, tag_style,
    title_style, PALETTE,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Width of the tag distribution bars, in cells
const TAG_BAR_WIDTH: usize = 20;

/// Percentage of the distribution total held by one tag
fn tag_percentage(share: &TagShare, total_minutes: u32) -> u32 {
    if total_minutes == 0 {
        return 0;
    }
    (f64::from(share.minutes) / f64::from(total_minutes) * 100.0).round() as u32
}

fn tag_bar(percent: u32) -> String {
    let filled = (percent as usize * TAG_BAR_WIDTH / 100).min(TAG_BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(TAG_BAR_WIDTH - filled))
}

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, title_style()))
        .border_style(border_style())
}

/// Render the statistics view
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let logs = app.store.all();
    let layout = create_stats_layout(area);

    // KPI cards
    let kpis = calculate_kpis(logs);
    let cards = [
        (" Total Focus ", format!("{:.1}h", kpis.total_work_hours()), Color::Cyan),
        (" Sessions ", kpis.work_sessions.to_string(), Color::Magenta),
        (" Efficiency ", format!("{}%", kpis.efficiency), Color::Green),
    ];
    for ((title, value, color), card_area) in cards.into_iter().zip(layout.kpi_areas) {
        let paragraph = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(format!(" {}", value), kpi_style(color))),
        ])
        .block(pane_block(title));
        f.render_widget(paragraph, card_area);
    }

    render_tag_distribution(f, &tag_distribution(logs), layout.tags_area);
    render_recent_sessions(f, &recent_sessions(logs), layout.recent_area);
    render_insight(f, app, layout.insight_area);
    render_history(f, app, layout.history_area);
}

fn render_tag_distribution(f: &mut Frame, shares: &[TagShare], area: Rect) {
    let block = pane_block(" Tag Distribution ");

    if shares.is_empty() {
        let paragraph = Paragraph::new(Span::styled(" No data yet", muted_style())).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let total: u32 = shares.iter().map(|s| s.minutes).sum();
    let lines: Vec<Line> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let percent = tag_percentage(share, total);
            Line::from(vec![
                Span::styled(format!(" {:<14}", share.tag), tag_style()),
                Span::styled(tag_bar(percent), Style::default().fg(PALETTE[i % PALETTE.len()])),
                Span::styled(format!(" {:>4}m {:>3}%", share.minutes, percent), default_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_recent_sessions(f: &mut Frame, recent: &[RecentSession], area: Rect) {
    let block = pane_block(" Recent Sessions (min) ");

    if recent.is_empty() {
        let paragraph = Paragraph::new(Span::styled(" No data yet", muted_style())).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar> = recent
        .iter()
        .map(|session| {
            let color = mode_color(session.mode);
            Bar::default()
                .value(u64::from(session.minutes))
                .label(Line::from(session.mode.to_tag().chars().take(1).collect::<String>()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn render_insight(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block(" AI Insight [a] ");

    let paragraph = if app.is_analyzing() {
        Paragraph::new(Span::styled(" Analyzing...", muted_style()))
    } else if let Some(result) = &app.analysis_result {
        Paragraph::new(result.as_str()).style(default_style())
    } else {
        Paragraph::new(Span::styled(PLACEHOLDER_MESSAGE, muted_style()))
    };

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}

fn render_history(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block(" History ");

    let items: Vec<ListItem> = history(app.store.all())
        .skip(app.history_scroll)
        .map(|log| {
            let tags = if log.tags.is_empty() {
                "-".to_string()
            } else {
                log.tags.join(", ")
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", format_end_time(log)), muted_style()),
                Span::styled(format!("{:<6}", log.mode.name()), mode_style(log.mode)),
                Span::styled(format!("{:>3}m  ", log.minutes()), default_style()),
                Span::styled(tags, tag_style()),
            ]))
        })
        .collect();

    if items.is_empty() {
        let paragraph = Paragraph::new(Span::styled(" No sessions logged", muted_style())).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    f.render_widget(List::new(items).block(block), area);
}
