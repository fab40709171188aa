use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub nav_area: Rect,
    pub content_area: Rect,
}

/// Areas of the statistics view
pub struct StatsLayout {
    pub kpi_areas: [Rect; 3],
    pub tags_area: Rect,
    pub recent_area: Rect,
    pub insight_area: Rect,
    pub history_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Navigation bar with view tabs (1 row)
/// - Content: the selected view
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Navigation
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        nav_area: chunks[1],
        content_area: chunks[2],
    }
}

/// Split the statistics view
/// - KPI cards (3 across)
/// - Tag distribution (50%) | Recent sessions (50%)
/// - Insight panel | History
pub fn create_stats_layout(area: Rect) -> StatsLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // KPI cards
            Constraint::Percentage(40), // Charts
            Constraint::Min(0),         // Insight + history
        ])
        .split(area);

    let kpis = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(vertical[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[2]);

    StatsLayout {
        kpi_areas: [kpis[0], kpis[1], kpis[2]],
        tags_area: charts[0],
        recent_area: charts[1],
        insight_area: bottom[0],
        history_area: bottom[1],
    }
}

/// Create centered modal area (for the tag capture step)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
