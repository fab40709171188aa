pub mod generator;
pub mod stats;

pub use generator::{format_end_time, generate_report};
pub use stats::{calculate_kpis, history, recent_sessions, tag_distribution, TagShare};
