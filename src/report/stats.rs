use crate::domain::{SessionLog, SessionMode};
use std::collections::HashMap;

/// Bucket for sessions logged without any tag
pub const UNTAGGED: &str = "Untagged";

/// Number of sessions shown in the recent-sessions chart
pub const RECENT_WINDOW: usize = 10;

/// Minutes attributed to one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagShare {
    pub tag: String,
    pub minutes: u32,
}

/// One bar of the recent-sessions chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentSession {
    pub minutes: u32,
    pub mode: SessionMode,
}

/// Headline figures for the statistics view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Kpis {
    pub total_work_secs: u64,
    pub total_break_secs: u64,
    pub work_sessions: usize,
    /// Percentage of logged time spent working (0-100)
    pub efficiency: u32,
}

impl Kpis {
    pub fn total_work_hours(&self) -> f64 {
        self.total_work_secs as f64 / 3600.0
    }
}

/// Minutes per tag, sorted by minutes descending.
///
/// A session's duration is split evenly across its tags; sessions without
/// tags go to the [`UNTAGGED`] bucket. Rounding happens once per tag, after
/// all fractional shares have been summed.
pub fn tag_distribution(logs: &[SessionLog]) -> Vec<TagShare> {
    let mut tag_secs: HashMap<&str, f64> = HashMap::new();

    for log in logs {
        let labels: Vec<&str> = if log.tags.is_empty() {
            vec![UNTAGGED]
        } else {
            log.tags.iter().map(String::as_str).collect()
        };
        let share = f64::from(log.duration_seconds) / labels.len() as f64;
        for label in labels {
            *tag_secs.entry(label).or_insert(0.0) += share;
        }
    }

    let mut shares: Vec<TagShare> = tag_secs
        .into_iter()
        .map(|(tag, secs)| TagShare {
            tag: tag.to_string(),
            minutes: (secs / 60.0).round() as u32,
        })
        .collect();

    shares.sort_by(|a, b| b.minutes.cmp(&a.minutes).then_with(|| a.tag.cmp(&b.tag)));
    shares
}

/// The last [`RECENT_WINDOW`] sessions, oldest first
pub fn recent_sessions(logs: &[SessionLog]) -> Vec<RecentSession> {
    let start = logs.len().saturating_sub(RECENT_WINDOW);
    logs[start..]
        .iter()
        .map(|log| RecentSession {
            minutes: log.minutes(),
            mode: log.mode,
        })
        .collect()
}

/// All sessions, newest first
pub fn history(logs: &[SessionLog]) -> impl Iterator<Item = &SessionLog> {
    logs.iter().rev()
}

pub fn calculate_kpis(logs: &[SessionLog]) -> Kpis {
    let mut kpis = Kpis::default();

    for log in logs {
        match log.mode {
            SessionMode::Work => {
                kpis.total_work_secs += u64::from(log.duration_seconds);
                kpis.work_sessions += 1;
            }
            SessionMode::Break => {
                kpis.total_break_secs += u64::from(log.duration_seconds);
            }
        }
    }

    kpis.efficiency = efficiency(kpis.total_work_secs, kpis.total_break_secs);
    kpis
}

/// round(100 * work / (work + break)), or 0 with nothing logged
pub fn efficiency(work_secs: u64, break_secs: u64) -> u32 {
    let total = work_secs + break_secs;
    if total == 0 {
        return 0;
    }
    (work_secs as f64 / total as f64 * 100.0).round() as u32
}
