use crate::domain::{SessionLog, SessionMode};
use crate::persistence::{atomic_write, report_file};
use crate::report::stats::{calculate_kpis, history, recent_sessions, tag_distribution};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

/// Format minutes as "Xh Ym" or "Xm" for display
pub fn format_minutes(total_mins: u64) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Local "MM-DD HH:MM" label for a session's end time
pub fn format_end_time(log: &SessionLog) -> String {
    log.end_local()
        .map(|dt| dt.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Render the statistics report as Markdown
pub fn render_report(logs: &[SessionLog], date: NaiveDate) -> String {
    let kpis = calculate_kpis(logs);
    let tags = tag_distribution(logs);
    let recent = recent_sessions(logs);

    let mut report = String::new();

    report.push_str(&format!("# PolyFocus Report - {}\n\n", date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Total Work Time:** {:.1}h\n",
        kpis.total_work_hours()
    ));
    report.push_str(&format!(
        "- **Total Break Time:** {}\n",
        format_minutes(kpis.total_break_secs / 60)
    ));
    report.push_str(&format!(
        "- **Completed Focus Sessions:** {}\n",
        kpis.work_sessions
    ));
    report.push_str(&format!("- **Efficiency:** {}%\n\n", kpis.efficiency));

    // Tag Distribution Section
    if !tags.is_empty() {
        report.push_str("## Tag Distribution\n\n");
        for share in &tags {
            report.push_str(&format!(
                "- **{}:** {}\n",
                share.tag,
                format_minutes(u64::from(share.minutes))
            ));
        }
        report.push('\n');
    }

    // Recent Sessions Section
    if !recent.is_empty() {
        report.push_str("## Recent Sessions\n\n");
        for (idx, session) in recent.iter().enumerate() {
            report.push_str(&format!(
                "{}. {} {} min\n",
                idx + 1,
                session.mode.name(),
                session.minutes
            ));
        }
        report.push('\n');
    }

    // History Section
    report.push_str("## History\n\n");
    if logs.is_empty() {
        report.push_str("_No sessions logged yet._\n");
    } else {
        report.push_str("| Type | Time | Duration | Tags |\n");
        report.push_str("|------|------|----------|------|\n");
        for log in history(logs) {
            let tags_str = if log.tags.is_empty() {
                "-".to_string()
            } else {
                log.tags.join(", ")
            };
            let kind = match log.mode {
                SessionMode::Work => "Work",
                SessionMode::Break => "Break",
            };
            report.push_str(&format!(
                "| {} | {} | {} min | {} |\n",
                kind,
                format_end_time(log),
                log.minutes(),
                tags_str
            ));
        }
    }

    report
}

/// Write the statistics report, defaulting to <data dir>/report-YYYY-MM-DD.md
pub fn generate_report(logs: &[SessionLog], output_path: Option<PathBuf>) -> Result<PathBuf> {
    let today = Local::now().date_naive();
    let report = render_report(logs, today);

    let output = match output_path {
        Some(path) => path,
        None => report_file(today)?,
    };

    atomic_write(&output, &report)?;
    info!(path = %output.display(), sessions = logs.len(), "Report written");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(mode: SessionMode, tags: &[&str]) -> SessionLog {
        SessionLog::completed(mode, tags.iter().map(|t| t.to_string()).collect(), Local::now())
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(17), "17m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(106), "1h 46m");
    }

    #[test]
    fn test_render_empty_report() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let report = render_report(&[], date);

        assert!(report.starts_with("# PolyFocus Report - 2026-10-19"));
        assert!(report.contains("- **Efficiency:** 0%"));
        assert!(report.contains("_No sessions logged yet._"));
        assert!(!report.contains("## Tag Distribution"));
    }

    #[test]
    fn test_render_report_sections() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let logs = vec![log(SessionMode::Work, &["Writing"]), log(SessionMode::Break, &[])];
        let report = render_report(&logs, date);

        assert!(report.contains("- **Completed Focus Sessions:** 1"));
        assert!(report.contains("- **Efficiency:** 76%"));
        assert!(report.contains("- **Writing:** 53m"));
        assert!(report.contains("- **Untagged:** 17m"));
        assert!(report.contains("1. Focus 53 min"));

        // History is newest first
        let break_row = report.find("| Break |").unwrap();
        let work_row = report.find("| Work |").unwrap();
        assert!(break_row < work_row);
    }

    #[test]
    fn test_generate_report_to_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.md");

        let written = generate_report(&[log(SessionMode::Work, &[])], Some(path.clone())).unwrap();
        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## History"));
    }
}
