use super::enums::SessionMode;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed, logged session. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    pub id: String,
    /// Epoch milliseconds
    pub start_time: i64,
    /// Epoch milliseconds
    pub end_time: i64,
    pub duration_seconds: u32,
    pub mode: SessionMode,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SessionLog {
    /// Build a record for a finished session ending at `end`.
    ///
    /// The duration is always the mode's full configured length, regardless
    /// of any pauses taken while the countdown ran.
    pub fn completed(mode: SessionMode, tags: Vec<String>, end: DateTime<Local>) -> Self {
        let duration_seconds = mode.duration_secs();
        let end_time = end.timestamp_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            start_time: end_time - i64::from(duration_seconds) * 1000,
            end_time,
            duration_seconds,
            mode,
            tags,
            note: None,
        }
    }

    /// Duration in whole minutes, rounded to nearest
    pub fn minutes(&self) -> u32 {
        (f64::from(self.duration_seconds) / 60.0).round() as u32
    }

    /// End time in the local timezone, if the stored timestamp is valid
    pub fn end_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.end_time).single()
    }

    pub fn is_work(&self) -> bool {
        self.mode == SessionMode::Work
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_completed_uses_configured_duration() {
        let end = Local::now();
        let log = SessionLog::completed(SessionMode::Work, vec!["Coding".to_string()], end);

        assert_eq!(log.duration_seconds, 3180);
        assert_eq!(log.end_time, end.timestamp_millis());
        assert_eq!(log.end_time - log.start_time, 3_180_000);
        assert_eq!(log.minutes(), 53);
        assert!(log.is_work());
    }

    #[test]
    fn test_ids_are_unique() {
        let end = Local::now();
        let a = SessionLog::completed(SessionMode::Break, Vec::new(), end);
        let b = SessionLog::completed(SessionMode::Break, Vec::new(), end);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_field_names() {
        let log = SessionLog::completed(SessionMode::Break, vec!["Nap".to_string()], Local::now());
        let value = serde_json::to_value(&log).unwrap();

        assert!(value.get("startTime").is_some());
        assert!(value.get("endTime").is_some());
        assert_eq!(value["durationSeconds"], 1020);
        assert_eq!(value["mode"], "BREAK");
        assert!(value.get("note").is_none());
    }

    #[test]
    fn test_note_is_preserved() {
        let json = r#"{"id":"x","startTime":0,"endTime":1020000,"durationSeconds":1020,
            "mode":"BREAK","tags":[],"note":"walked outside"}"#;
        let log: SessionLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.note.as_deref(), Some("walked outside"));

        let back = serde_json::to_string(&log).unwrap();
        let again: SessionLog = serde_json::from_str(&back).unwrap();
        assert_eq!(again, log);
    }
}
