use crate::domain::SessionLog;
use crate::persistence::{atomic_write, read_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Durable, append-only collection of completed sessions.
///
/// The whole collection is rewritten on every append.
#[derive(Debug)]
pub struct SessionLogStore {
    path: Option<PathBuf>,
    logs: Vec<SessionLog>,
}

impl SessionLogStore {
    /// Load the collection from `path`.
    ///
    /// A missing, empty or unreadable file yields an empty store; this never fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let logs = match read_file(path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => match serde_json::from_str::<Vec<SessionLog>>(&content) {
                Ok(logs) => logs,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse session logs, starting empty");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read session logs, starting empty");
                Vec::new()
            }
        };

        info!(count = logs.len(), path = %path.display(), "Loaded session logs");
        Self {
            path: Some(path.to_path_buf()),
            logs,
        }
    }

    /// Store with no backing file (nothing is persisted)
    #[cfg(test)]
    pub fn in_memory(logs: Vec<SessionLog>) -> Self {
        Self { path: None, logs }
    }

    /// Append a record and persist the full collection.
    ///
    /// The record stays in memory even if writing to disk fails.
    pub fn append(&mut self, log: SessionLog) -> Result<()> {
        self.logs.push(log);
        self.save()
    }

    pub fn all(&self) -> &[SessionLog] {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.logs).context("Failed to serialize session logs")?;
        atomic_write(path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionMode;
    use chrono::Local;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn log(mode: SessionMode, tags: &[&str]) -> SessionLog {
        SessionLog::completed(mode, tags.iter().map(|t| t.to_string()).collect(), Local::now())
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let store = SessionLogStore::load(temp_dir.path().join("logs.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("logs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionLogStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_fields_degrades_to_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("logs.json");
        std::fs::write(&path, r#"[{"id":"a","mode":"WORK"}]"#).unwrap();

        let store = SessionLogStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_persists_in_order() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("logs.json");

        let mut store = SessionLogStore::load(&path);
        let first = log(SessionMode::Work, &["Coding"]);
        let second = log(SessionMode::Break, &[]);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let reloaded = SessionLogStore::load(&path);
        assert_eq!(reloaded.all(), &[first, second][..]);
    }

    #[test]
    fn test_in_memory_append() {
        let mut store = SessionLogStore::in_memory(Vec::new());
        store.append(log(SessionMode::Work, &[])).unwrap();
        assert_eq!(store.len(), 1);
    }
}
