use crate::domain::{SessionFinished, SessionLog, SessionMode, TagCapture, TimerEngine, UiMode, View};
use crate::insight::{self, FAILURE_MESSAGE, NO_DATA_MESSAGE};
use crate::notifications;
use crate::persistence::{AppConfig, SessionLogStore};
use chrono::Local;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{error, info};

/// Main application state.
///
/// Single owner of the timer, the session history and the capture step; only
/// the event loop mutates it.
pub struct AppState {
    pub timer: TimerEngine,
    pub store: SessionLogStore,
    pub config: AppConfig,
    pub view: View,
    pub ui_mode: UiMode,
    pub capture: Option<TagCapture>,
    pub analysis_result: Option<String>,
    pub status_message: Option<String>,
    pub history_scroll: usize,
    pending_analysis: Option<oneshot::Receiver<String>>,
    runtime: Handle,
}

impl AppState {
    pub fn new(store: SessionLogStore, config: AppConfig, runtime: Handle) -> Self {
        Self {
            timer: TimerEngine::new(),
            store,
            config,
            view: View::Timer,
            ui_mode: UiMode::Normal,
            capture: None,
            analysis_result: None,
            status_message: None,
            history_scroll: 0,
            pending_analysis: None,
            runtime,
        }
    }

    /// Timer controls are locked while the capture step is open
    fn timer_locked(&self) -> bool {
        self.ui_mode == UiMode::Tagging
    }

    pub fn start_timer(&mut self) {
        if !self.timer_locked() {
            self.timer.start();
        }
    }

    pub fn pause_timer(&mut self) {
        if !self.timer_locked() {
            self.timer.pause();
        }
    }

    pub fn toggle_run_pause(&mut self) {
        if !self.timer_locked() {
            self.timer.toggle_run_pause();
        }
    }

    pub fn reset_timer(&mut self) {
        if !self.timer_locked() {
            self.timer.reset();
        }
    }

    /// Manual mode selection from the mode buttons
    pub fn select_mode(&mut self, mode: SessionMode) {
        if !self.timer_locked() {
            self.timer.select_mode(mode);
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Drive the countdown; opens the capture step when a session finishes
    pub fn tick(&mut self, now: Instant) {
        if let Some(finished) = self.timer.advance(now) {
            self.on_session_finished(finished);
        }
        self.poll_analysis();
    }

    fn on_session_finished(&mut self, finished: SessionFinished) {
        info!(mode = finished.mode.to_tag(), "Session finished, awaiting tags");
        self.capture = Some(TagCapture::new(finished.mode));
        self.ui_mode = UiMode::Tagging;
        self.view = View::Timer;

        if self.config.notifications {
            notifications::notify_session_finished(finished.mode);
        }
    }

    /// Log the finished session with the selected tags, then advance the mode
    pub fn confirm_capture(&mut self) {
        let Some(capture) = self.capture.take() else {
            return;
        };
        self.ui_mode = UiMode::Normal;

        let log = SessionLog::completed(capture.mode, capture.into_tags(), Local::now());
        info!(mode = log.mode.to_tag(), tags = ?log.tags, "Session logged");

        if let Err(e) = self.store.append(log) {
            error!(error = %e, "Failed to save session logs");
            self.status_message = Some(format!("Could not save history: {}", e));
        }

        self.timer.switch_mode();
    }

    /// Drop the finished session without logging it, then advance the mode
    pub fn discard_capture(&mut self) {
        if let Some(capture) = self.capture.take() {
            info!(mode = capture.mode.to_tag(), "Session discarded");
            self.ui_mode = UiMode::Normal;
            self.timer.switch_mode();
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending_analysis.is_some()
    }

    /// Start an insight request unless one is already in flight
    pub fn request_analysis(&mut self) {
        if self.is_analyzing() {
            return;
        }

        if self.store.is_empty() {
            self.analysis_result = Some(NO_DATA_MESSAGE.to_string());
            return;
        }

        let logs = self.store.all().to_vec();
        let config = self.config.clone();
        let (tx, rx) = oneshot::channel();

        self.runtime.spawn(async move {
            let text = insight::analyze_logs(&logs, &config).await;
            let _ = tx.send(text);
        });

        info!(sessions = self.store.len(), "Insight request started");
        self.pending_analysis = Some(rx);
    }

    /// Collect a finished insight request, if any
    pub fn poll_analysis(&mut self) {
        let Some(rx) = self.pending_analysis.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(text) => {
                self.analysis_result = Some(text);
                self.pending_analysis = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                error!("Insight task ended without a result");
                self.analysis_result = Some(FAILURE_MESSAGE.to_string());
                self.pending_analysis = None;
            }
        }
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_scroll + 1 < self.store.len() {
            self.history_scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerPhase;
    use crate::report::{calculate_kpis, tag_distribution, TagShare};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn create_test_app() -> (Runtime, AppState) {
        let runtime = Runtime::new().unwrap();
        let config = AppConfig {
            notifications: false,
            ..AppConfig::default()
        };
        let app = AppState::new(SessionLogStore::in_memory(Vec::new()), config, runtime.handle().clone());
        (runtime, app)
    }

    /// Run the current mode's countdown to zero
    fn finish_session(app: &mut AppState) {
        let t0 = Instant::now();
        app.timer.start_at(t0);
        app.tick(t0 + Duration::from_secs(u64::from(app.timer.mode().duration_secs())));
    }

    #[test]
    fn test_app_state_new() {
        let (_rt, app) = create_test_app();
        assert_eq!(app.view, View::Timer);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.capture.is_none());
        assert!(!app.is_analyzing());
    }

    #[test]
    fn test_finish_opens_capture() {
        let (_rt, mut app) = create_test_app();
        app.set_view(View::Stats);
        finish_session(&mut app);

        assert_eq!(app.ui_mode, UiMode::Tagging);
        assert_eq!(app.view, View::Timer);
        assert_eq!(app.capture.as_ref().map(|c| c.mode), Some(SessionMode::Work));
        assert_eq!(app.timer.phase(), TimerPhase::Idle);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_end_to_end_work_session() {
        let (_rt, mut app) = create_test_app();
        finish_session(&mut app);

        app.capture.as_mut().unwrap().add_tag("写作");
        app.confirm_capture();

        let kpis = calculate_kpis(app.store.all());
        assert_eq!(kpis.total_work_secs, 3180);
        assert_eq!(kpis.work_sessions, 1);
        assert_eq!(
            tag_distribution(app.store.all()),
            vec![TagShare {
                tag: "写作".to_string(),
                minutes: 53
            }]
        );

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.mode(), SessionMode::Break);
        assert_eq!(app.timer.remaining_secs(), 1020);
        assert_eq!(app.timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_confirm_logs_finished_mode_duration() {
        let (_rt, mut app) = create_test_app();
        app.select_mode(SessionMode::Break);
        finish_session(&mut app);

        // Mode buttons are locked while tagging
        app.select_mode(SessionMode::Work);
        app.start_timer();
        assert_eq!(app.timer.mode(), SessionMode::Break);
        assert_eq!(app.timer.phase(), TimerPhase::Idle);

        app.confirm_capture();
        let logged = &app.store.all()[0];
        assert_eq!(logged.mode, SessionMode::Break);
        assert_eq!(logged.duration_seconds, 1020);
        assert!(logged.tags.is_empty());
        assert_eq!(app.timer.mode(), SessionMode::Work);
    }

    #[test]
    fn test_discard_keeps_history() {
        let (_rt, mut app) = create_test_app();
        finish_session(&mut app);
        app.discard_capture();

        assert!(app.store.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.mode(), SessionMode::Break);
        assert_eq!(app.timer.remaining_secs(), 1020);
    }

    #[test]
    fn test_confirm_without_capture_is_noop() {
        let (_rt, mut app) = create_test_app();
        app.confirm_capture();
        app.discard_capture();

        assert!(app.store.is_empty());
        assert_eq!(app.timer.mode(), SessionMode::Work);
    }

    #[test]
    fn test_save_failure_keeps_record_and_reports() {
        let runtime = Runtime::new().unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing").join("logs.json");
        let config = AppConfig {
            notifications: false,
            ..AppConfig::default()
        };
        let mut app = AppState::new(SessionLogStore::load(&missing), config, runtime.handle().clone());

        finish_session(&mut app);
        app.capture.as_mut().unwrap().add_tag("Coding");
        app.confirm_capture();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.all()[0].tags, vec!["Coding".to_string()]);
        assert!(!missing.exists());
        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with("Could not save history"));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.mode(), SessionMode::Break);
    }

    #[test]
    fn test_analysis_with_no_logs() {
        let (_rt, mut app) = create_test_app();
        app.request_analysis();

        assert!(!app.is_analyzing());
        assert_eq!(app.analysis_result.as_deref(), Some(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_pending_analysis_blocks_resubmit() {
        let (_rt, mut app) = create_test_app();
        finish_session(&mut app);
        app.confirm_capture();

        let (tx, rx) = oneshot::channel();
        app.pending_analysis = Some(rx);
        app.request_analysis();
        assert!(app.is_analyzing());

        tx.send("insight text".to_string()).unwrap();
        app.poll_analysis();
        assert!(!app.is_analyzing());
        assert_eq!(app.analysis_result.as_deref(), Some("insight text"));
    }

    #[test]
    fn test_dropped_analysis_reports_failure() {
        let (_rt, mut app) = create_test_app();
        let (tx, rx) = oneshot::channel::<String>();
        app.pending_analysis = Some(rx);
        drop(tx);

        app.poll_analysis();
        assert_eq!(app.analysis_result.as_deref(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn test_history_scroll_bounds() {
        let (_rt, mut app) = create_test_app();
        app.scroll_history_up();
        app.scroll_history_down();
        assert_eq!(app.history_scroll, 0);

        for _ in 0..3 {
            finish_session(&mut app);
            app.confirm_capture();
        }
        app.scroll_history_down();
        app.scroll_history_down();
        app.scroll_history_down();
        assert_eq!(app.history_scroll, 2);
    }
}
