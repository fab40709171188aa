//! Cross-platform notification support
//! Currently only implements macOS notifications

use crate::domain::SessionMode;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Notification body shown when a session finishes
pub fn session_finished_message(mode: SessionMode) -> String {
    match mode {
        SessionMode::Work => "Focus session complete. Tag it and take a break.".to_string(),
        SessionMode::Break => "Break is over. Tag it and get back to focus.".to_string(),
    }
}

/// AppleScript snippet passed to `osascript -e`
#[cfg(any(target_os = "macos", test))]
fn notification_script(mode: SessionMode) -> String {
    format!(
        r#"display notification "{}" with title "PolyFocus - {} Finished""#,
        session_finished_message(mode).replace('"', "\\\""),
        mode.name()
    )
}

/// Send a notification when a countdown reaches zero.
///
/// `osascript` is spawned, never waited on from the caller's thread.
pub fn notify_session_finished(mode: SessionMode) {
    #[cfg(target_os = "macos")]
    {
        match Command::new("osascript").arg("-e").arg(notification_script(mode)).spawn() {
            Ok(mut child) => {
                // Reap off the UI thread
                std::thread::spawn(move || child.wait());
            }
            Err(e) => tracing::debug!(error = %e, "Failed to send notification"),
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::debug!(
            message = %session_finished_message(mode),
            "Desktop notifications unsupported on this platform"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_per_mode() {
        assert!(session_finished_message(SessionMode::Work).contains("break"));
        assert!(session_finished_message(SessionMode::Break).contains("focus"));
    }

    #[test]
    fn test_notification_script() {
        let script = notification_script(SessionMode::Work);
        assert!(script.starts_with("display notification \"Focus session complete."));
        assert!(script.ends_with("with title \"PolyFocus - Focus Finished\""));
    }
}
