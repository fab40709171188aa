use serde::{Deserialize, Serialize};

/// Configured length of a work session in seconds (53 minutes)
pub const WORK_DURATION_SECS: u32 = 53 * 60;

/// Configured length of a break session in seconds (17 minutes)
pub const BREAK_DURATION_SECS: u32 = 17 * 60;

/// Which kind of interval the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionMode {
    Work,
    Break,
}

impl SessionMode {
    /// Fixed configured duration for this mode
    pub fn duration_secs(&self) -> u32 {
        match self {
            SessionMode::Work => WORK_DURATION_SECS,
            SessionMode::Break => BREAK_DURATION_SECS,
        }
    }

    /// The mode the timer advances to after a session of this mode
    pub fn toggled(&self) -> Self {
        match self {
            SessionMode::Work => SessionMode::Break,
            SessionMode::Break => SessionMode::Work,
        }
    }

    /// Stored tag, matches the serialized form
    pub fn to_tag(&self) -> &'static str {
        match self {
            SessionMode::Work => "WORK",
            SessionMode::Break => "BREAK",
        }
    }

    /// Display name for the UI
    pub fn name(&self) -> &'static str {
        match self {
            SessionMode::Work => "Focus",
            SessionMode::Break => "Break",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SessionMode::Work => "💼",
            SessionMode::Break => "☕",
        }
    }

    /// Advisory quick-add tags offered by the capture step
    pub fn suggested_tags(&self) -> &'static [&'static str] {
        match self {
            SessionMode::Work => &["Project A", "Coding", "Writing", "Meetings", "Planning"],
            SessionMode::Break => &["Reading", "Exercise", "Nap", "Social", "Coffee"],
        }
    }
}

/// Lifecycle phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

impl TimerPhase {
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }
}

/// Top-level view selected in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Stats,
}

impl View {
    pub fn toggled(&self) -> Self {
        match self {
            View::Timer => View::Stats,
            View::Stats => View::Timer,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Tagging, // Capture step shown after a session finishes
}
