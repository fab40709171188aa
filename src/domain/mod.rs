pub mod enums;
pub mod session;
pub mod tagging;
pub mod timer;

pub use enums::{SessionMode, TimerPhase, UiMode, View};
pub use session::SessionLog;
pub use tagging::TagCapture;
pub use timer::{SessionFinished, TimerEngine};
