//! Search interface state machine
//!
//! Framework-independent core of the terminal client: a state record
//! (`SearchUi`), an event/effect vocabulary, and one deterministic
//! transition function (`update`). The terminal shell feeds events in and
//! executes the returned effects; nothing in here touches a terminal, a
//! socket, or a clock.

mod state;
mod update;

pub use state::{PendingSubmit, SearchUi, Toast, ToastKind, VoiceCaptureState};
pub use update::{update, Effect, Event};

use std::time::Duration;

/// Delay between a voice transcript landing and its automatic submission
pub const AUTO_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// How long a toast stays visible before it dismisses itself
pub const TOAST_TTL: Duration = Duration::from_secs(3);
