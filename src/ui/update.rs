//! State transitions
//!
//! One deterministic function owns every transition: state plus event in,
//! effects out. Effects name side effects for the shell to run; the machine
//! itself never performs any.

use super::state::{SearchUi, ToastKind, VoiceCaptureState};

/// Everything that can happen to the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Editing
    CharTyped(char),
    DeleteBack,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Controls
    SubmitRequested,
    MicToggled,
    QuitRequested,

    // Search completion, posted back by the worker thread
    SearchCompleted(Vec<crate::results::OrganicResult>),
    SearchFailed(String),

    // Voice capture callbacks
    CaptureStarted,
    TranscriptReady(String),
    CaptureErrored(String),
    CaptureEnded,

    // Timers fired by the shell; stale seqs are ignored
    AutoSubmitElapsed { seq: u64 },
    ToastExpired { seq: u64 },
}

/// Side effects the shell must execute after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the query against the relay on a worker thread
    Search(String),
    /// Start the speech recognizer
    StartCapture,
    /// Stop the speech recognizer early
    StopCapture,
    /// Audible cue when capture begins; failure to play is ignored
    PlayStartCue,
    /// Audible cue when a transcript lands; failure to play is ignored
    PlayEndCue,
}

/// Apply one event to the state, returning the effects to run
pub fn update(ui: &mut SearchUi, event: Event) -> Vec<Effect> {
    match event {
        // Typing cancels a scheduled voice submit so a stale transcript
        // cannot fire after the user has changed the query. Pure cursor
        // movement leaves it alone.
        Event::CharTyped(c) => {
            ui.insert_char(c);
            ui.pending_submit = None;
            Vec::new()
        }
        Event::DeleteBack => {
            if ui.delete_back() {
                ui.pending_submit = None;
            }
            Vec::new()
        }
        Event::DeleteForward => {
            if ui.delete_forward() {
                ui.pending_submit = None;
            }
            Vec::new()
        }
        Event::CursorLeft => {
            ui.cursor_left();
            Vec::new()
        }
        Event::CursorRight => {
            ui.cursor_right();
            Vec::new()
        }
        Event::CursorHome => {
            ui.cursor = 0;
            Vec::new()
        }
        Event::CursorEnd => {
            ui.cursor = ui.query.len();
            Vec::new()
        }

        Event::SubmitRequested => {
            ui.pending_submit = None;
            perform_search(ui, ui.query.clone())
        }

        Event::MicToggled => {
            if !ui.speech_enabled {
                return Vec::new();
            }
            ui.pending_submit = None;
            match ui.voice {
                VoiceCaptureState::Idle => vec![Effect::StartCapture],
                VoiceCaptureState::Listening => vec![Effect::StopCapture],
            }
        }

        Event::QuitRequested => {
            ui.should_quit = true;
            Vec::new()
        }

        Event::SearchCompleted(results) => {
            ui.results = results;
            ui.loading = false;
            ui.raise_toast(ToastKind::Success, "Search completed!");
            Vec::new()
        }
        // Detail was already logged by the shell; prior results stay put.
        Event::SearchFailed(_) => {
            ui.loading = false;
            ui.raise_toast(ToastKind::Error, "Error fetching results");
            Vec::new()
        }

        Event::CaptureStarted => {
            ui.voice = VoiceCaptureState::Listening;
            ui.raise_toast(ToastKind::Info, "Listening...");
            vec![Effect::PlayStartCue]
        }
        Event::TranscriptReady(transcript) => {
            ui.voice = VoiceCaptureState::Idle;
            ui.query = transcript.clone();
            ui.cursor = ui.query.len();
            ui.schedule_submit(transcript);
            ui.raise_toast(ToastKind::Info, "Click search or wait 2 seconds");
            vec![Effect::PlayEndCue]
        }
        Event::CaptureErrored(_) => {
            ui.voice = VoiceCaptureState::Idle;
            ui.raise_toast(ToastKind::Error, "Speech recognition error.");
            Vec::new()
        }
        Event::CaptureEnded => {
            ui.voice = VoiceCaptureState::Idle;
            Vec::new()
        }

        Event::AutoSubmitElapsed { seq } => match ui.pending_submit.take() {
            Some(pending) if pending.seq == seq => perform_search(ui, pending.query),
            // Superseded or cancelled timer; restore whatever was live
            other => {
                ui.pending_submit = other;
                Vec::new()
            }
        },
        Event::ToastExpired { seq } => {
            if ui.toast.as_ref().is_some_and(|t| t.seq == seq) {
                ui.toast = None;
            }
            Vec::new()
        }
    }
}

/// The submission guard shared by manual submit and the auto-submit timer:
/// a blank query is a complete no-op.
fn perform_search(ui: &mut SearchUi, query: String) -> Vec<Effect> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    ui.loading = true;
    vec![Effect::Search(query)]
}
