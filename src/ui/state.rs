//! Client state record

use crate::results::OrganicResult;

/// Toast severity, mapped to a color by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A short-lived status message. At most one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Stamp distinguishing this toast from one it replaced, so an expiry
    /// scheduled for the old toast cannot dismiss the new one.
    pub seq: u64,
}

/// Voice capture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceCaptureState {
    #[default]
    Idle,
    Listening,
}

/// The single-slot delayed auto-submit. Scheduling replaces the slot;
/// a stale timer event (mismatched seq) is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub query: String,
    pub seq: u64,
}

/// Everything the renderer needs, and nothing else.
///
/// All mutation goes through [`super::update`]; the shell only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchUi {
    /// Current query text
    pub query: String,
    /// Byte offset of the cursor within `query`
    pub cursor: usize,
    /// Results of the last successful search, in provider order
    pub results: Vec<OrganicResult>,
    /// True while a search request is in flight
    pub loading: bool,
    /// The one visible toast, if any
    pub toast: Option<Toast>,
    /// Voice capture phase
    pub voice: VoiceCaptureState,
    /// False when no speech capability was found at startup; the mic
    /// control stays inert for the whole session
    pub speech_enabled: bool,
    /// Scheduled auto-submit, if any
    pub pending_submit: Option<PendingSubmit>,
    /// Set when the user asks to quit
    pub should_quit: bool,

    toast_seq: u64,
    submit_seq: u64,
}

impl SearchUi {
    pub fn new(speech_enabled: bool) -> Self {
        let mut ui = Self {
            query: String::new(),
            cursor: 0,
            results: Vec::new(),
            loading: false,
            toast: None,
            voice: VoiceCaptureState::Idle,
            speech_enabled,
            pending_submit: None,
            should_quit: false,
            toast_seq: 0,
            submit_seq: 0,
        };

        if !speech_enabled {
            ui.raise_toast(ToastKind::Error, "Speech recognition unsupported.");
        }

        ui
    }

    /// Replace the visible toast
    pub(crate) fn raise_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            seq: self.toast_seq,
        });
    }

    /// Replace the pending auto-submit slot
    pub(crate) fn schedule_submit(&mut self, query: String) {
        self.submit_seq += 1;
        self.pending_submit = Some(PendingSubmit {
            query,
            seq: self.submit_seq,
        });
    }

    // Byte-correct editing on the query string; the cursor always sits on a
    // character boundary.

    pub(crate) fn insert_char(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(crate) fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor = prev;
        true
    }

    pub(crate) fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor);
        true
    }

    pub(crate) fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub(crate) fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            self.cursor = self.query[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.query.len());
        }
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_speech_starts_clean() {
        let ui = SearchUi::new(true);
        assert!(ui.toast.is_none());
        assert_eq!(ui.voice, VoiceCaptureState::Idle);
        assert!(!ui.loading);
    }

    #[test]
    fn test_new_without_speech_raises_one_error_toast() {
        let ui = SearchUi::new(false);
        let toast = ui.toast.expect("init toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Speech recognition unsupported.");
    }

    #[test]
    fn test_multibyte_editing_stays_on_boundaries() {
        let mut ui = SearchUi::new(true);
        for c in "héllo".chars() {
            ui.insert_char(c);
        }
        assert_eq!(ui.query, "héllo");
        assert_eq!(ui.cursor, ui.query.len());

        ui.cursor_left();
        ui.cursor_left();
        ui.cursor_left();
        ui.cursor_left();
        assert!(ui.delete_back()); // removes 'h'
        assert_eq!(ui.query, "éllo");
        assert_eq!(ui.cursor, 0);

        assert!(ui.delete_forward()); // removes 'é'
        assert_eq!(ui.query, "llo");
    }

    #[test]
    fn test_raise_toast_replaces_and_bumps_seq() {
        let mut ui = SearchUi::new(true);
        ui.raise_toast(ToastKind::Info, "first");
        let first_seq = ui.toast.as_ref().unwrap().seq;
        ui.raise_toast(ToastKind::Success, "second");
        let toast = ui.toast.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert!(toast.seq > first_seq);
    }
}
