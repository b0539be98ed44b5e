//! Terminal event loop
//!
//! Owns the state machine and everything it must not know about: the
//! terminal, worker threads, channels, and the two timer slots. All state
//! changes flow through `ui::update`; this loop only feeds events in and
//! executes the effects that come back.

use crate::config::Settings;
use crate::network::RelayClient;
use crate::results::OrganicResult;
use crate::speech::{CaptureEvent, SpeechCapability, SpeechRecognizer};
use crate::tui::render;
use crate::ui::{self, Effect, Event as UiEvent, SearchUi, AUTO_SUBMIT_DELAY, TOAST_TTL};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::io::Write;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::error;

/// Messages from search worker threads
pub enum SearchMessage {
    Completed(Vec<OrganicResult>),
    Failed(String),
}

pub struct App {
    pub ui: SearchUi,

    relay: RelayClient,
    recognizer: Option<Box<dyn SpeechRecognizer>>,

    capture_tx: Sender<CaptureEvent>,
    capture_rx: Receiver<CaptureEvent>,
    search_tx: Sender<SearchMessage>,
    search_rx: Receiver<SearchMessage>,

    // Single-slot deadlines, re-armed from state after every update. The
    // seq ties each slot to the toast/pending-submit it was armed for.
    auto_submit_deadline: Option<(u64, Instant)>,
    toast_deadline: Option<(u64, Instant)>,
}

impl App {
    pub fn new(settings: &Settings, capability: SpeechCapability) -> Result<Self> {
        let relay = RelayClient::with_settings(&settings.client)?;
        let (capture_tx, capture_rx) = channel();
        let (search_tx, search_rx) = channel();

        let (recognizer, ui) = match capability {
            SpeechCapability::Available(recognizer) => (Some(recognizer), SearchUi::new(true)),
            SpeechCapability::Unavailable(reason) => {
                tracing::warn!("voice input disabled: {}", reason);
                (None, SearchUi::new(false))
            }
        };

        let mut app = Self {
            ui,
            relay,
            recognizer,
            capture_tx,
            capture_rx,
            search_tx,
            search_rx,
            auto_submit_deadline: None,
            toast_deadline: None,
        };
        // The "unsupported" toast raised at init still has to expire
        app.sync_timers();
        Ok(app)
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| render::draw(frame, &self.ui))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.drain_messages();
                self.fire_due_timers();
                last_tick = Instant::now();
            }

            if self.ui.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                UiEvent::QuitRequested
            }
            KeyCode::Esc => UiEvent::QuitRequested,
            KeyCode::Enter => UiEvent::SubmitRequested,
            KeyCode::F(2) => UiEvent::MicToggled,
            KeyCode::Char(c) => UiEvent::CharTyped(c),
            KeyCode::Backspace => UiEvent::DeleteBack,
            KeyCode::Delete => UiEvent::DeleteForward,
            KeyCode::Left => UiEvent::CursorLeft,
            KeyCode::Right => UiEvent::CursorRight,
            KeyCode::Home => UiEvent::CursorHome,
            KeyCode::End => UiEvent::CursorEnd,
            _ => return,
        };
        self.apply(event);
    }

    /// Run one event through the machine, execute its effects, re-arm timers
    fn apply(&mut self, event: UiEvent) {
        let effects = ui::update(&mut self.ui, event);
        for effect in effects {
            self.run_effect(effect);
        }
        self.sync_timers();
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Search(query) => {
                let relay = self.relay.clone();
                let tx = self.search_tx.clone();
                thread::spawn(move || {
                    let message = match relay.search(&query) {
                        Ok(results) => SearchMessage::Completed(results.organic_results),
                        Err(e) => SearchMessage::Failed(e.to_string()),
                    };
                    let _ = tx.send(message);
                });
            }
            Effect::StartCapture => {
                if let Some(recognizer) = self.recognizer.as_mut() {
                    recognizer.start(self.capture_tx.clone());
                }
            }
            Effect::StopCapture => {
                if let Some(recognizer) = self.recognizer.as_mut() {
                    recognizer.stop();
                }
            }
            Effect::PlayStartCue | Effect::PlayEndCue => ring_bell(),
        }
    }

    fn drain_messages(&mut self) {
        while let Ok(event) = self.capture_rx.try_recv() {
            let event = match event {
                CaptureEvent::Started => UiEvent::CaptureStarted,
                CaptureEvent::Transcript(t) => UiEvent::TranscriptReady(t),
                CaptureEvent::Ended => UiEvent::CaptureEnded,
                CaptureEvent::Error(detail) => {
                    error!("speech capture failed: {}", detail);
                    UiEvent::CaptureErrored(detail)
                }
            };
            self.apply(event);
        }

        while let Ok(message) = self.search_rx.try_recv() {
            let event = match message {
                SearchMessage::Completed(results) => UiEvent::SearchCompleted(results),
                SearchMessage::Failed(detail) => {
                    error!("search request failed: {}", detail);
                    UiEvent::SearchFailed(detail)
                }
            };
            self.apply(event);
        }
    }

    fn fire_due_timers(&mut self) {
        let now = Instant::now();

        if let Some((seq, deadline)) = self.auto_submit_deadline {
            if now >= deadline {
                self.auto_submit_deadline = None;
                self.apply(UiEvent::AutoSubmitElapsed { seq });
            }
        }

        if let Some((seq, deadline)) = self.toast_deadline {
            if now >= deadline {
                self.toast_deadline = None;
                self.apply(UiEvent::ToastExpired { seq });
            }
        }
    }

    /// Re-arm the deadline slots from state. A slot is armed exactly when
    /// its concern exists, keyed by seq, so replacing a toast or a pending
    /// submit always restarts its timer and never leaves two live.
    fn sync_timers(&mut self) {
        match &self.ui.pending_submit {
            Some(pending) => {
                if self.auto_submit_deadline.map(|(seq, _)| seq) != Some(pending.seq) {
                    self.auto_submit_deadline =
                        Some((pending.seq, Instant::now() + AUTO_SUBMIT_DELAY));
                }
            }
            None => self.auto_submit_deadline = None,
        }

        match &self.ui.toast {
            Some(toast) => {
                if self.toast_deadline.map(|(seq, _)| seq) != Some(toast.seq) {
                    self.toast_deadline = Some((toast.seq, Instant::now() + TOAST_TTL));
                }
            }
            None => self.toast_deadline = None,
        }
    }
}

/// Terminal bell as the audio cue; failure to play is ignored
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
