//! Speech capture capability
//!
//! The interface never inspects the environment directly; it receives a
//! [`SpeechCapability`] probed once at startup. When available, capture is
//! realized by spawning an external transcriber command and reading its
//! first stdout line as the transcript.

use anyhow::Result;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::debug;

use crate::config::ClientSettings;

/// Events a recognizer reports back to the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Capture is live
    Started,
    /// A transcript was produced; capture is over
    Transcript(String),
    /// Capture ended without a result (silence, or stopped early)
    Ended,
    /// Capture failed
    Error(String),
}

/// A speech recognizer the interface can start and stop.
///
/// Both calls are fire-and-forget; outcomes arrive on the event channel.
pub trait SpeechRecognizer: Send {
    fn start(&mut self, events: Sender<CaptureEvent>);
    fn stop(&mut self);
}

/// Presence-checked speech capability
pub enum SpeechCapability {
    Available(Box<dyn SpeechRecognizer>),
    Unavailable(String),
}

impl SpeechCapability {
    /// Check whether a transcriber command is configured and resolvable.
    /// Absence disables voice input for the session; it is never fatal.
    pub fn probe(settings: &ClientSettings) -> Self {
        let command = match &settings.transcriber {
            Some(cmd) if !cmd.trim().is_empty() => cmd.clone(),
            _ => {
                return Self::Unavailable("no transcriber command configured".to_string());
            }
        };

        let program = match command.split_whitespace().next() {
            Some(p) => p.to_string(),
            None => {
                return Self::Unavailable("no transcriber command configured".to_string());
            }
        };

        if !resolves(&program) {
            return Self::Unavailable(format!("transcriber `{}` not found on PATH", program));
        }

        debug!("speech capture available via `{}`", command);
        Self::Available(Box::new(CommandRecognizer::new(command)))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Whether `program` names an existing file, directly or via PATH
fn resolves(program: &str) -> bool {
    if program.contains('/') {
        return Path::new(program).is_file();
    }
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| dir.join(program).is_file())
}

/// Recognizer backed by an external speech-to-text command.
///
/// One capture spawns one child process. The first non-empty stdout line is
/// the transcript; EOF without one means the capture ended silently. `stop`
/// kills the child, which surfaces as `Ended`, not an error.
pub struct CommandRecognizer {
    command: String,
    child: Arc<Mutex<Option<Child>>>,
    stopped: Arc<AtomicBool>,
}

impl CommandRecognizer {
    pub fn new(command: String) -> Self {
        Self {
            command,
            child: Arc::new(Mutex::new(None)),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    fn spawn(&self) -> Result<Child> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty transcriber command"))?;
        let child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(child)
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn start(&mut self, events: Sender<CaptureEvent>) {
        self.stopped.store(false, Ordering::SeqCst);

        let mut child = match self.spawn() {
            Ok(child) => child,
            Err(e) => {
                let _ = events.send(CaptureEvent::Error(e.to_string()));
                return;
            }
        };

        let stdout = child.stdout.take();
        if let Ok(mut slot) = self.child.lock() {
            *slot = Some(child);
        }
        let _ = events.send(CaptureEvent::Started);

        let slot = Arc::clone(&self.child);
        let stopped = Arc::clone(&self.stopped);
        thread::spawn(move || {
            let mut transcript = None;
            if let Some(stdout) = stdout {
                for line in BufReader::new(stdout).lines() {
                    match line {
                        Ok(l) => {
                            let l = l.trim();
                            if !l.is_empty() {
                                transcript = Some(l.to_string());
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }

            // Reap the child before reporting
            let status = slot
                .lock()
                .ok()
                .and_then(|mut slot| slot.take())
                .and_then(|mut child| child.wait().ok());

            if let Some(transcript) = transcript {
                let _ = events.send(CaptureEvent::Transcript(transcript));
                return;
            }
            if stopped.load(Ordering::SeqCst) {
                let _ = events.send(CaptureEvent::Ended);
                return;
            }
            match status {
                Some(status) if !status.success() => {
                    let _ = events.send(CaptureEvent::Error(format!(
                        "transcriber exited with {}",
                        status
                    )));
                }
                _ => {
                    let _ = events.send(CaptureEvent::Ended);
                }
            }
        });
    }

    fn stop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Ok(mut slot) = self.child.lock() {
            if let Some(child) = slot.as_mut() {
                let _ = child.kill();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn settings(transcriber: Option<&str>) -> ClientSettings {
        ClientSettings {
            transcriber: transcriber.map(String::from),
            ..ClientSettings::default()
        }
    }

    #[test]
    fn test_probe_without_command_is_unavailable() {
        let capability = SpeechCapability::probe(&settings(None));
        assert!(!capability.is_available());
    }

    #[test]
    fn test_probe_with_unknown_command_is_unavailable() {
        let capability = SpeechCapability::probe(&settings(Some("no-such-transcriber-cmd")));
        assert!(!capability.is_available());
    }

    #[test]
    fn test_probe_with_resolvable_command_is_available() {
        let capability = SpeechCapability::probe(&settings(Some("sh")));
        assert!(capability.is_available());
    }

    #[test]
    fn test_capture_yields_first_stdout_line() {
        let (tx, rx) = channel();
        let mut recognizer = CommandRecognizer::new("echo hello world".to_string());
        recognizer.start(tx);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Started
        );
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Transcript("hello world".to_string())
        );
    }

    #[test]
    fn test_silent_capture_ends_without_result() {
        let (tx, rx) = channel();
        let mut recognizer = CommandRecognizer::new("true".to_string());
        recognizer.start(tx);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Started
        );
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Ended
        );
    }

    #[test]
    fn test_silent_failure_reports_error() {
        let (tx, rx) = channel();
        let mut recognizer = CommandRecognizer::new("false".to_string());
        recognizer.start(tx);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Started
        );
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Error(_)
        ));
    }

    #[test]
    fn test_spawn_failure_reports_error_without_started() {
        let (tx, rx) = channel();
        let mut recognizer = CommandRecognizer::new("no-such-transcriber-cmd".to_string());
        recognizer.start(tx);

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Error(_)
        ));
    }

    #[test]
    fn test_stop_surfaces_as_ended() {
        let (tx, rx) = channel();
        let mut recognizer = CommandRecognizer::new("sleep 30".to_string());
        recognizer.start(tx);

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Started
        );
        recognizer.stop();
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            CaptureEvent::Ended
        );
    }
}
