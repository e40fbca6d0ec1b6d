//! Speech-to-text dictation
//!
//! Dictation is an optional platform capability. A front-end that has one
//! hands a [`SpeechRecognizer`] to the new-entry form; recognized phrases are
//! then fed back through `NewJournalPage::append_transcript`. Without one the
//! form shows a notice and keeps working.

use thiserror::Error;

/// Shown when dictation is requested but the platform has no recognizer
pub const UNSUPPORTED_NOTICE: &str = "Speech recognition is not supported in this environment.";

/// A platform speech recognizer
pub trait SpeechRecognizer: Send + Sync {
    /// Begin delivering transcripts
    fn start(&self) -> Result<(), SpeechError>;

    /// Stop delivering transcripts
    fn stop(&self);
}

/// Errors raised by a recognizer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Microphone access was denied")]
    PermissionDenied,

    #[error("Speech recognition failed: {0}")]
    Failed(String),
}

/// Dictation toggle state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictation {
    listening: bool,
    notice: Option<String>,
}

impl Dictation {
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// User-visible notice (unsupported platform, recognizer error)
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Start or stop listening; returns whether dictation is now active
    pub fn toggle(&mut self, recognizer: Option<&dyn SpeechRecognizer>) -> bool {
        let Some(recognizer) = recognizer else {
            tracing::warn!("Dictation requested without a speech recognizer");
            self.listening = false;
            self.notice = Some(UNSUPPORTED_NOTICE.to_string());
            return false;
        };

        if self.listening {
            recognizer.stop();
            self.listening = false;
            return false;
        }

        match recognizer.start() {
            Ok(()) => {
                self.listening = true;
                self.notice = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dictation failed to start");
                self.listening = false;
                self.notice = Some(e.to_string());
            }
        }
        self.listening
    }

    /// Recognizer stopped on its own (silence timeout, error)
    pub fn ended(&mut self, error: Option<SpeechError>) {
        self.listening = false;
        if let Some(e) = error {
            self.notice = Some(e.to_string());
        }
    }
}

/// Append a recognized phrase to existing text, never replacing it
pub fn append_transcript(content: &str, transcript: &str) -> String {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return content.to_string();
    }
    if content.trim_end().is_empty() {
        return transcript.to_string();
    }
    format!("{} {}", content.trim_end(), transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeRecognizer {
        starts: AtomicUsize,
        stops: AtomicUsize,
        deny: bool,
    }

    impl SpeechRecognizer for FakeRecognizer {
        fn start(&self) -> Result<(), SpeechError> {
            if self.deny {
                return Err(SpeechError::PermissionDenied);
            }
            self.starts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn stop(&self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_append_never_replaces() {
        assert_eq!(append_transcript("", "hello"), "hello");
        assert_eq!(append_transcript("Today was", " good "), "Today was good");
        assert_eq!(append_transcript("Line one\n", "two"), "Line one two");
        assert_eq!(append_transcript("kept", "   "), "kept");
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let recognizer = FakeRecognizer::default();
        let mut dictation = Dictation::default();

        assert!(dictation.toggle(Some(&recognizer)));
        assert!(dictation.is_listening());
        assert!(!dictation.toggle(Some(&recognizer)));

        assert_eq!(recognizer.starts.load(Ordering::SeqCst), 1);
        assert_eq!(recognizer.stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_recognizer_is_a_notice() {
        let mut dictation = Dictation::default();
        assert!(!dictation.toggle(None));
        assert_eq!(dictation.notice(), Some(UNSUPPORTED_NOTICE));
    }

    #[test]
    fn test_start_failure_is_a_notice() {
        let recognizer = FakeRecognizer {
            deny: true,
            ..Default::default()
        };
        let mut dictation = Dictation::default();
        assert!(!dictation.toggle(Some(&recognizer)));
        assert_eq!(dictation.notice(), Some("Microphone access was denied"));
    }

    #[test]
    fn test_recognizer_ending_resets_toggle() {
        let recognizer = FakeRecognizer::default();
        let mut dictation = Dictation::default();
        dictation.toggle(Some(&recognizer));

        dictation.ended(None);
        assert!(!dictation.is_listening());
        assert!(dictation.notice().is_none());
    }
}
