//! Voice dictation over the browser's `SpeechRecognition` API.
//!
//! Recognition runs continuously with interim results. Every result event
//! carries the first alternative of each result so far; the hook joins them
//! and hands the full transcript to the caller, which replaces its draft.

use dioxus::prelude::*;
use serde::Deserialize;

const SUPPORT_SCRIPT: &str =
    "return !!(window.SpeechRecognition || window.webkitSpeechRecognition);";

const START_SCRIPT: &str = r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Recognition) {
    dioxus.send({ kind: "error", message: "Speech recognition is not available" });
    return;
}
const rec = new Recognition();
rec.continuous = true;
rec.interimResults = true;
rec.onresult = (e) => {
    dioxus.send({ kind: "transcript", segments: Array.from(e.results).map(r => r[0].transcript) });
};
rec.onerror = (e) => {
    dioxus.send({ kind: "error", message: String(e.error || "speech error") });
};
rec.onend = () => {
    if (window.__voidNotesDictation === rec) {
        window.__voidNotesDictation = null;
    }
    dioxus.send({ kind: "ended" });
};
window.__voidNotesDictation = rec;
rec.start();
await new Promise(() => {});
"#;

const STOP_SCRIPT: &str =
    "if (window.__voidNotesDictation) { window.__voidNotesDictation.stop(); } return true;";

/// Messages posted back by the recognition script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DictationEvent {
    Transcript { segments: Vec<String> },
    Error { message: String },
    Ended,
}

/// Full transcript of a recognition session so far.
pub fn join_transcripts(segments: &[String]) -> String {
    segments.concat()
}

/// Which recognition session owns the microphone.
///
/// A stopped session keeps delivering events until the browser fires its
/// `end`; those late events must not touch a session started after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    session: u64,
    listening: bool,
}

impl SessionState {
    pub fn listening(&self) -> bool {
        self.listening
    }

    /// Begin a new session and return its id.
    pub fn start(&mut self) -> u64 {
        self.session += 1;
        self.listening = true;
        self.session
    }

    pub fn stop(&mut self) {
        self.session += 1;
        self.listening = false;
    }

    /// Whether events from `session` may still reach the draft.
    pub fn accepts(&self, session: u64) -> bool {
        self.listening && self.session == session
    }

    /// `session` has ended; only the current one clears the flag.
    pub fn finish(&mut self, session: u64) {
        if self.session == session {
            self.listening = false;
        }
    }
}

/// Reactive handle returned by [`use_dictation`].
#[derive(Clone, Copy, PartialEq)]
pub struct Dictation {
    supported: Signal<bool>,
    state: Signal<SessionState>,
    on_transcript: Callback<String>,
    on_error: Callback<String>,
}

impl Dictation {
    /// False until the support check succeeds, and when the API is missing.
    pub fn supported(&self) -> bool {
        (self.supported)()
    }

    pub fn listening(&self) -> bool {
        self.state.read().listening()
    }

    pub fn toggle(&mut self) {
        if self.listening() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn start(&mut self) {
        if self.listening() {
            return;
        }
        let session = self.state.write().start();
        // Starting clears the draft.
        self.on_transcript.call(String::new());

        let mut state = self.state;
        let on_transcript = self.on_transcript;
        let on_error = self.on_error;
        spawn(async move {
            let mut eval = document::eval(START_SCRIPT);
            loop {
                match eval.recv::<DictationEvent>().await {
                    Ok(DictationEvent::Transcript { segments }) => {
                        if state.peek().accepts(session) {
                            on_transcript.call(join_transcripts(&segments));
                        }
                    }
                    Ok(DictationEvent::Error { .. }) if !state.peek().accepts(session) => break,
                    Ok(DictationEvent::Error { message }) => {
                        tracing::warn!("dictation error: {message}");
                        on_error.call(format!("Voice input failed: {message}"));
                        let _ = document::eval(STOP_SCRIPT);
                        break;
                    }
                    Ok(DictationEvent::Ended) => break,
                    Err(e) => {
                        tracing::error!("dictation channel closed: {e:?}");
                        break;
                    }
                }
            }
            state.write().finish(session);
        });
    }

    pub fn stop(&mut self) {
        let _ = document::eval(STOP_SCRIPT);
        self.state.write().stop();
    }
}

/// Dictation bound to the caller's draft.
///
/// `on_transcript` receives the whole transcript on every result, and an
/// empty string when listening starts. `on_error` receives a banner message.
pub fn use_dictation(
    on_transcript: impl FnMut(String) + 'static,
    on_error: impl FnMut(String) + 'static,
) -> Dictation {
    let mut supported = use_signal(|| false);
    let state = use_signal(SessionState::default);
    let on_transcript = use_callback(on_transcript);
    let on_error = use_callback(on_error);

    use_effect(move || {
        spawn(async move {
            match document::eval(SUPPORT_SCRIPT).join::<bool>().await {
                Ok(available) => supported.set(available),
                Err(e) => tracing::debug!("speech recognition check failed: {e:?}"),
            }
        });
    });

    Dictation {
        supported,
        state,
        on_transcript,
        on_error,
    }
}
