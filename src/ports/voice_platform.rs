//! Voice platform port - speech synthesis and recognition.
//!
//! The platform engine (browser speech API, OS TTS, cloud STT) is external.
//! Callers should check `is_supported()` first; calls on an unsupported
//! platform fail with `SpeechError::Unsupported`.

use async_trait::async_trait;

/// Errors raised by voice operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("Voice is not supported on this platform")]
    Unsupported,

    #[error("Speech platform error: {0}")]
    Platform(String),

    #[error("No speech recognized before the listen timeout")]
    TimedOut,

    #[error("Voice operation was cancelled")]
    Cancelled,
}

/// Port for the speech engine.
///
/// `speak` resolves once playback has finished; `listen` resolves with the
/// recognized transcript. The `stop_*` calls ask the engine to end the
/// corresponding operation and return without waiting for it to wind down.
#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Whether speech synthesis and recognition are available.
    fn is_supported(&self) -> bool;

    /// Speak `text` aloud, resolving when playback completes.
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Capture one utterance and return its transcript.
    async fn listen(&self) -> Result<String, SpeechError>;

    fn stop_listening(&self);

    fn stop_speaking(&self);
}
