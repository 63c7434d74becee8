//! Voice platform for hosts without speech support.

use async_trait::async_trait;

use crate::ports::{SpeechError, VoicePlatform};

/// Reports no capability and fails every operation with
/// `SpeechError::Unsupported`. Interviews then run text-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedVoice;

#[async_trait]
impl VoicePlatform for UnsupportedVoice {
    fn is_supported(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    async fn listen(&self) -> Result<String, SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop_listening(&self) {}

    fn stop_speaking(&self) {}
}
