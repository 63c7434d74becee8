//! VoiceController - cancellable speak and listen on top of a `VoicePlatform`.
//!
//! Output (speaking) and input (listening) are independent channels. Each
//! channel runs at most one operation: starting a new one stops the
//! platform and aborts the task already running there, without waiting
//! for it to wind down.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

use crate::ports::{SpeechError, VoicePlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelKind {
    Speaking,
    Listening,
}

impl ChannelKind {
    fn stop(self, platform: &dyn VoicePlatform) {
        match self {
            ChannelKind::Speaking => platform.stop_speaking(),
            ChannelKind::Listening => platform.stop_listening(),
        }
    }
}

#[derive(Default)]
struct Slot {
    generation: u64,
    running: Option<AbortHandle>,
}

/// One voice channel. Active while `running` holds a handle.
struct Channel {
    kind: ChannelKind,
    slot: Mutex<Slot>,
}

impl Channel {
    fn new(kind: ChannelKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            slot: Mutex::new(Slot::default()),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_active(&self) -> bool {
        self.lock().running.is_some()
    }

    /// Stops whatever runs on the channel. Returns whether anything did.
    fn cancel(&self, platform: &dyn VoicePlatform) -> bool {
        let mut slot = self.lock();
        Self::stop_running(self.kind, &mut slot, platform)
    }

    /// Stops the operation started as `generation`, if it is still current.
    fn cancel_generation(&self, generation: u64, platform: &dyn VoicePlatform) {
        let mut slot = self.lock();
        if slot.generation == generation {
            Self::stop_running(self.kind, &mut slot, platform);
        }
    }

    /// Marks `generation` done unless a newer operation replaced it.
    fn finish(&self, generation: u64) {
        let mut slot = self.lock();
        if slot.generation == generation {
            slot.running = None;
        }
    }

    fn stop_running(kind: ChannelKind, slot: &mut Slot, platform: &dyn VoicePlatform) -> bool {
        match slot.running.take() {
            Some(running) => {
                kind.stop(platform);
                running.abort();
                true
            }
            None => false,
        }
    }
}

/// Handle to a running speak or listen operation.
///
/// Dropping the handle does not stop the operation.
pub struct VoiceTask<T> {
    handle: JoinHandle<Result<T, SpeechError>>,
    channel: Arc<Channel>,
    platform: Arc<dyn VoicePlatform>,
    generation: u64,
}

impl<T> VoiceTask<T> {
    /// Waits for the operation. An aborted operation yields `Cancelled`.
    pub async fn wait(self) -> Result<T, SpeechError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_cancelled() => Err(SpeechError::Cancelled),
            Err(join_error) => Err(SpeechError::Platform(join_error.to_string())),
        }
    }

    /// Stops the operation: platform stop call plus task abort.
    pub fn cancel(&self) {
        self.channel
            .cancel_generation(self.generation, self.platform.as_ref());
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Coordinates voice output and input for one interview.
pub struct VoiceController {
    platform: Arc<dyn VoicePlatform>,
    listen_timeout: Duration,
    enabled: AtomicBool,
    speaking: Arc<Channel>,
    listening: Arc<Channel>,
}

impl VoiceController {
    pub fn new(platform: Arc<dyn VoicePlatform>, listen_timeout: Duration, enabled: bool) -> Self {
        Self {
            platform,
            listen_timeout,
            enabled: AtomicBool::new(enabled),
            speaking: Channel::new(ChannelKind::Speaking),
            listening: Channel::new(ChannelKind::Listening),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.platform.is_supported()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Turns voice on or off. Turning it off stops speech in progress.
    pub fn set_enabled(&self, enabled: bool) {
        let was_enabled = self.enabled.swap(enabled, Ordering::SeqCst);
        if was_enabled && !enabled {
            self.cancel_speaking();
        }
        debug!(enabled, "voice toggled");
    }

    /// Flips the voice toggle and returns the new value.
    pub fn toggle(&self) -> bool {
        let enabled = !self.is_enabled();
        self.set_enabled(enabled);
        enabled
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.is_active()
    }

    pub fn is_listening(&self) -> bool {
        self.listening.is_active()
    }

    /// Speaks `text`, replacing any speech already in progress.
    pub fn speak(&self, text: &str) -> VoiceTask<()> {
        let platform = Arc::clone(&self.platform);
        let text = text.to_owned();
        self.start(&self.speaking, async move { platform.speak(&text).await })
    }

    /// Listens for one utterance, replacing any capture already running.
    ///
    /// Fails with `TimedOut` when nothing is recognized within the listen
    /// timeout.
    pub fn listen(&self) -> VoiceTask<String> {
        let platform = Arc::clone(&self.platform);
        let limit = self.listen_timeout;
        self.start(&self.listening, async move {
            match tokio::time::timeout(limit, platform.listen()).await {
                Ok(result) => result,
                Err(_) => {
                    platform.stop_listening();
                    Err(SpeechError::TimedOut)
                }
            }
        })
    }

    pub fn cancel_speaking(&self) -> bool {
        self.speaking.cancel(self.platform.as_ref())
    }

    pub fn cancel_listening(&self) -> bool {
        self.listening.cancel(self.platform.as_ref())
    }

    /// Stops both channels, e.g. when the session ends.
    pub fn cancel_all(&self) {
        let speaking = self.cancel_speaking();
        let listening = self.cancel_listening();
        if speaking || listening {
            debug!(speaking, listening, "voice operations cancelled");
        }
    }

    /// Speaks `text` when voice is on and supported, and waits for it.
    ///
    /// Speech failures are logged and swallowed so the turn can go on by
    /// text. Returns whether the text was spoken in full.
    pub async fn speak_or_degrade(&self, text: &str) -> bool {
        if !self.is_enabled() || !self.is_supported() {
            return false;
        }
        match self.speak(text).wait().await {
            Ok(()) => true,
            Err(err) => self.degrade(ChannelKind::Speaking, err),
        }
    }

    /// Captures one answer by voice when supported.
    ///
    /// Returns `None` on any speech failure; the caller falls back to text
    /// input.
    pub async fn listen_or_degrade(&self) -> Option<String> {
        if !self.is_supported() {
            return None;
        }
        match self.listen().wait().await {
            Ok(transcript) => Some(transcript),
            Err(err) => {
                self.degrade(ChannelKind::Listening, err);
                None
            }
        }
    }

    /// Resets the failed channel only; the other channel keeps running.
    fn degrade(&self, kind: ChannelKind, err: SpeechError) -> bool {
        if err != SpeechError::Cancelled {
            warn!(channel = ?kind, error = %err, "voice unavailable, continuing with text");
            kind.stop(self.platform.as_ref());
        }
        false
    }

    fn start<T, F>(&self, channel: &Arc<Channel>, operation: F) -> VoiceTask<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, SpeechError>> + Send + 'static,
    {
        let mut slot = channel.lock();
        if Channel::stop_running(channel.kind, &mut slot, self.platform.as_ref()) {
            debug!(channel = ?channel.kind, "previous voice operation replaced");
        }
        slot.generation += 1;
        let generation = slot.generation;

        let tracker = Arc::clone(channel);
        let handle = tokio::spawn(async move {
            let result = operation.await;
            tracker.finish(generation);
            result
        });
        // The task cannot clear the slot before this is set: it needs the lock.
        slot.running = Some(handle.abort_handle());
        drop(slot);

        VoiceTask {
            handle,
            channel: Arc::clone(channel),
            platform: Arc::clone(&self.platform),
            generation,
        }
    }
}
