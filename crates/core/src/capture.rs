//! Speech-capture session bookkeeping
//!
//! Audio capture and transcription happen outside this crate. What lives here
//! is the session discipline around them:
//! - at most one capture session is active at a time
//! - starting a new session first stops the active one
//! - tapping while listening stops the session (tap-to-stop)
//! - completion callbacks are idempotent and ignored once the session they
//!   belong to is no longer the active one
//!
//! The controller is `Sync`, so platform callbacks may fire from any thread.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier handed out for each capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureSessionId(u64);

impl std::fmt::Display for CaptureSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "capture-{}", self.0)
    }
}

/// Failure reported by the speech-capture collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureError {
    #[error("speech recognition is not supported in this environment")]
    Unsupported,

    #[error("speech recognition network failure")]
    Network,

    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("capture failed: {0}")]
    Other(String),
}

/// How a capture session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Final transcript (possibly empty)
    Transcript(String),
    Error(CaptureError),
    /// Session ended without a result
    Ended,
}

/// Result of a tap on the microphone control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Started(CaptureSessionId),
    Stopped(CaptureSessionId),
}

#[derive(Debug, Default)]
struct CaptureState {
    next_id: u64,
    active: Option<CaptureSessionId>,
}

/// Single-session capture controller
#[derive(Debug)]
pub struct CaptureController {
    supported: bool,
    state: Mutex<CaptureState>,
}

impl Default for CaptureController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CaptureController {
    /// `supported` is false when the host has no speech-capture capability
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            state: Mutex::new(CaptureState::default()),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn is_listening(&self) -> bool {
        self.state.lock().active.is_some()
    }

    pub fn active(&self) -> Option<CaptureSessionId> {
        self.state.lock().active
    }

    /// Start a new session, stopping any active one first
    pub fn start(&self) -> Result<CaptureSessionId, CaptureError> {
        if !self.supported {
            return Err(CaptureError::Unsupported);
        }
        let mut state = self.state.lock();
        if let Some(previous) = state.active.take() {
            tracing::debug!(session = %previous, "Stopping active capture before starting a new one");
        }
        state.next_id += 1;
        let id = CaptureSessionId(state.next_id);
        state.active = Some(id);
        tracing::debug!(session = %id, "Capture started");
        Ok(id)
    }

    /// Stop the active session, if any
    pub fn stop(&self) -> Option<CaptureSessionId> {
        let stopped = self.state.lock().active.take();
        if let Some(id) = stopped {
            tracing::debug!(session = %id, "Capture stopped");
        }
        stopped
    }

    /// Tap semantics: start when idle, stop when listening
    pub fn toggle(&self) -> Result<Toggle, CaptureError> {
        if let Some(id) = self.stop() {
            return Ok(Toggle::Stopped(id));
        }
        self.start().map(Toggle::Started)
    }

    /// Deliver a completion callback for `id`
    ///
    /// Returns the outcome only for the first callback of the active session.
    /// Late, duplicate or stale callbacks return `None` and change nothing.
    pub fn finish(&self, id: CaptureSessionId, outcome: CaptureOutcome) -> Option<CaptureOutcome> {
        let mut state = self.state.lock();
        if state.active != Some(id) {
            tracing::debug!(session = %id, "Ignoring callback for inactive capture session");
            return None;
        }
        state.active = None;
        Some(outcome)
    }
}
