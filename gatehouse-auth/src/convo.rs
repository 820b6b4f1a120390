//! The interactive conversation boundary.
//!
//! A [`ConversationChannel`] carries rendered prompts out to the calling
//! environment and brings response text back. The channel is the only
//! interactive I/O in an attempt; everything else is a blocking call into
//! the identity service.

use serde::{Deserialize, Serialize};

/// A prompt ready for display: label text plus echo visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    /// Display label, e.g. `"Password (pwd):"`.
    pub text: String,
    /// False for masked prompts whose input must not be echoed.
    pub echo_visible: bool,
}

/// Failure signal from the conversation environment.
///
/// `code` is the environment's own error code and is propagated to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("conversation failed with code {code}: {message}")]
pub struct ChannelError {
    pub code: i32,
    pub message: String,
}

impl ChannelError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The interactive I/O boundary of an authentication attempt.
pub trait ConversationChannel {
    /// Send the rendered prompt set and collect one response per prompt.
    ///
    /// Responses must come back in prompt order. The call blocks until the
    /// environment answers or fails; any timeout belongs to the
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the environment cannot complete the
    /// conversation. A channel failure is terminal for the attempt.
    fn send(&mut self, prompts: &[RenderedPrompt]) -> Result<Vec<String>, ChannelError>;
}
