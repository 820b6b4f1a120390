//! A canned-response conversation channel.

use std::collections::VecDeque;

use gatehouse_auth::{ChannelError, ConversationChannel, RenderedPrompt};

/// Channel error code reported when the script runs out of responses.
pub const SCRIPT_EXHAUSTED: i32 = -1;

/// A [`ConversationChannel`] that answers from a prepared script.
///
/// Not really interactive: each `send` consumes the next scripted batch
/// of responses, in order. Useful for tests and for callers that already
/// hold the credentials (non-interactive re-authentication). Prompts are
/// recorded so callers can inspect what would have been displayed.
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    batches: VecDeque<Vec<String>>,
    sent: Vec<Vec<RenderedPrompt>>,
}

impl ScriptedChannel {
    /// Create a channel that will answer with the given batches, in order.
    #[must_use]
    pub fn new<I, B, S>(batches: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            batches: batches
                .into_iter()
                .map(|batch| batch.into_iter().map(Into::into).collect())
                .collect(),
            sent: Vec::new(),
        }
    }

    /// Every prompt set sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> &[Vec<RenderedPrompt>] {
        &self.sent
    }
}

impl ConversationChannel for ScriptedChannel {
    fn send(&mut self, prompts: &[RenderedPrompt]) -> Result<Vec<String>, ChannelError> {
        self.sent.push(prompts.to_vec());
        self.batches.pop_front().ok_or_else(|| {
            ChannelError::new(SCRIPT_EXHAUSTED, "no scripted responses left")
        })
    }
}
