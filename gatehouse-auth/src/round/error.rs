//! Round-orchestration error types.

use crate::collect::ResponseCountMismatch;
use crate::convo::ChannelError;
use crate::protocol::Verdict;

/// Terminal failures of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The identity service returned no pretext, or rejected the
    /// preliminary verdict. The two cases are deliberately not
    /// distinguished at this surface.
    #[error("user is not known to the identity service")]
    UnknownUser,

    /// The conversation environment failed. Its own error code is carried
    /// through unchanged; no identity-service call was made for the
    /// aborted round.
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// The conversation broke the one-response-per-prompt protocol.
    #[error(transparent)]
    ResponseMismatch(#[from] ResponseCountMismatch),

    /// The round loop ended on a terminal verdict that was not an accept.
    /// This includes RESET verdicts.
    #[error("authentication rejected")]
    Rejected { verdict: Verdict },

    /// The configured round bound was reached without a terminal verdict.
    /// The last verdict is retained for logging.
    #[error("round limit reached after {rounds} rounds")]
    RoundLimit { rounds: u32, verdict: Verdict },
}
