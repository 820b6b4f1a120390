//! The round-orchestration state machine.

use std::num::NonZeroU32;

use crate::collect::collect_responses;
use crate::convo::ConversationChannel;
use crate::identity::IdentityHandle;
use crate::prompt::{MaskPolicy, render_prompts};
use crate::protocol::{IdentityService, ResponseMap, Verdict};

use super::error::AuthError;

/// Default bound on challenge-response rounds per attempt.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Tunables for one authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Which prompts take hidden input.
    pub mask_policy: MaskPolicy,
    /// Upper bound on rounds; the loop always runs at least once.
    pub max_rounds: NonZeroU32,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            mask_policy: MaskPolicy::default(),
            max_rounds: NonZeroU32::new(DEFAULT_MAX_ROUNDS).expect("nonzero default"),
        }
    }
}

/// Observability hook for verdicts and state transitions.
///
/// The core does no logging itself; callers that want verdict and
/// transition logs implement this and log from the glue. All methods
/// default to no-ops.
pub trait RoundObserver {
    /// Called once after the pretext verdict has been inspected.
    fn pretext_evaluated(&mut self, subject: &str, verdict: &Verdict) {
        let _ = (subject, verdict);
    }

    /// Called after each round's outcome has been evaluated, with the
    /// 1-based round number.
    fn round_evaluated(&mut self, round: u32, verdict: &Verdict) {
        let _ = (round, verdict);
    }
}

/// A [`RoundObserver`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Proof that an attempt ended in the accepting state.
///
/// Can only be produced by [`authenticate`], which is what makes the
/// accept verdict check unskippable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    subject: String,
    verdict: Verdict,
}

impl Authenticated {
    #[must_use]
    pub(crate) fn new(subject: String, verdict: Verdict) -> Self {
        Self { subject, verdict }
    }

    /// The canonical subject name the service accepted.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The final accepting verdict.
    #[must_use]
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

/// Run one complete authentication attempt.
///
/// Drives the full state machine: pre-authenticate, then challenge-response
/// rounds until a terminal verdict or the round bound. The identity handle
/// is moved in and dropped on every exit path, along with the pretext and
/// any per-round outcome.
///
/// A round continues the loop only when its verdict is neither the accept
/// pair nor RESET; a RESET verdict stops the loop and still rejects. This
/// asymmetry is observed product behavior and is preserved deliberately.
///
/// The rendered prompt set is built once from the pretext and reused for
/// every round; there is no per-round refresh from the service.
///
/// # Errors
///
/// - [`AuthError::UnknownUser`] - no pretext, or the pretext verdict was
///   not the accept pair
/// - [`AuthError::Channel`] - the conversation failed; no `authenticate`
///   call was made for that round
/// - [`AuthError::ResponseMismatch`] - the conversation returned the wrong
///   number of responses
/// - [`AuthError::Rejected`] - a round ended on a non-accept terminal
///   verdict (including RESET)
/// - [`AuthError::RoundLimit`] - `max_rounds` rounds produced no terminal
///   verdict
#[must_use = "the authentication result must be checked"]
pub fn authenticate(
    identity: IdentityHandle,
    username: &str,
    service: &impl IdentityService,
    channel: &mut impl ConversationChannel,
    options: &RoundOptions,
    observer: &mut impl RoundObserver,
) -> Result<Authenticated, AuthError> {
    let Some(pretext) = service.pre_authenticate(&identity, username, ResponseMap::new()) else {
        return Err(AuthError::UnknownUser);
    };

    observer.pretext_evaluated(&pretext.subject, &pretext.verdict);
    if !pretext.verdict.is_accept() {
        return Err(AuthError::UnknownUser);
    }

    let rendered = render_prompts(&pretext.prompts, &options.mask_policy);
    let max_rounds = options.max_rounds.get();
    let mut round = 0;

    loop {
        round += 1;

        let responses = channel.send(&rendered)?;
        let map = collect_responses(&pretext.prompts, responses)?;

        let outcome = service.authenticate(&identity, &pretext.subject, map);
        observer.round_evaluated(round, &outcome.verdict);

        if outcome.verdict.is_accept() {
            return Ok(Authenticated::new(pretext.subject, outcome.verdict));
        }
        if outcome.verdict.is_reset() {
            return Err(AuthError::Rejected {
                verdict: outcome.verdict,
            });
        }
        if round >= max_rounds {
            return Err(AuthError::RoundLimit {
                rounds: round,
                verdict: outcome.verdict,
            });
        }
    }
}
