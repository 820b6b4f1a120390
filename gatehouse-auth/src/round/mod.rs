//! Round orchestration: the per-attempt state machine.
//!
//! One attempt flows through:
//! 1. `pre_authenticate` opens the attempt; no pretext means the user is
//!    unknown and the conversation never starts
//! 2. The pretext verdict gates the round loop; anything but the accept
//!    pair rejects up front
//! 3. Each round renders the pretext's prompts, converses, collects the
//!    responses, and resubmits them via `authenticate`
//! 4. The loop exits on an accept verdict, a RESET verdict, a channel
//!    failure, or the round bound; exactly one terminal state is reached
//!
//! All resources (identity handle, pretext, per-round outcomes) are owned
//! by the orchestrator and dropped on every exit path.

mod error;
mod orchestrator;

pub use error::AuthError;
pub use orchestrator::{
    Authenticated, DEFAULT_MAX_ROUNDS, NoopObserver, RoundObserver, RoundOptions, authenticate,
};
