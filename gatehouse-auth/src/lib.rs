//! Pure round-orchestration library for Gatehouse.
//!
//! This crate is intentionally IO-free:
//! - No filesystem operations
//! - No network calls
//! - No logging
//!
//! Dependencies are injected via traits:
//! - [`IdentityService`] - The remote identity service performing verification
//! - [`ConversationChannel`] - The interactive prompt/response boundary
//! - [`RoundObserver`] - Observability hook for verdicts and state transitions
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_auth::{authenticate, IdentityHandle, RoundOptions, NoopObserver};
//!
//! let identity = IdentityHandle::new(cert, truststore, key, passphrase);
//! let result = authenticate(
//!     identity,
//!     "alice",
//!     &service,
//!     &mut channel,
//!     &RoundOptions::default(),
//!     &mut NoopObserver,
//! );
//! ```

pub mod collect;
pub mod convo;
pub mod identity;
pub mod prompt;
pub mod protocol;
pub mod round;

pub use collect::{ResponseCountMismatch, collect_responses};
pub use convo::{ChannelError, ConversationChannel, RenderedPrompt};
pub use identity::{IdentityHandle, SecretString};
pub use prompt::{MaskPolicy, render_prompts};
pub use protocol::{AuthenticationOutcome, IdentityService, Pretext, Prompt, ResponseMap, Verdict};
pub use round::{
    AuthError, Authenticated, NoopObserver, RoundObserver, RoundOptions, authenticate,
};
