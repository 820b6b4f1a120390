//! Module-facing glue for Gatehouse.
//!
//! The decision core in `gatehouse-auth` is IO-free; this crate supplies
//! everything a host authentication stack needs around it:
//! - Parsing `key=value` module options into a [`ModuleConfig`]
//! - Building the identity handle and round options from configuration
//! - Structured logging of verdicts and state transitions via `tracing`
//! - Mapping core errors onto the [`ResultCode`]s surfaced to the host
//!
//! The host-ABI entry-point shims and the identity-service transport stay
//! outside this crate; callers hand in their own [`IdentityService`] and
//! [`ConversationChannel`](gatehouse_auth::ConversationChannel)
//! implementations.
//!
//! [`IdentityService`]: gatehouse_auth::IdentityService

mod args;
mod conv;
mod logging;
mod run;

pub use args::ModuleConfig;
pub use conv::ScriptedChannel;
pub use logging::init_logging;
pub use run::{ResultCode, authenticate_user, establish_credentials};
