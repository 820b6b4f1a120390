//! Top-level attempt driver and result-code mapping.

use gatehouse_auth::{
    AuthError, ConversationChannel, IdentityService, RoundObserver, Verdict, round,
};

use crate::args::ModuleConfig;

/// Result code surfaced to the calling environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// The round loop ended on the accept verdict.
    Success,
    /// No pretext, or the preliminary verdict was rejected.
    UnknownUser,
    /// The conversation failed; `code` is the environment's own signal,
    /// passed through unchanged.
    ChannelError { code: i32 },
    /// The round loop ended without an accept verdict.
    AuthRejected,
}

impl ResultCode {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Logs verdicts and transitions the core exposes.
struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn pretext_evaluated(&mut self, subject: &str, verdict: &Verdict) {
        tracing::debug!(
            subject,
            message = %verdict.message,
            text = %verdict.text,
            "pretext verdict"
        );
    }

    fn round_evaluated(&mut self, round: u32, verdict: &Verdict) {
        tracing::debug!(
            round,
            message = %verdict.message,
            text = %verdict.text,
            "round verdict"
        );
    }
}

/// Credential establishment is a no-op for this module.
#[must_use]
pub fn establish_credentials() -> ResultCode {
    ResultCode::Success
}

/// Run one authentication attempt for an already-resolved username.
///
/// Username resolution happens in the host environment; a resolution
/// failure never reaches this function and is surfaced by the resolver
/// unchanged. Callers pass a non-empty username; an empty one is answered
/// with [`ResultCode::UnknownUser`] and a warning.
pub fn authenticate_user(
    config: &ModuleConfig,
    username: &str,
    service: &impl IdentityService,
    channel: &mut impl ConversationChannel,
) -> ResultCode {
    if username.is_empty() {
        tracing::warn!("empty username passed to authenticate_user");
        return ResultCode::UnknownUser;
    }

    tracing::info!(username, "starting authentication");

    let identity = config.identity_handle();
    let options = config.round_options();

    match round::authenticate(
        identity,
        username,
        service,
        channel,
        &options,
        &mut TracingObserver,
    ) {
        Ok(auth) => {
            tracing::info!(subject = auth.subject(), "authentication succeeded");
            ResultCode::Success
        }
        Err(AuthError::UnknownUser) => {
            tracing::info!(username, "user unknown to identity service");
            ResultCode::UnknownUser
        }
        Err(AuthError::Channel(err)) => {
            tracing::warn!(code = err.code, message = %err.message, "conversation failed");
            ResultCode::ChannelError { code: err.code }
        }
        Err(AuthError::Rejected { verdict }) => {
            tracing::info!(
                message = %verdict.message,
                text = %verdict.text,
                "authentication rejected"
            );
            ResultCode::AuthRejected
        }
        Err(AuthError::RoundLimit { rounds, verdict }) => {
            tracing::warn!(
                rounds,
                message = %verdict.message,
                text = %verdict.text,
                "round limit reached without a terminal verdict"
            );
            ResultCode::AuthRejected
        }
        Err(err) => {
            tracing::warn!(error = %err, "authentication failed");
            ResultCode::AuthRejected
        }
    }
}
