//! Wire-facing data model shared with the identity service.
//!
//! The identity service speaks in [`Verdict`] pairs, [`Prompt`] sequences,
//! and name-to-text [`ResponseMap`]s. Everything here derives serde so a
//! concrete [`IdentityService`] implementation can encode it; the types
//! themselves carry no transport logic.

use serde::{Deserialize, Serialize};

use crate::identity::IdentityHandle;

/// The `(message, text)` result pair returned by the pretext and by each
/// authentication round.
///
/// Verdicts are compared by literal value, not structurally typed. The
/// observed vocabulary is `message` of `"OK"` or an error token, and
/// `text` of `"SUCCESS"`, `"RESET"`, or another failure token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub message: String,
    pub text: String,
}

impl Verdict {
    /// Message token of an accepting verdict.
    pub const OK: &'static str = "OK";
    /// Text token of an accepting verdict.
    pub const SUCCESS: &'static str = "SUCCESS";
    /// Text token that terminates the round loop without accepting.
    pub const RESET: &'static str = "RESET";

    pub fn new(message: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            text: text.into(),
        }
    }

    /// True exactly when this verdict is `("OK", "SUCCESS")`.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        self.message == Self::OK && self.text == Self::SUCCESS
    }

    /// True when the text token is `"RESET"`, regardless of message.
    ///
    /// A RESET verdict ends the round loop but does not accept.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.text == Self::RESET
    }
}

/// One display item of the pretext's ordered prompt sequence.
///
/// `name` is the stable identifier: it keys the response map and feeds the
/// masking policy. Sequence order is significant; it determines rendering
/// order and must align positionally with the conversation's responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub name: String,
    pub display_label: String,
    pub nickname: String,
}

impl Prompt {
    pub fn new(
        name: impl Into<String>,
        display_label: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_label: display_label.into(),
            nickname: nickname.into(),
        }
    }
}

/// The identity service's initial response to a username.
///
/// Produced once per attempt by [`IdentityService::pre_authenticate`]. The
/// same prompt sequence is reused for every round; `subject` is the
/// canonical subject name that must be echoed into every
/// [`IdentityService::authenticate`] call in place of the raw username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pretext {
    pub verdict: Verdict,
    pub subject: String,
    pub prompts: Vec<Prompt>,
}

impl Pretext {
    pub fn new(verdict: Verdict, subject: impl Into<String>, prompts: Vec<Prompt>) -> Self {
        Self {
            verdict,
            subject: subject.into(),
            prompts,
        }
    }
}

/// The per-round result of an [`IdentityService::authenticate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationOutcome {
    pub verdict: Verdict,
}

impl AuthenticationOutcome {
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }
}

/// Insertion-ordered mapping from prompt name to response text.
///
/// Keys are unique; inserting an existing key replaces its value in place.
/// Iteration order equals insertion order, which the orchestrator relies
/// on to keep responses positionally aligned with the prompt sequence.
/// Serializes as a sequence of `[name, text]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap {
    entries: Vec<(String, String)>,
}

impl ResponseMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a response, replacing the value in place if the name is
    /// already present.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((name, text)),
        }
    }

    /// Look up a response by prompt name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    /// Prompt names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }
}

/// The remote identity service performing the actual verification.
///
/// Implementations own the transport and the cryptographic session; this
/// crate only drives the conversation protocol against them.
pub trait IdentityService {
    /// Open an authentication attempt for `username`.
    ///
    /// Returns `None` for an unresolvable/unknown identity; absence is the
    /// signal, never an error. Callers pass a non-empty username.
    fn pre_authenticate(
        &self,
        identity: &IdentityHandle,
        username: &str,
        responses: ResponseMap,
    ) -> Option<Pretext>;

    /// Submit one round of collected responses.
    ///
    /// `subject` must be the exact subject name returned by
    /// [`pre_authenticate`](Self::pre_authenticate), not the raw username.
    fn authenticate(
        &self,
        identity: &IdentityHandle,
        subject: &str,
        responses: ResponseMap,
    ) -> AuthenticationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_verdict_is_literal() {
        assert!(Verdict::new("OK", "SUCCESS").is_accept());
        assert!(!Verdict::new("ok", "SUCCESS").is_accept());
        assert!(!Verdict::new("OK", "success").is_accept());
        assert!(!Verdict::new("OK", "RESET").is_accept());
    }

    #[test]
    fn reset_ignores_message_token() {
        assert!(Verdict::new("?", "RESET").is_reset());
        assert!(Verdict::new("OK", "RESET").is_reset());
        assert!(!Verdict::new("RESET", "OK").is_reset());
    }

    #[test]
    fn verdict_roundtrip() {
        let verdict = Verdict::new("OK", "SUCCESS");
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"message":"OK","text":"SUCCESS"}"#);
        let parsed: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, verdict);
    }

    #[test]
    fn prompt_roundtrip() {
        let prompt = Prompt::new("password", "Password", "pwd");
        let json = serde_json::to_string(&prompt).unwrap();
        let parsed: Prompt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prompt);
    }

    #[test]
    fn pretext_roundtrip() {
        let pretext = Pretext::new(
            Verdict::new("OK", "SUCCESS"),
            "alice@example",
            vec![Prompt::new("password", "Password", "pwd")],
        );
        let json = serde_json::to_string(&pretext).unwrap();
        let parsed: Pretext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pretext);
    }

    #[test]
    fn response_map_serializes_as_pairs() {
        let mut map = ResponseMap::new();
        map.insert("password", "secret");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[["password","secret"]]"#);
    }

    #[test]
    fn response_map_insert_replaces_in_place() {
        let mut map = ResponseMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn response_map_preserves_insertion_order() {
        let mut map = ResponseMap::new();
        for name in ["zeta", "alpha", "mid"] {
            map.insert(name, "x");
        }
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }
}
