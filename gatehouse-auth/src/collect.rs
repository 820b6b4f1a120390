//! Pairing one round's responses with the pretext's prompt sequence.

use crate::protocol::{Prompt, ResponseMap};

/// The conversation returned a different number of responses than prompts.
///
/// This is a protocol violation by the environment, not a user error; the
/// attempt must fail rather than truncate or pad.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {prompts} responses, conversation returned {responses}")]
pub struct ResponseCountMismatch {
    pub prompts: usize,
    pub responses: usize,
}

/// Build a fresh [`ResponseMap`] for one round by pairing
/// `prompts[i].name` with `responses[i]`.
///
/// The map is rebuilt from scratch every round; nothing carries forward.
///
/// # Errors
///
/// Returns [`ResponseCountMismatch`] when the sequences differ in length.
/// Lengths are validated before any pairing happens.
pub fn collect_responses(
    prompts: &[Prompt],
    responses: Vec<String>,
) -> Result<ResponseMap, ResponseCountMismatch> {
    if prompts.len() != responses.len() {
        return Err(ResponseCountMismatch {
            prompts: prompts.len(),
            responses: responses.len(),
        });
    }

    let mut map = ResponseMap::new();
    for (prompt, response) in prompts.iter().zip(responses) {
        map.insert(prompt.name.as_str(), response);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::new("password", "Password", "pwd"),
            Prompt::new("token", "Token", "otp"),
        ]
    }

    #[test]
    fn keys_follow_prompt_order() {
        let map = collect_responses(&prompts(), vec!["secret".into(), "123456".into()]).unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["password", "token"]);
        assert_eq!(map.get("password"), Some("secret"));
        assert_eq!(map.get("token"), Some("123456"));
    }

    #[test]
    fn too_few_responses_is_an_error() {
        let err = collect_responses(&prompts(), vec!["secret".into()]).unwrap_err();
        assert_eq!(
            err,
            ResponseCountMismatch {
                prompts: 2,
                responses: 1
            }
        );
    }

    #[test]
    fn too_many_responses_is_an_error() {
        let err = collect_responses(
            &prompts(),
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ResponseCountMismatch {
                prompts: 2,
                responses: 3
            }
        );
    }

    #[test]
    fn empty_sequences_build_an_empty_map() {
        let map = collect_responses(&[], vec![]).unwrap();
        assert!(map.is_empty());
    }
}
