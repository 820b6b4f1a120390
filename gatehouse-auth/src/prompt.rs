//! Prompt rendering and the input-masking policy.

use std::collections::BTreeSet;

use crate::convo::RenderedPrompt;
use crate::protocol::Prompt;

/// Decides which prompts take hidden input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskPolicy {
    /// Mask every prompt whose name starts with the given prefix.
    ///
    /// This reproduces the legacy rule, a fixed prefix match against
    /// `"passphrase"`: `"passphraseReset"` is masked along with
    /// `"passphrase"` itself, while `"pass"` is not. The prefix match is
    /// fragile against names like `"passphraseX"` that only accidentally
    /// share the prefix; prefer [`MaskPolicy::ExactNames`] for new
    /// deployments.
    NamePrefix(String),

    /// Mask exactly the prompts whose name is in the set.
    ExactNames(BTreeSet<String>),
}

impl MaskPolicy {
    /// The legacy default: prefix match against `"passphrase"`.
    #[must_use]
    pub fn legacy() -> Self {
        Self::NamePrefix("passphrase".into())
    }

    /// True when input for the named prompt must be hidden.
    #[must_use]
    pub fn masks(&self, name: &str) -> bool {
        match self {
            Self::NamePrefix(prefix) => name.starts_with(prefix.as_str()),
            Self::ExactNames(names) => names.contains(name),
        }
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self::legacy()
    }
}

/// Render one prompt into its display label and echo flag.
///
/// The label is `"{display_label} ({nickname}):"`.
#[must_use]
pub fn render_prompt(prompt: &Prompt, policy: &MaskPolicy) -> RenderedPrompt {
    RenderedPrompt {
        text: format!("{} ({}):", prompt.display_label, prompt.nickname),
        echo_visible: !policy.masks(&prompt.name),
    }
}

/// Render an ordered prompt sequence, preserving order.
#[must_use]
pub fn render_prompts(prompts: &[Prompt], policy: &MaskPolicy) -> Vec<RenderedPrompt> {
    prompts.iter().map(|p| render_prompt(p, policy)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_format() {
        let rendered = render_prompt(
            &Prompt::new("password", "Password", "pwd"),
            &MaskPolicy::default(),
        );
        assert_eq!(rendered.text, "Password (pwd):");
    }

    #[test]
    fn legacy_policy_masks_by_prefix() {
        let policy = MaskPolicy::default();
        assert!(policy.masks("passphrase"));
        // Prefix match, not full-name match: the documented quirk.
        assert!(policy.masks("passphraseReset"));
        assert!(!policy.masks("username"));
        // Shorter than the prefix: not matched.
        assert!(!policy.masks("pass"));
    }

    #[test]
    fn exact_policy_rejects_prefix_lookalikes() {
        let policy = MaskPolicy::ExactNames(["passphrase".to_string()].into());
        assert!(policy.masks("passphrase"));
        assert!(!policy.masks("passphraseX"));
        assert!(!policy.masks("passphraseReset"));
    }

    #[test]
    fn echo_flag_follows_policy() {
        let prompts = [
            Prompt::new("username", "Username", "user"),
            Prompt::new("passphrase", "Key Passphrase", "key"),
        ];
        let rendered = render_prompts(&prompts, &MaskPolicy::default());
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].echo_visible);
        assert!(!rendered[1].echo_visible);
    }

    #[test]
    fn rendering_preserves_order() {
        let prompts = [
            Prompt::new("b", "B", "b"),
            Prompt::new("a", "A", "a"),
            Prompt::new("c", "C", "c"),
        ];
        let rendered = render_prompts(&prompts, &MaskPolicy::default());
        let labels: Vec<_> = rendered.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(labels, vec!["B (b):", "A (a):", "C (c):"]);
    }
}
