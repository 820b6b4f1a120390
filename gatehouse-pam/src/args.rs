//! Module-option parsing.
//!
//! The host passes configuration as `key=value` string tokens, one per
//! module argument. Recognized keys: `cert`, `truststore`, `key`,
//! `passphrase`, `max_rounds`. Every key is optional; repeated keys keep
//! the last value.

use std::num::NonZeroU32;

use gatehouse_auth::{IdentityHandle, RoundOptions};

/// Parsed module configuration, read-only for the attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Client certificate for the identity service session.
    pub cert: Option<String>,
    /// Truststore used to verify the identity service.
    pub truststore: Option<String>,
    /// Private key for the client certificate.
    pub key: Option<String>,
    /// Passphrase protecting the private key.
    pub passphrase: Option<String>,
    /// Override for the challenge-response round bound.
    pub max_rounds: Option<NonZeroU32>,
}

impl ModuleConfig {
    /// Parse module arguments of the form `key=value`.
    ///
    /// Unknown keys and tokens without `=` are ignored with a warning, as
    /// is a `max_rounds` value that is not a positive integer. Values may
    /// contain `=`; only the first one splits.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                tracing::warn!(arg, "ignoring module option without '='");
                continue;
            };
            match key {
                "cert" => config.cert = Some(value.to_string()),
                "truststore" => config.truststore = Some(value.to_string()),
                "key" => config.key = Some(value.to_string()),
                "passphrase" => config.passphrase = Some(value.to_string()),
                "max_rounds" => match value.parse::<NonZeroU32>() {
                    Ok(rounds) => config.max_rounds = Some(rounds),
                    Err(_) => {
                        tracing::warn!(value, "ignoring invalid max_rounds option");
                    }
                },
                _ => tracing::warn!(key, "ignoring unknown module option"),
            }
        }
        config
    }

    /// Build the per-attempt identity handle from this configuration.
    #[must_use]
    pub fn identity_handle(&self) -> IdentityHandle {
        IdentityHandle::new(
            self.cert.clone(),
            self.truststore.clone(),
            self.key.clone(),
            self.passphrase.clone(),
        )
    }

    /// Round options for this configuration: the default mask policy,
    /// with `max_rounds` applied when configured.
    #[must_use]
    pub fn round_options(&self) -> RoundOptions {
        let mut options = RoundOptions::default();
        if let Some(max_rounds) = self.max_rounds {
            options.max_rounds = max_rounds;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_keys() {
        let config = ModuleConfig::from_args([
            "cert=/etc/gatehouse/client.pem",
            "truststore=/etc/gatehouse/trust.pem",
            "key=/etc/gatehouse/client.key",
            "passphrase=hunter2",
        ]);
        assert_eq!(config.cert.as_deref(), Some("/etc/gatehouse/client.pem"));
        assert_eq!(
            config.truststore.as_deref(),
            Some("/etc/gatehouse/trust.pem")
        );
        assert_eq!(config.key.as_deref(), Some("/etc/gatehouse/client.key"));
        assert_eq!(config.passphrase.as_deref(), Some("hunter2"));
        assert_eq!(config.max_rounds, None);
    }

    #[test]
    fn all_keys_are_optional() {
        let config = ModuleConfig::from_args::<_, &str>([]);
        assert_eq!(config, ModuleConfig::default());
    }

    #[test]
    fn value_may_contain_equals() {
        let config = ModuleConfig::from_args(["passphrase=a=b=c"]);
        assert_eq!(config.passphrase.as_deref(), Some("a=b=c"));
    }

    #[test]
    fn repeated_key_keeps_the_last_value() {
        let config = ModuleConfig::from_args(["cert=first.pem", "cert=second.pem"]);
        assert_eq!(config.cert.as_deref(), Some("second.pem"));
    }

    #[test]
    fn unknown_keys_and_bare_tokens_are_ignored() {
        let config = ModuleConfig::from_args(["debug=1", "use_first_pass", "cert=c.pem"]);
        assert_eq!(config.cert.as_deref(), Some("c.pem"));
        assert_eq!(config.truststore, None);
    }

    #[test]
    fn max_rounds_must_be_a_positive_integer() {
        assert_eq!(
            ModuleConfig::from_args(["max_rounds=3"]).max_rounds,
            NonZeroU32::new(3)
        );
        assert_eq!(ModuleConfig::from_args(["max_rounds=0"]).max_rounds, None);
        assert_eq!(
            ModuleConfig::from_args(["max_rounds=lots"]).max_rounds,
            None
        );
    }

    #[test]
    fn round_options_apply_the_configured_bound() {
        let config = ModuleConfig::from_args(["max_rounds=2"]);
        assert_eq!(config.round_options().max_rounds.get(), 2);
        assert_eq!(
            ModuleConfig::default().round_options(),
            RoundOptions::default()
        );
    }

    #[test]
    fn identity_handle_carries_the_values() {
        let config = ModuleConfig::from_args(["cert=c.pem", "passphrase=hunter2"]);
        let handle = config.identity_handle();
        assert_eq!(handle.cert(), Some("c.pem"));
        assert!(handle.truststore().is_none());
        assert_eq!(handle.passphrase().map(|p| p.as_str()), Some("hunter2"));
    }
}
