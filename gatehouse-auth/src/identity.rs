//! Configured identity material for an authentication attempt.
//!
//! An [`IdentityHandle`] bundles the certificate, truststore, key, and
//! passphrase options the identity service needs to establish its secure
//! session. The handle carries the values opaquely; validating them is the
//! service implementation's job. Proper secret handling:
//! - The passphrase is zeroized on drop
//! - No `Debug` output that leaks the passphrase

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A zeroize-on-drop wrapper for a secret string value.
///
/// Used for the configured key passphrase so it does not linger in memory
/// after the attempt ends.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the secret value.
    ///
    /// # Security
    ///
    /// The returned reference should not be stored. Copying the value into
    /// an unmanaged `String` defeats automatic zeroization.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString(<redacted>)")
    }
}

/// Opaque configured identity, created once per authentication attempt.
///
/// Every field is optional; the identity service must tolerate absent
/// values. Construction never fails: malformed values are the service's to
/// reject when it first uses them.
///
/// The handle is exclusively owned by the orchestration entry point for
/// the duration of an attempt and is released on every exit path.
#[derive(Debug, Clone)]
pub struct IdentityHandle {
    cert: Option<String>,
    truststore: Option<String>,
    key: Option<String>,
    passphrase: Option<SecretString>,
}

impl IdentityHandle {
    /// Build a handle from configuration values.
    #[must_use]
    pub fn new(
        cert: Option<String>,
        truststore: Option<String>,
        key: Option<String>,
        passphrase: Option<String>,
    ) -> Self {
        Self {
            cert,
            truststore,
            key,
            passphrase: passphrase.map(SecretString::new),
        }
    }

    /// The configured client certificate, if any.
    #[must_use]
    pub fn cert(&self) -> Option<&str> {
        self.cert.as_deref()
    }

    /// The configured truststore, if any.
    #[must_use]
    pub fn truststore(&self) -> Option<&str> {
        self.truststore.as_deref()
    }

    /// The configured private key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The configured key passphrase, if any.
    #[must_use]
    pub fn passphrase(&self) -> Option<&SecretString> {
        self.passphrase.as_ref()
    }
}
