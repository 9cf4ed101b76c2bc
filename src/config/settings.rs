//! Key-type settings
//!
//! Defines the per-key configuration a key provider hands to the decode
//! engine: container formats and passphrase for certificate keys, or the
//! OIDC credential shape. The engine treats these as typed input and never
//! re-validates plugin-level schema.

use crate::error::Result;
use crate::material;
use crate::models::{CertificatePair, ContainerFormat, Passphrase};
use crate::oidc::{self, OidcCredential};
use serde::Deserialize;

/// Decode settings for a certificate/key pair stored as a single value.
#[derive(Clone, Deserialize)]
pub struct CertificateKeyConfig {
    pub input_format: ContainerFormat,
    pub output_format: ContainerFormat,
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl std::fmt::Debug for CertificateKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateKeyConfig")
            .field("input_format", &self.input_format)
            .field("output_format", &self.output_format)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CertificateKeyConfig {
    /// The configured passphrase, with "absent" normalized to empty.
    pub fn passphrase(&self) -> Passphrase {
        Passphrase::from(self.passphrase.as_deref())
    }

    /// Decode stored bytes according to this configuration.
    pub fn materialize(&self, material: &[u8]) -> Result<CertificatePair> {
        material::materialize(
            material,
            self.input_format,
            self.output_format,
            &self.passphrase(),
        )
    }
}

/// What kind of secret a key holds, and how to decode it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeySpec {
    Certificate(CertificateKeyConfig),
    Oidc,
}

/// A decoded key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedKey {
    Certificate(CertificatePair),
    Oidc(OidcCredential),
}

impl KeySpec {
    /// Decode stored bytes according to the key kind.
    pub fn decode(&self, material: &[u8]) -> Result<DecodedKey> {
        match self {
            KeySpec::Certificate(config) => {
                config.materialize(material).map(DecodedKey::Certificate)
            }
            KeySpec::Oidc => oidc::extract_oidc(material).map(DecodedKey::Oidc),
        }
    }
}
