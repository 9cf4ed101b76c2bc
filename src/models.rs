//! Core data types for key material handling

use crate::error::KeyMaterialError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recognized key material container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    Pem,
    Pkcs12,
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerFormat::Pem => write!(f, "PEM"),
            ContainerFormat::Pkcs12 => write!(f, "PKCS#12"),
        }
    }
}

impl FromStr for ContainerFormat {
    type Err = KeyMaterialError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pem" => Ok(ContainerFormat::Pem),
            "pkcs12" | "p12" | "pfx" => Ok(ContainerFormat::Pkcs12),
            _ => Err(KeyMaterialError::UnsupportedFormat {
                format: value.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ContainerFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The canonical result of a successful parse: an unencrypted PEM
/// certificate and an unencrypted PKCS#8 PEM private key.
///
/// Both parts are always present; a decode that cannot fill both fails
/// instead of returning a partial pair.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CertificatePair {
    pub certificate: String,
    pub private_key: String,
}

impl fmt::Debug for CertificatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificatePair")
            .field("certificate", &self.certificate)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Decryption secret for encrypted key material.
///
/// An empty passphrase and "no passphrase" are equivalent: both mean
/// decryption is attempted with no secret.
#[derive(Clone, PartialEq, Eq, Default, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    /// The empty passphrase used for unencrypted material.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Passphrase {
    fn from(secret: &str) -> Self {
        Self(secret.to_owned())
    }
}

impl From<String> for Passphrase {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl From<Option<&str>> for Passphrase {
    fn from(secret: Option<&str>) -> Self {
        Self(secret.unwrap_or_default().to_owned())
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}
