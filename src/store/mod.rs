//! Secret-backend integration module
//!
//! Defines the boundary to a Vault-style secret store and the key provider
//! that composes login, fetch, and decoding. Retry, backoff, and transport
//! policy live behind the [`SecretStore`] trait; store failures pass through
//! the provider unwrapped so nothing of their diagnostics is lost.

pub mod cache;
pub mod cert_file;

use crate::config::{CertificateKeyConfig, DecodedKey, KeySpec};
use crate::error::KeyMaterialError;
use crate::models::CertificatePair;
use crate::oidc::{self, OidcCredential};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Session token returned by a backend login.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// AppRole credentials used to obtain a session token.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct StoreCredentials {
    pub role_id: String,
    pub secret_id: String,
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("role_id", &self.role_id)
            .field("secret_id", &"<redacted>")
            .finish()
    }
}

/// Parameters for a single secret lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest<'a> {
    pub path: &'a str,
    pub secret: &'a str,
    pub key: &'a str,
    pub version: Option<u32>,
    pub use_cache: bool,
    pub expire: Duration,
}

/// Boundary to the secret backend.
///
/// Implementations own transport, caching of fetched ciphertext, and any
/// retry policy. The provider only ever sees raw secret bytes.
pub trait SecretStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Exchange AppRole credentials for a session token.
    fn login(&self, credentials: &StoreCredentials) -> Result<AuthToken, Self::Error>;

    /// Fetch a single secret value.
    fn get_secret(
        &self,
        token: &AuthToken,
        request: &SecretRequest<'_>,
    ) -> Result<Vec<u8>, Self::Error>;
}

/// Provider failures: either the store failed (passed through as-is) or the
/// fetched bytes did not decode.
#[derive(Error, Debug)]
pub enum ProviderError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error(transparent)]
    Store(E),

    #[error(transparent)]
    Material(#[from] KeyMaterialError),
}

/// Settings for the Vault key provider.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultProviderConfig {
    /// Mount path of the secret engine.
    #[serde(default = "default_path")]
    pub path: String,
    /// Name of the secret holding the key value.
    #[serde(default)]
    pub secret: String,
    /// Field inside the secret to read.
    #[serde(default)]
    pub key: String,
    /// Secret version to fetch, latest when absent.
    #[serde(default)]
    pub version: Option<u32>,
    /// Ciphertext cache lifetime in seconds; `0` disables caching.
    #[serde(default = "default_cache_duration")]
    pub cache_duration_secs: u64,
}

fn default_path() -> String {
    "secret".to_string()
}

fn default_cache_duration() -> u64 {
    3600
}

impl Default for VaultProviderConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            secret: String::new(),
            key: String::new(),
            version: None,
            cache_duration_secs: default_cache_duration(),
        }
    }
}

impl VaultProviderConfig {
    pub fn use_cache(&self) -> bool {
        self.cache_duration_secs != 0
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    fn request(&self) -> SecretRequest<'_> {
        SecretRequest {
            path: &self.path,
            secret: &self.secret,
            key: &self.key,
            version: self.version,
            use_cache: self.use_cache(),
            expire: self.cache_duration(),
        }
    }
}

/// Key provider backed by a Vault-style secret store.
///
/// Fetch failures are logged with the key identifier and re-raised
/// unwrapped; decode failures carry their own diagnostics.
pub struct VaultKeyProvider<S> {
    store: S,
    credentials: StoreCredentials,
    config: VaultProviderConfig,
}

impl<S: SecretStore> VaultKeyProvider<S> {
    pub fn new(store: S, credentials: StoreCredentials, config: VaultProviderConfig) -> Self {
        Self {
            store,
            credentials,
            config,
        }
    }

    /// Fetch the raw key value for `key_id`.
    pub fn key_value(&self, key_id: &str) -> Result<Vec<u8>, ProviderError<S::Error>> {
        let token = self.store.login(&self.credentials).map_err(|err| {
            tracing::error!("Vault login failed for key {}: {}", key_id, err);
            ProviderError::Store(err)
        })?;

        self.store
            .get_secret(&token, &self.config.request())
            .map_err(|err| {
                tracing::error!("Unable to retrieve secret for key {}: {}", key_id, err);
                ProviderError::Store(err)
            })
    }

    /// Fetch and decode a certificate/key pair.
    pub fn certificates(
        &self,
        key_id: &str,
        config: &CertificateKeyConfig,
    ) -> Result<CertificatePair, ProviderError<S::Error>> {
        let material = self.key_value(key_id)?;
        Ok(config.materialize(&material)?)
    }

    /// Fetch and extract an OIDC credential.
    pub fn oidc(&self, key_id: &str) -> Result<OidcCredential, ProviderError<S::Error>> {
        let material = self.key_value(key_id)?;
        Ok(oidc::extract_oidc(&material)?)
    }

    /// Fetch and decode according to a key spec.
    pub fn decode(
        &self,
        key_id: &str,
        spec: &KeySpec,
    ) -> Result<DecodedKey, ProviderError<S::Error>> {
        let material = self.key_value(key_id)?;
        Ok(spec.decode(&material)?)
    }
}
