//! OIDC client credential extraction
//!
//! The same fail-closed treatment applied to certificate material, for the
//! JSON-shaped OIDC secrets stored next to it: every required field must be
//! present as a string, and a failure names the first field that is not.

use crate::error::{KeyMaterialError, Result};
use serde_json::Value;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// OIDC client credential with all three required values present.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct OidcCredential {
    pub discovery_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for OidcCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidcCredential")
            .field("discovery_url", &self.discovery_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Extract an OIDC credential from JSON bytes.
///
/// Fields are checked in a fixed order; a field that is absent, null, or not
/// a string is reported as missing by name. An empty string is accepted. No
/// partial credential is ever returned.
pub fn extract_oidc(material: &[u8]) -> Result<OidcCredential> {
    decode_credential(material).map_err(|err| {
        tracing::error!("Failed to extract OIDC credential: {}", err);
        err
    })
}

fn decode_credential(material: &[u8]) -> Result<OidcCredential> {
    let value: Value = serde_json::from_slice(material).map_err(|err| {
        KeyMaterialError::MalformedCredentialJson {
            message: err.to_string(),
        }
    })?;

    let object = value
        .as_object()
        .ok_or_else(|| KeyMaterialError::MalformedCredentialJson {
            message: "expected a JSON object".to_string(),
        })?;

    Ok(OidcCredential {
        discovery_url: required_field(object, "discovery_url")?,
        client_id: required_field(object, "client_id")?,
        client_secret: required_field(object, "client_secret")?,
    })
}

fn required_field(object: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| KeyMaterialError::MissingCredentialField {
            field: field.to_string(),
        })
}
