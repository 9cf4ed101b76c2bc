//! Error types for key material operations
//!
//! This module defines the domain-specific error type using `thiserror` for
//! all the different failure modes of parsing, converting, and credential
//! extraction. Failures originating in a cryptographic library carry the
//! library's full diagnostic text, captured at the failing call.

use crate::models::ContainerFormat;
use thiserror::Error;

/// Which half of a certificate/key pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Certificate,
    PrivateKey,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Certificate => write!(f, "certificate"),
            Component::PrivateKey => write!(f, "private key"),
        }
    }
}

/// Main error type for key material operations
#[derive(Error, Debug)]
pub enum KeyMaterialError {
    /// The container bytes could not be decoded in the declared format.
    #[error("Malformed {format} container: {message}{}", diag_suffix(.diagnostic))]
    MalformedContainer {
        format: ContainerFormat,
        message: String,
        diagnostic: Option<String>,
    },

    /// Decryption of an encrypted component failed, usually a wrong passphrase.
    #[error("Failed to decrypt {component}: {message}{}", diag_suffix(.diagnostic))]
    DecryptionFailed {
        component: Component,
        message: String,
        diagnostic: Option<String>,
    },

    /// The container decoded cleanly but a required component is absent.
    #[error("No {component} found in key material")]
    MissingComponent { component: String },

    /// A format string outside the recognized set.
    #[error("Unsupported container format: {format}")]
    UnsupportedFormat { format: String },

    /// An OIDC credential object lacks a required string field.
    #[error("Missing OIDC value: {field}")]
    MissingCredentialField { field: String },

    /// OIDC credential bytes are not a JSON object.
    #[error("Malformed OIDC credential: {message}")]
    MalformedCredentialJson { message: String },
}

fn diag_suffix(diagnostic: &Option<String>) -> String {
    match diagnostic {
        Some(diagnostic) => format!(" ({diagnostic})"),
        None => String::new(),
    }
}

/// Flatten an error and its whole source chain into one diagnostic string.
///
/// Called immediately at the failing library call so the captured text can
/// never mix with diagnostics from a different operation.
pub(crate) fn drain_diagnostics(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join("; ")
}

/// Result type alias using KeyMaterialError
pub type Result<T> = std::result::Result<T, KeyMaterialError>;
