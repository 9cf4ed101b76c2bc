//! Key-Toolkit Library
//!
//! A certificate/key material normalization engine providing:
//! - Parsing of PEM bundles and PKCS#12 archives into a canonical pair of
//!   unencrypted PEM certificate and unencrypted PKCS#8 private key
//! - Conversion of a canonical pair back into either container format
//! - OIDC client credential extraction with fail-closed field validation
//! - A Vault-style key provider composing secret fetch and decoding
//!
//! # Usage
//!
//! ```rust,ignore
//! use key_toolkit::{materialize, ContainerFormat, Passphrase};
//!
//! let pair = materialize(
//!     &archive_bytes,
//!     ContainerFormat::Pkcs12,
//!     ContainerFormat::Pem,
//!     &Passphrase::from("test"),
//! )?;
//! println!("{}", pair.certificate);
//! ```

pub mod config;
pub mod error;
pub mod material;
pub mod models;
pub mod oidc;
pub mod store;

// Re-export commonly used types
pub use config::{CertificateKeyConfig, DecodedKey, KeySpec};
pub use error::{Component, KeyMaterialError, Result};
pub use material::{convert, materialize, parse, EXPORT_PASSPHRASE};
pub use models::{CertificatePair, ContainerFormat, Passphrase};
pub use oidc::{extract_oidc, OidcCredential};
pub use store::{SecretStore, VaultKeyProvider};
