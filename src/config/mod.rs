//! Key-type configuration module
//!
//! Typed settings describing how a stored key value is to be decoded.

pub mod settings;

pub use settings::{CertificateKeyConfig, DecodedKey, KeySpec};
