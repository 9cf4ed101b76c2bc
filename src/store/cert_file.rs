//! Scoped temporary certificate files
//!
//! Some integrations take a filesystem path instead of in-memory bytes.
//! [`TempCertificateFile`] stages certificate bytes in a uniquely named
//! temporary file and removes it when the value is dropped.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Temporary file errors
#[derive(Error, Debug)]
pub enum TempFileError {
    #[error("Failed to create temporary certificate file: {source}")]
    Create { source: std::io::Error },

    #[error("Failed to write temporary certificate file: {source}")]
    Write { source: std::io::Error },
}

/// Certificate bytes staged on disk, deleted on drop.
pub struct TempCertificateFile {
    file: NamedTempFile,
}

impl TempCertificateFile {
    /// Stage certificate bytes in the system temporary directory.
    pub fn new(certificate: &[u8]) -> Result<Self, TempFileError> {
        Self::new_in(std::env::temp_dir(), certificate)
    }

    /// Stage certificate bytes in a specific directory.
    pub fn new_in(dir: impl AsRef<Path>, certificate: &[u8]) -> Result<Self, TempFileError> {
        let mut file = tempfile::Builder::new()
            .prefix("vault-certificate-")
            .suffix(".pem")
            .tempfile_in(dir)
            .map_err(|source| TempFileError::Create { source })?;

        file.write_all(certificate)
            .map_err(|source| TempFileError::Write { source })?;
        file.flush()
            .map_err(|source| TempFileError::Write { source })?;

        Ok(Self { file })
    }

    /// Path of the staged file, valid for the lifetime of this value.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
