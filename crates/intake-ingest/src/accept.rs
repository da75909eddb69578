//! File acceptance policy: size ceiling and extension allow-list.
//!
//! Both checks run before any content is read, so a rejected file never
//! produces parsed data.

use std::fs;
use std::path::Path;

use intake_model::{IntakeError, ParsedFile, Result};

use crate::parser::parse_text;

/// Host-configurable limits for accepting an uploaded file.
#[derive(Debug, Clone)]
pub struct AcceptPolicy {
    /// Maximum file size in megabytes.
    pub max_size_mb: u64,
    /// Accepted file extensions, with leading dot, lowercase.
    pub accepted_extensions: Vec<String>,
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self {
            max_size_mb: 10,
            accepted_extensions: vec![".csv".to_string()],
        }
    }
}

impl AcceptPolicy {
    #[must_use]
    pub fn with_max_size_mb(mut self, max_size_mb: u64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.accepted_extensions = extensions;
        self
    }

    fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }

    fn extension_accepted(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.accepted_extensions
            .iter()
            .any(|ext| lower.ends_with(ext.as_str()))
    }

    /// Checks a file name and byte size against the policy without
    /// touching the filesystem.
    pub fn check(&self, name: &str, size_bytes: u64) -> Result<()> {
        if !self.extension_accepted(name) {
            return Err(IntakeError::UnsupportedExtension {
                accepted: self.accepted_extensions.join(", "),
            });
        }
        if size_bytes > self.max_size_bytes() {
            return Err(IntakeError::FileTooLarge {
                limit_mb: self.max_size_mb,
            });
        }
        Ok(())
    }
}

/// Accepts and parses a file from disk.
///
/// Policy checks run against the file metadata first; only accepted
/// files are read and parsed.
pub fn accept_file(path: &Path, policy: &AcceptPolicy) -> Result<ParsedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = fs::metadata(path)?;
    policy.check(&name, metadata.len())?;

    let text = fs::read_to_string(path)?;
    tracing::info!(file = %name, bytes = metadata.len(), "accepted upload");
    parse_text(&name, &text)
}

/// Accepts already-loaded content, for hosts that hold the upload in
/// memory. The size check uses the content's byte length.
pub fn accept_text(name: &str, text: &str, policy: &AcceptPolicy) -> Result<ParsedFile> {
    policy.check(name, text.len() as u64)?;
    parse_text(name, text)
}
