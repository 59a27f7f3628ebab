//! Remote document storage.

use std::future::Future;

use crate::error::{CoreError, CoreResult};

/// Which remote file to edit and the credential to reach it.
///
/// The token is only ever sent as a request header.
#[derive(Clone, Default)]
pub struct Target {
    pub gist_id: String,
    pub filename: String,
    pub token: String,
}

impl Target {
    pub fn new(gist_id: impl Into<String>, filename: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            gist_id: gist_id.into().trim().to_string(),
            filename: filename.into().trim().to_string(),
            token: token.into().trim().to_string(),
        }
    }

    /// All three inputs are required before any request is made.
    pub fn validate(&self) -> CoreResult<()> {
        if self.gist_id.is_empty() || self.filename.is_empty() || self.token.is_empty() {
            return Err(CoreError::MissingInput);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("gist_id", &self.gist_id)
            .field("filename", &self.filename)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// Whole-file read and write against a remote paste service.
pub trait RemoteStore {
    /// Full text of the target file.
    fn read(&self, target: &Target) -> impl Future<Output = CoreResult<String>> + Send;

    /// Replace the target file's content. Other files are left alone.
    fn write(&self, target: &Target, content: &str) -> impl Future<Output = CoreResult<()>> + Send;
}
