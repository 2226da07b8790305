//! Error types for Night Light blob handling.

/// Errors that can occur when reading, decoding or writing Night Light blobs.
#[derive(Debug, thiserror::Error)]
pub enum NightLightError {
    /// The blob does not have the expected length or byte pattern.
    ///
    /// Usually means Night Light has never been used on this account, or the
    /// OS changed the layout.
    #[error("Registry value doesn't match the expected format: {reason}")]
    Format {
        /// Human-readable description of the mismatch.
        reason: String,
    },

    /// The Night Light registry keys or their `Data` value are missing.
    #[error("Night Light is not supported on this system")]
    NotSupported,

    /// The store refused the write.
    #[error("Permission denied writing Night Light data")]
    PermissionDenied,

    /// An external `reg.exe` invocation failed.
    #[error("Failed to write Night Light data: {0}")]
    WriteFailed(String),

    /// Any other registry API failure.
    #[error("Registry error (error code: {0})")]
    Registry(u32),

    /// An I/O error occurred (e.g., spawning `reg.exe`).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NightLightError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}

/// Result alias using [`NightLightError`].
pub type Result<T> = std::result::Result<T, NightLightError>;
