//! Runtime configuration.
//!
//! Built once by the caller (usually from command-line flags) and handed to
//! the store and controller at construction.

use crate::codec::Validation;

/// How changed values are written back to the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Call the registry API directly.
    #[default]
    Direct,
    /// Shell out to `reg.exe add`.
    ///
    /// Needed when running from a packaged (MSIX) install, where direct
    /// writes land in a virtualised hive instead of the real one.
    RegExe,
}

/// Options shared by the store, the controller and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Write backend for [`RegistryStore`](crate::RegistryStore).
    pub backend: Backend,
    /// Whether a front end may ask the user for confirmation.
    pub interactive: bool,
    /// Validation applied to the state blob before toggling.
    pub validation: Validation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Direct,
            interactive: true,
            validation: Validation::Lenient,
        }
    }
}

impl Config {
    /// Use `backend` for writes.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Enable or disable confirmation prompts.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Set the state blob validation mode.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}
