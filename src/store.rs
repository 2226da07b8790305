//! Storage seam for the raw blobs.

use crate::error::Result;

const KEY_ROOT: &str = r"Software\Microsoft\Windows\CurrentVersion\CloudStore\Store\DefaultAccount\Current";

/// The two registry keys Night Light keeps its data under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// On/off state blob.
    State,
    /// Settings blob holding the colour temperature.
    Settings,
}

impl StoreKey {
    /// Name of the binary value under each key.
    pub const VALUE_NAME: &'static str = "Data";

    /// Both keys, state first.
    pub const ALL: [StoreKey; 2] = [StoreKey::State, StoreKey::Settings];

    /// Path relative to `HKEY_CURRENT_USER`.
    pub fn subkey(self) -> String {
        let leaf = match self {
            StoreKey::State => "windows.data.bluelightreduction.bluelightreductionstate",
            StoreKey::Settings => "windows.data.bluelightreduction.settings",
        };
        format!(r"{KEY_ROOT}\default${leaf}\{leaf}")
    }

    /// Short name for log output.
    pub fn name(self) -> &'static str {
        match self {
            StoreKey::State => "state",
            StoreKey::Settings => "settings",
        }
    }
}

/// Read/write access to the `Data` value of a [`StoreKey`].
///
/// Implemented by [`RegistryStore`](crate::RegistryStore) on Windows and by
/// [`MockStore`](crate::MockStore) for tests.
pub trait BlobStore: Send + Sync {
    /// Read the raw value.
    ///
    /// Returns [`NightLightError::NotSupported`](crate::NightLightError::NotSupported)
    /// if the key or value doesn't exist.
    fn read(&self, key: StoreKey) -> Result<Vec<u8>>;

    /// Replace the raw value.
    fn write(&self, key: StoreKey, value: &[u8]) -> Result<()>;

    /// Whether the value can be read.
    fn exists(&self, key: StoreKey) -> bool {
        self.read(key).is_ok()
    }
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn read(&self, key: StoreKey) -> Result<Vec<u8>> {
        (**self).read(key)
    }

    fn write(&self, key: StoreKey, value: &[u8]) -> Result<()> {
        (**self).write(key, value)
    }

    fn exists(&self, key: StoreKey) -> bool {
        (**self).exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subkeys_match_cloudstore_layout() {
        assert_eq!(
            StoreKey::State.subkey(),
            r"Software\Microsoft\Windows\CurrentVersion\CloudStore\Store\DefaultAccount\Current\default$windows.data.bluelightreduction.bluelightreductionstate\windows.data.bluelightreduction.bluelightreductionstate"
        );
        assert_eq!(
            StoreKey::Settings.subkey(),
            r"Software\Microsoft\Windows\CurrentVersion\CloudStore\Store\DefaultAccount\Current\default$windows.data.bluelightreduction.settings\windows.data.bluelightreduction.settings"
        );
    }

    #[test]
    fn names() {
        assert_eq!(StoreKey::State.name(), "state");
        assert_eq!(StoreKey::Settings.name(), "settings");
        assert_eq!(StoreKey::VALUE_NAME, "Data");
    }
}
