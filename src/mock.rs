//! Mock store for testing.

use crate::error::{NightLightError, Result};
use crate::store::{BlobStore, StoreKey};
use std::collections::HashMap;
use std::sync::Mutex;

/// Disabled state blob as written by Windows 11.
pub const SAMPLE_STATE: [u8; 41] = [
    0x43, 0x42, 0x01, 0x00, 0x0A, 0x02, 0x01, 0x00, 0x2A, 0x06, 0x9F, 0xC8,
    0x8C, 0xC1, 0x06, 0x2A, 0x2B, 0x0E, 0x13, 0x43, 0x42, 0x01, 0x00, 0xD0,
    0x0A, 0x02, 0xC6, 0x14, 0xB0, 0xE6, 0x89, 0xD5, 0xE0, 0xAC, 0xEA, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Settings blob with the temperature at 4500K (38% strength).
pub const SAMPLE_SETTINGS: [u8; 58] = [
    0x43, 0x42, 0x01, 0x00, 0x0A, 0x02, 0x01, 0x00, 0x2A, 0x06, 0x85, 0xB4,
    0x8E, 0xC1, 0x06, 0x2A, 0x2B, 0x0E, 0x1D, 0x43, 0x42, 0x01, 0x00, 0xC2,
    0x0A, 0x00, 0xCA, 0x14, 0x0E, 0x15, 0x00, 0xCA, 0x1E, 0x0E, 0x07, 0xA8,
    0x46, 0xCF, 0x28, 0xBC, 0x3E, 0xCA, 0x32, 0x0E, 0x10, 0x2E, 0x36, 0x00,
    0xCA, 0x3C, 0x0E, 0x08, 0x2E, 0x2F, 0x00, 0x00, 0x00, 0x00,
];

/// An in-memory [`BlobStore`].
///
/// Lets code that depends on [`BlobStore`] run without a registry, and
/// records every write so tests can inspect exactly what was stored.
///
/// # Example
///
/// ```
/// use nightlight_core::{MockStore, NightLight};
///
/// let night_light = NightLight::new(MockStore::new());
/// night_light.enable().unwrap();
/// assert!(night_light.is_enabled().unwrap());
/// ```
pub struct MockStore {
    values: Mutex<HashMap<StoreKey, Vec<u8>>>,
    writes: Mutex<Vec<(StoreKey, Vec<u8>)>>,
    read_only: bool,
}

impl MockStore {
    /// Create a store holding [`SAMPLE_STATE`] and [`SAMPLE_SETTINGS`].
    pub fn new() -> Self {
        Self::empty()
            .with_value(StoreKey::State, SAMPLE_STATE.to_vec())
            .with_value(StoreKey::Settings, SAMPLE_SETTINGS.to_vec())
    }

    /// Create a store with no values, as on a system without Night Light.
    pub fn empty() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            writes: Mutex::new(Vec::new()),
            read_only: false,
        }
    }

    /// Set the value stored under `key`.
    pub fn with_value(self, key: StoreKey, value: Vec<u8>) -> Self {
        self.values.lock().unwrap().insert(key, value);
        self
    }

    /// Make every write fail with [`NightLightError::PermissionDenied`].
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current value under `key`, if any.
    pub fn value(&self, key: StoreKey) -> Option<Vec<u8>> {
        self.values.lock().unwrap().get(&key).cloned()
    }

    /// All successful writes, oldest first.
    pub fn writes(&self) -> Vec<(StoreKey, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MockStore {
    fn read(&self, key: StoreKey) -> Result<Vec<u8>> {
        self.value(key).ok_or(NightLightError::NotSupported)
    }

    fn write(&self, key: StoreKey, value: &[u8]) -> Result<()> {
        if self.read_only {
            return Err(NightLightError::PermissionDenied);
        }
        let mut values = self.values.lock().unwrap();
        if !values.contains_key(&key) {
            return Err(NightLightError::NotSupported);
        }
        values.insert(key, value.to_vec());
        self.writes.lock().unwrap().push((key, value.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_seeded_values() {
        let store = MockStore::new();
        assert_eq!(store.read(StoreKey::State).unwrap(), SAMPLE_STATE);
        assert_eq!(store.read(StoreKey::Settings).unwrap(), SAMPLE_SETTINGS);
        assert!(store.exists(StoreKey::State));
    }

    #[test]
    fn empty_store_is_not_supported() {
        let store = MockStore::empty();
        assert!(matches!(
            store.read(StoreKey::State),
            Err(NightLightError::NotSupported)
        ));
        assert!(matches!(
            store.write(StoreKey::State, &[1, 2, 3]),
            Err(NightLightError::NotSupported)
        ));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn write_replaces_and_records() {
        let store = MockStore::new();
        store.write(StoreKey::State, &[9, 9]).unwrap();
        assert_eq!(store.value(StoreKey::State).unwrap(), [9, 9]);
        assert_eq!(store.writes(), vec![(StoreKey::State, vec![9, 9])]);
    }

    #[test]
    fn read_only_rejects_writes() {
        let store = MockStore::new().read_only();
        assert!(matches!(
            store.write(StoreKey::Settings, &[0]),
            Err(NightLightError::PermissionDenied)
        ));
        assert_eq!(store.value(StoreKey::Settings).unwrap(), SAMPLE_SETTINGS);
    }
}
