//! High-level Night Light controller.

use crate::codec::{self, Validation};
use crate::config::Config;
use crate::error::Result;
use crate::state::NightLightState;
use crate::store::{BlobStore, StoreKey};

use log::{debug, info};

/// Reads, changes and writes back Night Light values through a [`BlobStore`].
///
/// Every call reads the current value fresh from the store; nothing is
/// cached between calls.
///
/// # Example
///
/// ```no_run
/// use nightlight_core::{Config, NightLight, open_store};
///
/// let night_light = NightLight::with_config(open_store(&Config::default())?, &Config::default());
/// night_light.toggle()?;
/// night_light.set_strength(60)?;
/// # Ok::<(), nightlight_core::NightLightError>(())
/// ```
pub struct NightLight<S: BlobStore> {
    store: S,
    validation: Validation,
}

impl<S: BlobStore> NightLight<S> {
    /// Create a controller with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, &Config::default())
    }

    /// Create a controller using `config`'s validation mode.
    pub fn with_config(store: S, config: &Config) -> Self {
        Self {
            store,
            validation: config.validation,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether both the state and settings values are present.
    pub fn supported(&self) -> bool {
        StoreKey::ALL.iter().all(|&key| self.store.exists(key))
    }

    /// Whether Night Light is currently on.
    ///
    /// # Errors
    /// - [`NightLightError::NotSupported`](crate::NightLightError::NotSupported)
    ///   if the state value is missing
    /// - [`NightLightError::Format`](crate::NightLightError::Format) if it is malformed
    pub fn is_enabled(&self) -> Result<bool> {
        let blob = self.store.read(StoreKey::State)?;
        let enabled = codec::validate(&blob, self.validation)?;
        debug!("night light enabled: {}", enabled);
        Ok(enabled)
    }

    /// Move to `desired`, or flip the state when `None`.
    ///
    /// Nothing is written when the state already matches. Returns the new
    /// state.
    pub fn set_enabled(&self, desired: Option<bool>) -> Result<bool> {
        let blob = self.store.read(StoreKey::State)?;
        let updated = codec::toggle_with(&blob, desired, self.validation)?;
        let enabled = codec::decode_enabled(&updated)?;

        // Both transitions change the length, so equal bytes mean no-op.
        if updated == blob {
            debug!("night light already {}", on_off(enabled));
            return Ok(enabled);
        }

        self.store.write(StoreKey::State, &updated)?;
        info!(
            "night light switched {} -> {}",
            on_off(!enabled),
            on_off(enabled)
        );
        Ok(enabled)
    }

    /// Turn Night Light on.
    pub fn enable(&self) -> Result<()> {
        self.set_enabled(Some(true)).map(|_| ())
    }

    /// Turn Night Light off.
    pub fn disable(&self) -> Result<()> {
        self.set_enabled(Some(false)).map(|_| ())
    }

    /// Flip Night Light and return the new state.
    pub fn toggle(&self) -> Result<bool> {
        self.set_enabled(None)
    }

    /// Current strength percentage (0-100).
    pub fn strength(&self) -> Result<u8> {
        let blob = self.store.read(StoreKey::Settings)?;
        let strength = codec::decode_percentage(&blob)?;
        debug!("night light strength: {}%", strength);
        Ok(strength)
    }

    /// Current colour temperature in Kelvin.
    pub fn kelvin(&self) -> Result<f64> {
        let blob = self.store.read(StoreKey::Settings)?;
        codec::decode_kelvin(&blob)
    }

    /// Set the strength, clamping `percent` to 0-100.
    ///
    /// Always writes, even if the value is unchanged. Returns the strength
    /// read back from the encoded value.
    pub fn set_strength(&self, percent: i32) -> Result<u8> {
        let blob = self.store.read(StoreKey::Settings)?;
        let updated = codec::encode_percentage(&blob, percent)?;
        self.store.write(StoreKey::Settings, &updated)?;

        let stored = codec::decode_percentage(&updated)?;
        info!(
            "night light strength set to {}% ({}K)",
            stored,
            codec::percentage_to_kelvin(percent)
        );
        Ok(stored)
    }

    /// Read both values into a [`NightLightState`].
    pub fn get_state(&self) -> Result<NightLightState> {
        let state_blob = self.store.read(StoreKey::State)?;
        let settings_blob = self.store.read(StoreKey::Settings)?;
        Ok(NightLightState {
            enabled: codec::validate(&state_blob, self.validation)?,
            strength: codec::decode_percentage(&settings_blob)?,
            kelvin: codec::decode_kelvin(&settings_blob)?,
        })
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
