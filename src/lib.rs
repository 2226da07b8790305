//! Read and write the Windows 10/11 Night Light settings.
//!
//! Night Light keeps its state in two undocumented binary values under
//! `HKEY_CURRENT_USER\...\CloudStore`. This crate decodes those values,
//! builds the modified bytes for a change, and writes them back.
//!
//! # Requirements
//!
//! - Windows 10/11 for the registry store
//! - Night Light turned on at least once, so the values exist
//!
//! The [`codec`] module has no platform requirements.
//!
//! # Example
//!
//! ```no_run
//! use nightlight_core::{Config, NightLight, open_store};
//!
//! fn main() -> Result<(), nightlight_core::NightLightError> {
//!     let config = Config::default();
//!     let night_light = NightLight::with_config(open_store(&config)?, &config);
//!
//!     if !night_light.supported() {
//!         println!("Night Light has never been configured");
//!         return Ok(());
//!     }
//!
//!     let state = night_light.get_state()?;
//!     println!("enabled={}, strength={}%", state.enabled, state.strength);
//!
//!     night_light.enable()?;
//!     night_light.set_strength(70)?;
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockStore`] to test code without a registry:
//!
//! ```
//! use nightlight_core::{MockStore, NightLight};
//!
//! let night_light = NightLight::new(MockStore::new());
//! assert!(night_light.toggle().unwrap());
//! ```
//!
//! # Disclaimer
//!
//! The blob layout is reverse-engineered and only the bytes this crate reads
//! or changes are understood. Future Windows builds may change it.

#![warn(missing_docs)]

pub mod codec;
mod config;
mod controller;
mod error;
mod mock;
mod registry;
mod state;
mod store;

// Re-export public API
pub use codec::Validation;
pub use config::{Backend, Config};
pub use controller::NightLight;
pub use error::{NightLightError, Result};
pub use mock::{MockStore, SAMPLE_SETTINGS, SAMPLE_STATE};
pub use registry::{RegistryStore, open_store, reg_add_args};
pub use state::NightLightState;
pub use store::{BlobStore, StoreKey};
