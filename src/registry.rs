//! Windows registry store.

use crate::config::{Backend, Config};
use crate::error::{NightLightError, Result};
use crate::store::{BlobStore, StoreKey};

#[cfg(windows)]
use log::{debug, trace};

/// Arguments for `reg.exe` that overwrite `key`'s `Data` value with `value`.
pub fn reg_add_args(key: StoreKey, value: &[u8]) -> Vec<String> {
    vec![
        "add".to_string(),
        format!(r"HKCU\{}", key.subkey()),
        "/v".to_string(),
        StoreKey::VALUE_NAME.to_string(),
        "/t".to_string(),
        "REG_BINARY".to_string(),
        "/d".to_string(),
        to_hex(value),
        "/f".to_string(),
    ]
}

fn to_hex(value: &[u8]) -> String {
    value.iter().map(|b| format!("{b:02x}")).collect()
}

/// [`BlobStore`] backed by `HKEY_CURRENT_USER`.
///
/// Reads always go through the registry API; writes use the configured
/// [`Backend`].
#[derive(Debug, Clone)]
pub struct RegistryStore {
    backend: Backend,
}

impl RegistryStore {
    /// Create a store using the backend from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            backend: config.backend,
        }
    }

    /// The write backend in use.
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

/// Map a registry I/O error onto [`NightLightError`].
///
/// A missing key or value means Night Light was never configured.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn map_registry_error(e: std::io::Error) -> NightLightError {
    match e.kind() {
        std::io::ErrorKind::NotFound => NightLightError::NotSupported,
        std::io::ErrorKind::PermissionDenied => NightLightError::PermissionDenied,
        _ => match e.raw_os_error() {
            Some(code) => NightLightError::Registry(code as u32),
            None => NightLightError::Io(e),
        },
    }
}

#[cfg(windows)]
mod win {
    use super::map_registry_error;
    use crate::error::{NightLightError, Result};
    use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE, RegType};
    use winreg::{RegKey, RegValue};

    pub(super) fn read_binary(subkey: &str, value_name: &str) -> Result<Vec<u8>> {
        let value = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey(subkey)
            .and_then(|key| key.get_raw_value(value_name))
            .map_err(map_registry_error)?;

        if !matches!(value.vtype, RegType::REG_BINARY) {
            return Err(NightLightError::format(format!(
                "{value_name} is not a REG_BINARY value"
            )));
        }
        Ok(value.bytes)
    }

    /// Overwrite an existing value; a missing key is not created.
    pub(super) fn write_binary(subkey: &str, value_name: &str, value: &[u8]) -> Result<()> {
        let key = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(subkey, KEY_SET_VALUE)
            .map_err(map_registry_error)?;
        key.set_raw_value(
            value_name,
            &RegValue {
                bytes: value.to_vec(),
                vtype: RegType::REG_BINARY,
            },
        )
        .map_err(map_registry_error)
    }
}

#[cfg(windows)]
fn write_with_reg_exe(key: StoreKey, value: &[u8]) -> Result<()> {
    use std::os::windows::process::CommandExt;
    use std::process::Command;
    use windows_sys::Win32::System::Threading::CREATE_NO_WINDOW;

    let output = Command::new("reg")
        .args(reg_add_args(key, value))
        .creation_flags(CREATE_NO_WINDOW)
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(NightLightError::WriteFailed(stderr))
    }
}

#[cfg(windows)]
impl BlobStore for RegistryStore {
    fn read(&self, key: StoreKey) -> Result<Vec<u8>> {
        let value = win::read_binary(&key.subkey(), StoreKey::VALUE_NAME)?;
        debug!("read {} value ({} bytes)", key.name(), value.len());
        trace!("{} = {}", key.name(), to_hex(&value));
        Ok(value)
    }

    fn write(&self, key: StoreKey, value: &[u8]) -> Result<()> {
        debug!(
            "writing {} value ({} bytes) via {:?}",
            key.name(),
            value.len(),
            self.backend
        );
        trace!("{} = {}", key.name(), to_hex(value));
        match self.backend {
            Backend::Direct => win::write_binary(&key.subkey(), StoreKey::VALUE_NAME, value),
            Backend::RegExe => write_with_reg_exe(key, value),
        }
    }
}

#[cfg(not(windows))]
impl BlobStore for RegistryStore {
    fn read(&self, _key: StoreKey) -> Result<Vec<u8>> {
        Err(NightLightError::NotSupported)
    }

    fn write(&self, _key: StoreKey, _value: &[u8]) -> Result<()> {
        Err(NightLightError::NotSupported)
    }
}

/// Open the registry store, or fail with
/// [`NightLightError::NotSupported`] where there is no registry.
pub fn open_store(config: &Config) -> Result<Box<dyn BlobStore>> {
    if cfg!(windows) {
        Ok(Box::new(RegistryStore::new(config)))
    } else {
        Err(NightLightError::NotSupported)
    }
}
