//! Provider directory and the control-device `set provider` request.
//!
//! The control device has a wider ioctl surface in the full driver; this
//! module owns only the one request the bootstrap hand-off uses.

use alloc::string::{String, ToString};

use hashbrown::HashMap;
use proteus_api::abi::{IOCTL_SET_PROVIDER, MAX_PROVIDERS, PROVIDER_NAME_MAX};
use proteus_api::process::{HandlerId, ProcessRef};
use proteus_api::{Error, Result};
use spin::{Mutex, Once};

use crate::registry::registry;

/// Name-to-handler directory of registered pico providers.
///
/// Handler ids are assigned sequentially from 0 and are stable for the
/// kernel's lifetime; providers are never unregistered.
pub struct ProviderDirectory {
    providers: Mutex<HashMap<String, HandlerId>>,
}

impl ProviderDirectory {
    pub fn new() -> Self {
        ProviderDirectory {
            providers: Mutex::new(HashMap::new()),
        }
    }

    /// Register a provider under `name` and return its handler id.
    ///
    /// The name must be non-empty and leave room for a trailing NUL in its
    /// fixed-length wire form.
    pub fn register_provider(&self, name: &str) -> Result<HandlerId> {
        if name.is_empty() || name.len() >= PROVIDER_NAME_MAX {
            return Err(Error::InvalidParameter);
        }

        let mut providers = self.providers.lock();
        if providers.contains_key(name) {
            return Err(Error::AlreadyRegistered);
        }
        if providers.len() >= MAX_PROVIDERS {
            return Err(Error::InsufficientResources);
        }

        let id = providers.len() as HandlerId;
        providers.insert(name.to_string(), id);
        log::info!("provider '{}' registered as handler {}", name, id);
        Ok(id)
    }

    /// Handler id registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<HandlerId> {
        let providers = self.providers.lock();
        providers.get(name).copied().ok_or(Error::NotFound)
    }

    pub fn len(&self) -> usize {
        self.providers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.lock().is_empty()
    }

    /// Drop every provider entry.
    pub fn clear(&self) {
        self.providers.lock().clear();
    }
}

impl Default for ProviderDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle the `set provider` control request issued by `caller` on the
/// control device. Returns 0 on success or a negative status code.
///
/// The payload is a NUL-terminated provider name within its fixed-length
/// window; a successful resolution drives the switch protocol against the
/// caller's own identity.
pub fn set_provider(caller: ProcessRef, code: u32, payload: &[u8]) -> isize {
    match try_set_provider(caller, code, payload) {
        Ok(()) => 0,
        Err(e) => {
            log::warn!(
                "set_provider rejected for process {:#x}: {}",
                caller.as_raw(),
                e
            );
            e.code() as isize
        }
    }
}

fn try_set_provider(caller: ProcessRef, code: u32, payload: &[u8]) -> Result<()> {
    if code != IOCTL_SET_PROVIDER {
        return Err(Error::InvalidParameter);
    }
    let name = parse_name(payload)?;
    let handler = directory().resolve(name)?;
    registry().switch_to(caller, handler)
}

/// Extract the provider name from its fixed-length NUL-padded wire form.
fn parse_name(payload: &[u8]) -> Result<&str> {
    let window = &payload[..payload.len().min(PROVIDER_NAME_MAX)];
    let nul = window
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::InvalidParameter)?;
    core::str::from_utf8(&window[..nul]).map_err(|_| Error::InvalidParameter)
}

/// Global provider directory
static GLOBAL_DIRECTORY: Once<ProviderDirectory> = Once::new();

/// Initialize the global provider directory.
pub fn init_directory() {
    GLOBAL_DIRECTORY.call_once(ProviderDirectory::new);
}

/// Get the global provider directory.
pub fn directory() -> &'static ProviderDirectory {
    GLOBAL_DIRECTORY
        .get()
        .expect("provider directory not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_provider_ids() {
        let directory = ProviderDirectory::new();
        assert_eq!(directory.register_provider("Triton"), Ok(0));
        assert_eq!(directory.register_provider("Nereid"), Ok(1));
        assert_eq!(directory.resolve("Triton"), Ok(0));
        assert_eq!(directory.resolve("Nereid"), Ok(1));
        assert_eq!(directory.resolve("Larissa"), Err(Error::NotFound));
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let directory = ProviderDirectory::new();
        directory.register_provider("Triton").unwrap();
        assert_eq!(
            directory.register_provider("Triton"),
            Err(Error::AlreadyRegistered)
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_directory_capacity() {
        let directory = ProviderDirectory::new();
        for i in 0..MAX_PROVIDERS {
            let mut name = String::from("provider-");
            name.push((b'a' + i as u8) as char);
            directory.register_provider(&name).unwrap();
        }
        assert_eq!(
            directory.register_provider("overflow"),
            Err(Error::InsufficientResources)
        );
    }

    #[test]
    fn test_name_validation() {
        let directory = ProviderDirectory::new();
        assert_eq!(directory.register_provider(""), Err(Error::InvalidParameter));
        let long = "x".repeat(PROVIDER_NAME_MAX);
        assert_eq!(
            directory.register_provider(&long),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn test_parse_name() {
        let mut payload = [0u8; PROVIDER_NAME_MAX];
        payload[..6].copy_from_slice(b"Triton");
        assert_eq!(parse_name(&payload), Ok("Triton"));

        // No NUL inside the window
        let unterminated = [b'x'; PROVIDER_NAME_MAX];
        assert_eq!(parse_name(&unterminated), Err(Error::InvalidParameter));

        let not_utf8 = [0xff, 0xfe, 0x00, 0x00];
        assert_eq!(parse_name(&not_utf8), Err(Error::InvalidParameter));
    }
}
