//! Control-device ABI: device node identity, ioctl encoding, and capacity
//! ceilings shared between the kernel registry and the bootstrap loader.

use static_assertions::{const_assert, const_assert_eq};

/// Fixed path of the control device node.
pub const DEVICE_PATH: &str = "/dev/proteus";

/// NUL-terminated form of [`DEVICE_PATH`] for raw syscalls.
pub const DEVICE_PATH_NUL: &[u8] = b"/dev/proteus\0";

/// Misc character-device major.
pub const DEVICE_MAJOR: u32 = 10;

/// Minor in the local/experimental range.
pub const DEVICE_MINOR: u32 = 243;

/// Fixed length of a provider name on the wire, NUL padding included.
pub const PROVIDER_NAME_MAX: usize = 32;

/// Upper bound on registered providers.
pub const MAX_PROVIDERS: usize = 8;

/// Upper bound on tracked processes; registration past this point reports
/// insufficient resources.
pub const MAX_TRACKED: usize = 4096;

const IOC_WRITE: u32 = 1;

/// Linux `_IOC` layout: dir in the top two bits, then size, type, number.
pub const fn ioc(dir: u32, ty: u8, nr: u8, size: u16) -> u32 {
    (dir << 30) | ((size as u32) << 16) | ((ty as u32) << 8) | nr as u32
}

/// `_IOW`: a request that writes `size` bytes of payload to the kernel.
pub const fn iow(ty: u8, nr: u8, size: u16) -> u32 {
    ioc(IOC_WRITE, ty, nr, size)
}

/// The one control request this core owns: hand the calling process off to
/// the named provider. Payload is a [`PROVIDER_NAME_MAX`]-byte NUL-padded
/// name.
pub const IOCTL_SET_PROVIDER: u32 = iow(b'p', 1, PROVIDER_NAME_MAX as u16);

/// Fixed-length NUL-padded wire form of a provider name. The name must leave
/// room for at least one NUL byte.
pub const fn provider_name(name: &str) -> [u8; PROVIDER_NAME_MAX] {
    let bytes = name.as_bytes();
    assert!(bytes.len() < PROVIDER_NAME_MAX);
    let mut out = [0u8; PROVIDER_NAME_MAX];
    let mut i = 0;
    while i < bytes.len() {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

const_assert_eq!(IOCTL_SET_PROVIDER, 0x4020_7001);
const_assert!(PROVIDER_NAME_MAX <= u16::MAX as usize);
const_assert!(MAX_PROVIDERS < HANDLER_NONE_GUARD);

// The sentinel must never collide with an assignable provider id.
const HANDLER_NONE_GUARD: usize = crate::process::HANDLER_NONE as usize;
