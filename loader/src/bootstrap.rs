//! The ordered hand-off steps.
//!
//! Strictly linear and single-threaded; every step blocks until its syscall
//! returns, and every failure is fatal to the caller. The step logic lives
//! here as plain functions so the tolerance rules stay testable; the
//! `loader` binary strings them together from `_start`.

use proteus_api::abi::{IOCTL_SET_PROVIDER, PROVIDER_NAME_MAX};

use crate::{EEXIST, ioctl, mknod};

/// Create the control-device node at `path`. A node that already exists is
/// success; the create is idempotent. Any other negative result is the
/// step's failure code.
pub fn create_device_node(path: *const u8, mode: usize, dev: usize) -> isize {
    let status = mknod(path, mode, dev);
    if status == -EEXIST { 0 } else { status }
}

/// Ask the kernel, through the open control device, to hand the calling
/// process off to the named provider.
pub fn request_handoff(fd: usize, name: &[u8; PROVIDER_NAME_MAX]) -> isize {
    ioctl(fd, IOCTL_SET_PROVIDER as usize, name.as_ptr() as usize)
}
