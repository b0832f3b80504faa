//! Syscall numbering of the Triton personality.
//!
//! After the hand-off the host kernel's numbers no longer apply; these are
//! the guest scheme's numbers, and their meaning is owned entirely by the
//! Triton provider. Note the argument order: size first, then buffer, then
//! descriptor.

use crate::syscall::{syscall1, syscall3};

pub const SYS_EXIT: usize = 0;
pub const SYS_READ: usize = 1;
pub const SYS_WRITE: usize = 2;

pub fn write(fd: usize, buf: &[u8]) -> isize {
    syscall3(SYS_WRITE, buf.len(), buf.as_ptr() as usize, fd)
}

/// Guest exit. Unlike the host's exit this may hand control back to the
/// loader, so it returns.
pub fn exit(code: i32) -> isize {
    syscall1(SYS_EXIT, code as usize)
}
