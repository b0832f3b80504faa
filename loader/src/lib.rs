//! Proteus loader - user-space bootstrap for pico containers.
//!
//! Runs as the initial process of a prepared execution context, with no
//! heap, no standard library, and no loader-provided runtime. Everything
//! here is a thin layer over raw syscalls: the trampolines in [`syscall`],
//! the host call numbers in [`nr`], the hand-off steps in [`bootstrap`],
//! and the guest numbering scheme in [`triton`].

#![no_std]

pub mod bootstrap;
pub mod nr;
pub mod syscall;
pub mod triton;

use syscall::{syscall1, syscall3};
#[cfg(not(target_arch = "aarch64"))]
use syscall::syscall2;
#[cfg(target_arch = "aarch64")]
use syscall::syscall4;
use syscall::syscall0;

pub const STDOUT: usize = 1;
pub const STDERR: usize = 2;

pub const O_RDONLY: usize = 0;

pub const S_IFREG: usize = 0o100000;
pub const S_IFCHR: usize = 0o020000;
pub const S_IRUSR: usize = 0o400;
pub const S_IRGRP: usize = 0o040;
pub const S_IROTH: usize = 0o004;

pub const EEXIST: isize = 17;

/// Kernel dev_t encoding of a major/minor pair.
pub const fn makedev(major: u32, minor: u32) -> usize {
    let major = major as u64;
    let minor = minor as u64;
    (((major & 0xffff_f000) << 32)
        | ((major & 0x0000_0fff) << 8)
        | ((minor & 0xffff_ff00) << 12)
        | (minor & 0x0000_00ff)) as usize
}

// ============================================================================
// Thin wrappers over the trampolines. Raw signed results throughout; the
// bootstrap branches on the value directly, there is no errno.
// ============================================================================

pub fn write(fd: usize, buf: &[u8]) -> isize {
    syscall3(nr::SYS_WRITE, fd, buf.as_ptr() as usize, buf.len())
}

pub fn exit(code: i32) -> ! {
    syscall1(nr::SYS_EXIT, code as usize);
    loop {}
}

pub fn getpid() -> isize {
    syscall0(nr::SYS_GETPID)
}

pub fn close(fd: usize) -> isize {
    syscall1(nr::SYS_CLOSE, fd)
}

#[cfg(not(target_arch = "aarch64"))]
pub fn open(path: *const u8, flags: usize) -> isize {
    syscall2(nr::SYS_OPEN, path as usize, flags)
}

#[cfg(target_arch = "aarch64")]
pub fn open(path: *const u8, flags: usize) -> isize {
    syscall3(nr::SYS_OPENAT, nr::AT_FDCWD as usize, path as usize, flags)
}

#[cfg(not(target_arch = "aarch64"))]
pub fn mknod(path: *const u8, mode: usize, dev: usize) -> isize {
    syscall3(nr::SYS_MKNOD, path as usize, mode, dev)
}

#[cfg(target_arch = "aarch64")]
pub fn mknod(path: *const u8, mode: usize, dev: usize) -> isize {
    syscall4(nr::SYS_MKNODAT, nr::AT_FDCWD as usize, path as usize, mode, dev)
}

pub fn chroot(path: *const u8) -> isize {
    syscall1(nr::SYS_CHROOT, path as usize)
}

pub fn chdir(path: *const u8) -> isize {
    syscall1(nr::SYS_CHDIR, path as usize)
}

pub fn ioctl(fd: usize, code: usize, arg: usize) -> isize {
    syscall3(nr::SYS_IOCTL, fd, code, arg)
}

// ============================================================================
// Fatal-step reporting. No retry, no recovery; this runs before any runtime
// exists to recover into.
// ============================================================================

/// Render `value` in decimal into `buf`, most significant digit first.
/// Returns the number of bytes written.
pub fn format_code(mut value: u32, buf: &mut [u8]) -> usize {
    let mut digits = [0u8; 10];
    let mut n = 0;
    loop {
        digits[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
        if value == 0 {
            break;
        }
    }
    let mut written = 0;
    while n > 0 && written < buf.len() {
        n -= 1;
        buf[written] = digits[n];
        written += 1;
    }
    written
}

/// Report a failed step as `message: <code>` on stderr and terminate with
/// the magnitude of the negative syscall result.
pub fn fail(message: &str, status: isize) -> ! {
    let code = status.unsigned_abs() as u32;
    let mut digits = [0u8; 10];
    let len = format_code(code, &mut digits);

    write(STDERR, message.as_bytes());
    write(STDERR, b": ");
    write(STDERR, &digits[..len]);
    write(STDERR, b"\n");
    exit(code as i32)
}
