//! Host kernel syscall numbers for the handful of calls the bootstrap
//! needs, per architecture.
//!
//! aarch64 never had the legacy `open`/`mknod` entry points; the wrappers
//! route through the `*at` forms there.

#[cfg(target_arch = "x86_64")]
mod arch {
    pub const SYS_WRITE: usize = 1;
    pub const SYS_OPEN: usize = 2;
    pub const SYS_CLOSE: usize = 3;
    pub const SYS_IOCTL: usize = 16;
    pub const SYS_GETPID: usize = 39;
    pub const SYS_EXIT: usize = 60;
    pub const SYS_CHDIR: usize = 80;
    pub const SYS_MKNOD: usize = 133;
    pub const SYS_CHROOT: usize = 161;
}

#[cfg(any(target_arch = "x86", target_arch = "arm"))]
mod arch {
    pub const SYS_EXIT: usize = 1;
    pub const SYS_WRITE: usize = 4;
    pub const SYS_OPEN: usize = 5;
    pub const SYS_CLOSE: usize = 6;
    pub const SYS_CHDIR: usize = 12;
    pub const SYS_MKNOD: usize = 14;
    pub const SYS_GETPID: usize = 20;
    pub const SYS_IOCTL: usize = 54;
    pub const SYS_CHROOT: usize = 61;
}

#[cfg(target_arch = "aarch64")]
mod arch {
    pub const SYS_IOCTL: usize = 29;
    pub const SYS_MKNODAT: usize = 33;
    pub const SYS_CHDIR: usize = 49;
    pub const SYS_CHROOT: usize = 51;
    pub const SYS_OPENAT: usize = 56;
    pub const SYS_CLOSE: usize = 57;
    pub const SYS_WRITE: usize = 64;
    pub const SYS_EXIT: usize = 93;
    pub const SYS_GETPID: usize = 172;
}

pub use arch::*;

pub const AT_FDCWD: isize = -100;
