//! Status codes for registry and control-device operations.
//!
//! Every rejected operation leaves all registry state unchanged; callers
//! branch on these values, they are never fatal on the kernel side.

use core::fmt;

/// Common error type returned by registry and device operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed input (bad ioctl code, unterminated or non-UTF-8 name)
    InvalidParameter,
    /// No entry for the given process, or no provider under the given name
    NotFound,
    /// The table is at capacity and cannot hold another entry
    InsufficientResources,
    /// The process (or provider name) already has an entry
    AlreadyRegistered,
    /// A second personality switch was attempted; one hand-off per process
    /// lifetime is all the protocol supports
    NotImplemented,
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Stable negative code for the raw ioctl boundary, errno-shaped so
    /// user space can report it like any other syscall failure.
    pub const fn code(self) -> i32 {
        match self {
            Error::InvalidParameter => -22,
            Error::NotFound => -2,
            Error::InsufficientResources => -12,
            Error::AlreadyRegistered => -17,
            Error::NotImplemented => -38,
        }
    }

    /// Reverse of [`Error::code`]. Unknown codes yield `None`.
    pub const fn from_code(code: i32) -> Option<Error> {
        match code {
            -22 => Some(Error::InvalidParameter),
            -2 => Some(Error::NotFound),
            -12 => Some(Error::InsufficientResources),
            -17 => Some(Error::AlreadyRegistered),
            -38 => Some(Error::NotImplemented),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter => write!(f, "invalid parameter"),
            Error::NotFound => write!(f, "not found"),
            Error::InsufficientResources => write!(f, "insufficient resources"),
            Error::AlreadyRegistered => write!(f, "already registered"),
            Error::NotImplemented => write!(f, "not implemented"),
        }
    }
}
