//! Proteus API - Shared ABI and interface types for the Proteus pico
//! personality host.
//!
//! This crate is the common vocabulary between the kernel-resident handler
//! registry and the user-space bootstrap loader. It carries no behavior of
//! its own beyond encoding and validation.
//!
//! # Architecture
//!
//! - **Error**: status codes returned by registry and device operations,
//!   plus their stable mapping to raw negative codes for the ioctl boundary
//! - **Process**: the opaque process reference, handler identifiers, and the
//!   per-process handler state record
//! - **Abi**: control-device constants (path, device number, ioctl encoding)
//!   and capacity ceilings

#![no_std]

pub mod abi;
pub mod error;
pub mod process;

// Re-export commonly used types
pub use crate::error::{Error, Result};
pub use crate::process::{HANDLER_NONE, HandlerId, HandlerState, ParentRecord, ProcessRef};
