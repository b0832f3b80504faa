//! Proteus Kernel - the kernel-resident half of the pico personality
//! hand-off.
//!
//! A single kernel hosts several interchangeable personalities ("pico
//! providers") that interpret a process's system calls. This crate tracks
//! which personality each process answers to, and lets a process switch to a
//! different one mid-execution, exactly once.
//!
//! # Architecture
//!
//! - **Registry**: concurrent process-to-handler map and the single-switch
//!   protocol
//! - **Device**: the provider name directory and the one control-device
//!   request (`set provider`) that drives a switch from user space
//!
//! The surrounding driver calls into the registry on process-creation and
//! process-exit notifications; the control device calls in when a bootstrap
//! process requests its hand-off.

#![no_std]

extern crate alloc;

pub mod device;
pub mod registry;

// Re-export commonly used items
pub use device::{ProviderDirectory, directory, set_provider};
pub use registry::{HandlerRegistry, registry};

/// Initialize the handler registry and provider directory.
pub fn init() {
    registry::init_registry();
    device::init_directory();
    log::info!("proteus kernel core initialized");
}

/// Drain the registry and the provider directory. Entries hold no resources
/// beyond their table storage; removal has no effect on the processes
/// themselves.
pub fn shutdown() {
    registry().clear();
    directory().clear();
    log::info!("proteus kernel core shut down");
}
