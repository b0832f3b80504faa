//! Loader - the first process of a Proteus pico container.
//!
//! Starts life under the host personality, negotiates a hand-off through
//! the control device, then speaks the Triton numbering. Every step is
//! fatal on failure; there is no runtime to recover into.

#![no_std]
#![no_main]

use loader::bootstrap::{create_device_node, request_handoff};
use loader::{
    O_RDONLY, S_IFCHR, S_IRGRP, S_IROTH, S_IRUSR, STDOUT, chdir, chroot, exit, fail, makedev,
    open, triton, write,
};
use proteus_api::abi::{DEVICE_MAJOR, DEVICE_MINOR, DEVICE_PATH_NUL, PROVIDER_NAME_MAX, provider_name};

const PROVIDER: [u8; PROVIDER_NAME_MAX] = provider_name("Triton");

const ROOTFS: &[u8] = b"/rootfs/\0";
const ROOT: &[u8] = b"/\0";

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    let status = write(STDOUT, b"loader: bootstrapping the Triton container\n");
    if status < 0 {
        fail("loader: cannot write to stdout", status);
    }

    // Writing to the control device is dangerous, so the node is read-only.
    let status = create_device_node(
        DEVICE_PATH_NUL.as_ptr(),
        S_IFCHR | S_IRUSR | S_IRGRP | S_IROTH,
        makedev(DEVICE_MAJOR, DEVICE_MINOR),
    );
    if status < 0 {
        fail("loader: cannot create the control device", status);
    }

    let status = open(DEVICE_PATH_NUL.as_ptr(), O_RDONLY);
    if status < 0 {
        fail("loader: cannot open the control device", status);
    }
    let fd = status as usize;

    let status = chroot(ROOTFS.as_ptr());
    if status < 0 {
        fail("loader: cannot change root", status);
    }

    let status = chdir(ROOT.as_ptr());
    if status < 0 {
        fail("loader: cannot change directory", status);
    }

    let status = request_handoff(fd, &PROVIDER);
    if status < 0 {
        fail("loader: cannot hand off to the provider", status);
    }

    // From here on the host's syscall numbers no longer apply.
    triton::write(STDOUT, b"Hello from the Triton world!\n");
    triton::exit(0);

    // The hand-off may round-trip control back instead of terminating us.
    write(STDOUT, b"loader: container exited\n");
    exit(0)
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    exit(1)
}
