//! Control-device dispatch tests.
//!
//! These exercise the global registry and provider directory, so the whole
//! flow lives in one test to keep the shared state deterministic.

use proteus_api::abi::{IOCTL_SET_PROVIDER, PROVIDER_NAME_MAX, provider_name};
use proteus_api::process::ProcessRef;
use proteus_api::Error;
use proteus_kernel::{directory, registry, set_provider};

#[test]
fn test_set_provider_flow() {
    proteus_kernel::init();
    let triton = directory().register_provider("Triton").unwrap();
    directory().register_provider("Nereid").unwrap();

    let caller = ProcessRef::from_raw(0xbeef_0000);
    let name = provider_name("Triton");

    // Wrong ioctl code is invalid-parameter, no switch happens.
    let bad_code = set_provider(caller, IOCTL_SET_PROVIDER + 1, &name);
    assert_eq!(bad_code, Error::InvalidParameter.code() as isize);
    assert_eq!(registry().handler_of(caller), Err(Error::NotFound));

    // Unterminated name payload is rejected.
    let unterminated = [b'x'; PROVIDER_NAME_MAX];
    assert_eq!(
        set_provider(caller, IOCTL_SET_PROVIDER, &unterminated),
        Error::InvalidParameter.code() as isize
    );

    // Unknown provider names resolve to nothing.
    assert_eq!(
        set_provider(caller, IOCTL_SET_PROVIDER, &provider_name("Larissa")),
        Error::NotFound.code() as isize
    );

    // Happy path: the caller ends up under the named provider's handler.
    assert_eq!(set_provider(caller, IOCTL_SET_PROVIDER, &name), 0);
    assert!(registry().belongs_to(caller, triton));
    let state = registry().state_of(caller).unwrap();
    assert!(state.has_parent());

    // The protocol allows exactly one hand-off per process.
    assert_eq!(
        set_provider(caller, IOCTL_SET_PROVIDER, &provider_name("Nereid")),
        Error::NotImplemented.code() as isize
    );
    assert!(registry().belongs_to(caller, triton));

    proteus_kernel::shutdown();
    assert!(registry().is_empty());
    assert!(directory().is_empty());
}
