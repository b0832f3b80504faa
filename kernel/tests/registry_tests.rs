//! Handler registry behavior tests

use std::sync::Arc;
use std::thread;

use proteus_api::process::{HANDLER_NONE, HandlerState, ParentRecord, ProcessRef};
use proteus_api::Error;
use proteus_kernel::HandlerRegistry;

fn p(n: usize) -> ProcessRef {
    ProcessRef::from_raw(0x10_0000 + n * 0x80)
}

#[test]
fn test_register_then_lookup() {
    let registry = HandlerRegistry::new();
    registry.register(p(0), 42).unwrap();
    assert_eq!(registry.handler_of(p(0)), Ok(42));
}

#[test]
fn test_duplicate_registration_leaves_state_intact() {
    let registry = HandlerRegistry::new();
    registry.register(p(0), 1).unwrap();
    let before = registry.state_of(p(0)).unwrap();

    assert_eq!(registry.register(p(0), 2), Err(Error::AlreadyRegistered));
    assert_eq!(registry.state_of(p(0)).unwrap(), before);
    assert_eq!(registry.handler_of(p(0)), Ok(1));
}

#[test]
fn test_unregister_removes_entry() {
    let registry = HandlerRegistry::new();
    registry.register(p(0), 1).unwrap();
    registry.unregister(p(0)).unwrap();
    assert_eq!(registry.handler_of(p(0)), Err(Error::NotFound));
    assert_eq!(registry.unregister(p(0)), Err(Error::NotFound));
}

#[test]
fn test_switch_on_unregistered_process_seeds_sentinel() {
    let registry = HandlerRegistry::new();
    registry.switch_to(p(0), 9).unwrap();

    assert_eq!(
        registry.state_of(p(0)).unwrap(),
        HandlerState {
            handler: 9,
            parent: Some(ParentRecord {
                handler: HANDLER_NONE,
                explicit: false,
            }),
        }
    );
    assert!(registry.belongs_to(p(0), 9));
    assert!(!registry.belongs_to(p(0), 10));
}

#[test]
fn test_second_switch_rejected_without_mutation() {
    let registry = HandlerRegistry::new();
    registry.register(p(0), 1).unwrap();
    registry.switch_to(p(0), 2).unwrap();
    let after_first = registry.state_of(p(0)).unwrap();

    assert_eq!(registry.switch_to(p(0), 3), Err(Error::NotImplemented));
    assert_eq!(registry.state_of(p(0)).unwrap(), after_first);
    assert_eq!(registry.handler_of(p(0)), Ok(2));
}

#[test]
fn test_belongs_to_unknown_identity_is_false() {
    let registry = HandlerRegistry::new();
    for handler in [0, 1, 7, HANDLER_NONE] {
        assert!(!registry.belongs_to(p(99), handler));
    }
}

#[test]
fn test_clear_drains_all_entries() {
    let registry = HandlerRegistry::new();
    for i in 0..16 {
        registry.register(p(i), i as u32).unwrap();
    }
    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(registry.handler_of(p(3)), Err(Error::NotFound));
}

#[test]
fn test_switch_counts_against_capacity() {
    let registry = HandlerRegistry::with_capacity(2);
    registry.register(p(0), 1).unwrap();
    registry.switch_to(p(1), 2).unwrap();
    assert_eq!(registry.switch_to(p(2), 3), Err(Error::InsufficientResources));
    // A process already tracked can still switch at capacity.
    registry.switch_to(p(0), 4).unwrap();
}

#[test]
fn test_full_handoff_scenario() {
    let registry = HandlerRegistry::new();
    let (a, b) = (p(1), p(2));

    registry.register(a, 1).unwrap();
    assert_eq!(registry.handler_of(a), Ok(1));
    assert_eq!(registry.register(a, 2), Err(Error::AlreadyRegistered));

    registry.switch_to(b, 2).unwrap();
    assert_eq!(registry.handler_of(b), Ok(2));
    assert!(registry.belongs_to(b, 2));

    assert_eq!(registry.switch_to(b, 3), Err(Error::NotImplemented));
    assert_eq!(registry.handler_of(b), Ok(2));

    registry.unregister(a).unwrap();
    assert_eq!(registry.handler_of(a), Err(Error::NotFound));
}

#[test]
fn test_concurrent_registration_loses_nothing() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 64;

    let registry = Arc::new(HandlerRegistry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let n = t * PER_THREAD + i;
                    registry.register(p(n), n as u32).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), THREADS * PER_THREAD);
    for n in 0..THREADS * PER_THREAD {
        assert_eq!(registry.handler_of(p(n)), Ok(n as u32));
    }
}

#[test]
fn test_concurrent_switches_allow_exactly_one() {
    const THREADS: usize = 8;

    let registry = Arc::new(HandlerRegistry::new());
    registry.register(p(0), 100).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.switch_to(p(0), 200 + t as u32).is_ok())
        })
        .collect();
    let wins: usize = handles
        .into_iter()
        .map(|h| h.join().unwrap() as usize)
        .sum();

    assert_eq!(wins, 1);
    let state = registry.state_of(p(0)).unwrap();
    assert_eq!(
        state.parent,
        Some(ParentRecord {
            handler: 100,
            explicit: true,
        })
    );
    assert!((200..200 + THREADS as u32).contains(&state.handler));
}
