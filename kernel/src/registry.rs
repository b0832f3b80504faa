//! Process handler registry and the personality switch protocol.
//!
//! One coarse lock serializes every operation. Critical sections are short
//! and never block beyond the lock itself, and the whole switch sequence
//! runs under a single acquisition, so its steps are atomic as a group.

use alloc::collections::BTreeMap;

use proteus_api::abi::MAX_TRACKED;
use proteus_api::process::{HANDLER_NONE, HandlerId, HandlerState, ParentRecord, ProcessRef};
use proteus_api::{Error, Result};
use spin::{Mutex, Once};

/// Concurrent map from process identity to handler state.
///
/// Entries are created by [`register`](HandlerRegistry::register) or seeded
/// by [`switch_to`](HandlerRegistry::switch_to), and destroyed only by
/// [`unregister`](HandlerRegistry::unregister) or [`clear`](HandlerRegistry::clear).
/// The registry performs no cleanup of its own on process exit; the
/// surrounding driver must unregister terminating processes or the table
/// grows without bound and raw keys may be reused.
pub struct HandlerRegistry {
    entries: Mutex<BTreeMap<ProcessRef, HandlerState>>,
    capacity: usize,
}

impl HandlerRegistry {
    pub const fn new() -> Self {
        Self::with_capacity(MAX_TRACKED)
    }

    /// Registry with an explicit entry ceiling. Insertions past the ceiling
    /// report [`Error::InsufficientResources`].
    pub const fn with_capacity(capacity: usize) -> Self {
        HandlerRegistry {
            entries: Mutex::new(BTreeMap::new()),
            capacity,
        }
    }

    /// Track `process` under `handler` with no parent recorded.
    ///
    /// An existing entry is left untouched and reported as
    /// [`Error::AlreadyRegistered`].
    pub fn register(&self, process: ProcessRef, handler: HandlerId) -> Result<()> {
        let mut entries = self.entries.lock();
        Self::insert(&mut entries, self.capacity, process, handler)?;
        log::debug!(
            "process {:#x} registered under handler {}",
            process.as_raw(),
            handler
        );
        Ok(())
    }

    /// Drop the entry for `process`. No effect on the process itself.
    pub fn unregister(&self, process: ProcessRef) -> Result<()> {
        let mut entries = self.entries.lock();
        match entries.remove(&process) {
            Some(state) => {
                log::debug!(
                    "process {:#x} unregistered from handler {}",
                    process.as_raw(),
                    state.handler
                );
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    /// Active handler for `process`.
    pub fn handler_of(&self, process: ProcessRef) -> Result<HandlerId> {
        let entries = self.entries.lock();
        entries
            .get(&process)
            .map(|state| state.handler)
            .ok_or(Error::NotFound)
    }

    /// Full state record for `process`, parent handler included.
    pub fn state_of(&self, process: ProcessRef) -> Result<HandlerState> {
        let entries = self.entries.lock();
        entries.get(&process).copied().ok_or(Error::NotFound)
    }

    /// Whether `process` is currently answering to `handler`. Unknown
    /// identities belong to no handler.
    pub fn belongs_to(&self, process: ProcessRef, handler: HandlerId) -> bool {
        let entries = self.entries.lock();
        entries
            .get(&process)
            .is_some_and(|state| state.handler == handler)
    }

    /// Hand `process` off to `new_handler`, saving the current handler as
    /// its parent. One hand-off per process lifetime:
    ///
    /// 1. A process with no entry is seeded with [`HANDLER_NONE`] first, and
    ///    the saved parent is marked as not explicitly registered.
    /// 2. A process that already carries a parent record is rejected with
    ///    [`Error::NotImplemented`], state untouched.
    /// 3. Otherwise the active handler moves into the parent record and
    ///    `new_handler` becomes active.
    pub fn switch_to(&self, process: ProcessRef, new_handler: HandlerId) -> Result<()> {
        let mut entries = self.entries.lock();

        let explicit = entries.contains_key(&process);
        if !explicit {
            Self::insert(&mut entries, self.capacity, process, HANDLER_NONE)?;
        }

        let state = entries
            .get_mut(&process)
            .ok_or(Error::InsufficientResources)?;

        if state.has_parent() {
            log::warn!(
                "process {:#x} requested a second hand-off to handler {}, rejecting",
                process.as_raw(),
                new_handler
            );
            return Err(Error::NotImplemented);
        }

        state.parent = Some(ParentRecord {
            handler: state.handler,
            explicit,
        });
        state.handler = new_handler;

        log::debug!(
            "process {:#x} switched to handler {} (parent {})",
            process.as_raw(),
            new_handler,
            state.parent.map(|p| p.handler).unwrap_or(HANDLER_NONE)
        );
        Ok(())
    }

    /// Drain every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let drained = entries.len();
        entries.clear();
        log::debug!("handler registry drained ({} entries)", drained);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn insert(
        entries: &mut BTreeMap<ProcessRef, HandlerState>,
        capacity: usize,
        process: ProcessRef,
        handler: HandlerId,
    ) -> Result<()> {
        if entries.contains_key(&process) {
            return Err(Error::AlreadyRegistered);
        }
        if entries.len() >= capacity {
            log::warn!(
                "handler registry at capacity ({}), rejecting process {:#x}",
                capacity,
                process.as_raw()
            );
            return Err(Error::InsufficientResources);
        }
        entries.insert(process, HandlerState::new(handler));
        Ok(())
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global handler registry
static GLOBAL_REGISTRY: Once<HandlerRegistry> = Once::new();

/// Initialize the global handler registry.
pub fn init_registry() {
    GLOBAL_REGISTRY.call_once(HandlerRegistry::new);
}

/// Get the global handler registry.
pub fn registry() -> &'static HandlerRegistry {
    GLOBAL_REGISTRY.get().expect("handler registry not initialized")
}
