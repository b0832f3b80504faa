//! Process references and per-process handler state.

/// Numeric identifier of the personality currently interpreting a process's
/// system calls.
pub type HandlerId = u32;

/// Sentinel meaning "no personality assigned yet". Seeded as the active
/// handler when a switch is requested against a process with no entry.
pub const HANDLER_NONE: HandlerId = u32::MAX;

/// Opaque, non-owning reference to a running process, used purely as a table
/// key. Equal references compare equal; otherwise the order follows the raw
/// value and means nothing to callers beyond uniqueness.
///
/// The registry never extends the referenced process's lifetime. The raw
/// value may be reused by the kernel once the process exits, so the
/// surrounding driver must unregister on process termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ProcessRef(usize);

impl ProcessRef {
    pub const fn from_raw(raw: usize) -> Self {
        ProcessRef(raw)
    }

    pub const fn as_raw(self) -> usize {
        self.0
    }
}

/// The personality a process switched away from, saved at the moment of the
/// one allowed hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRecord {
    /// Active handler at the time of the switch.
    pub handler: HandlerId,
    /// True when the saved handler came from a real prior registration,
    /// false when it is the [`HANDLER_NONE`] sentinel auto-inserted because
    /// the process had no entry when the switch arrived.
    pub explicit: bool,
}

/// Per-process record held by the handler registry.
///
/// `parent` stays `None` until exactly one switch has occurred, then stays
/// `Some` for the entry's remaining lifetime. A second switch is rejected
/// without touching the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerState {
    /// Active personality identifier.
    pub handler: HandlerId,
    /// Set by the one allowed switch, never cleared.
    pub parent: Option<ParentRecord>,
}

impl HandlerState {
    /// Fresh state for a newly registered process: no parent recorded.
    pub const fn new(handler: HandlerId) -> Self {
        HandlerState {
            handler,
            parent: None,
        }
    }

    pub const fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}
