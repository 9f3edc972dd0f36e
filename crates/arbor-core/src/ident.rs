// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serial instance identity.
//!
//! Every node and component in an Arbor scene is stamped with a serial id at
//! construction. Ids are opaque tokens used only for equality/distinctness;
//! "created later ⇒ larger value" holds within one process but carries no
//! meaning across process restarts and must not be persisted as an ordering.

use std::sync::atomic::{AtomicU64, Ordering};

/// Strongly typed identifier for a component instance.
///
/// # Invariants
/// - Zero (`InstanceId(0)`) is reserved as invalid. [`SerialAllocator::next`]
///   never returns it; external bindings constructing ids via
///   [`InstanceId::from_raw`] may use zero only as a sentinel.
/// - An instance's id is assigned once at construction and never changes.
///
/// The `#[repr(transparent)]` attribute keeps the wrapper layout-identical to
/// `u64` for FFI/Wasm interop.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(u64);

impl InstanceId {
    /// Constructs an `InstanceId` from a raw `u64` value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Draws a fresh id from the process-wide allocator.
    #[must_use]
    pub fn fresh() -> Self {
        process_allocator().next()
    }
}

impl core::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed identifier for a scene-graph node.
///
/// Nodes draw from the same serial allocator as components; the dedicated
/// wrapper prevents accidental mixing of node and component identifiers.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(InstanceId);

impl NodeId {
    /// Constructs a `NodeId` from a raw `u64` value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(InstanceId::from_raw(value))
    }

    /// Returns the underlying raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0.value()
    }

    /// Draws a fresh id from the process-wide allocator.
    #[must_use]
    pub fn fresh() -> Self {
        Self(InstanceId::fresh())
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic serial-id source.
///
/// The counter is owned exclusively by the allocator; callers mutate it only
/// through [`SerialAllocator::next`]. The increment is atomic so concurrent
/// callers never observe the same id — the framework's scheduling model is
/// single-threaded, but the uniqueness invariant must not silently depend on
/// that.
///
/// Exhaustion of the `u64` range is unreachable in realistic process
/// lifetimes (an allocation per nanosecond would take centuries) and is not
/// handled.
#[derive(Debug, Default)]
pub struct SerialAllocator {
    counter: AtomicU64,
}

impl SerialAllocator {
    /// Creates an allocator whose first issued id is `InstanceId(1)`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Issues a fresh id, strictly greater than every id issued before it.
    ///
    /// Infallible: there are no error paths.
    pub fn next(&self) -> InstanceId {
        // Relaxed suffices: uniqueness needs only the atomicity of the
        // read-modify-write, not ordering against other memory.
        InstanceId(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

static PROCESS_ALLOCATOR: SerialAllocator = SerialAllocator::new();

/// Returns the process-wide allocator shared by all nodes and components.
///
/// Initialized once at process start, torn down implicitly at process exit;
/// there is no explicit shutdown.
#[must_use]
pub fn process_allocator() -> &'static SerialAllocator {
    &PROCESS_ALLOCATOR
}

/// Draws the next id from the process-wide allocator.
#[must_use]
pub fn next_instance_id() -> InstanceId {
    process_allocator().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_issued_id_skips_reserved_zero() {
        let alloc = SerialAllocator::new();
        assert_eq!(alloc.next(), InstanceId::from_raw(1));
    }

    #[test]
    fn issued_ids_are_strictly_increasing() {
        let alloc = SerialAllocator::new();
        let mut prev = alloc.next();
        for _ in 0..1_000 {
            let id = alloc.next();
            assert!(id > prev, "{id} must exceed {prev}");
            prev = id;
        }
    }

    #[test]
    fn node_ids_and_instance_ids_share_one_sequence() {
        let a = InstanceId::fresh();
        let b = NodeId::fresh();
        let c = InstanceId::fresh();
        assert!(b.value() > a.value());
        assert!(c.value() > b.value());
    }
}
