// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! arbor-core: identity and capability primitives for the Arbor scene graph.
//!
//! This crate carries the two primitives every layer above depends on:
//!
//! - **Instance identity** — process-unique, monotonically increasing serial
//!   ids stamped onto nodes and components at construction time
//!   ([`SerialAllocator`], [`InstanceId`], [`NodeId`]).
//! - **Invocable capability** — a closed property-value model ([`PropValue`])
//!   in which "can this value be called?" is answered by an explicit variant
//!   carrying an [`Invocable`] payload, probed via [`is_invocable`], rather
//!   than by sniffing a value's shape at the call site.
//!
//! The scene layer (component contract, kind registry, node ownership) lives
//! in `arbor-scene`.

mod ident;
mod value;

/// Identifier wrappers and the process-wide serial allocator.
pub use ident::{next_instance_id, process_allocator, InstanceId, NodeId, SerialAllocator};
/// Property values, handler payloads, and the invocable-capability probe.
pub use value::{is_invocable, Handler, Invocable, InvokeContext, PropValue};
