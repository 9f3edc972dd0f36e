// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The typed-component contract.

use core::fmt;

use arbor_core::{InstanceId, NodeId};

/// A named, identifiable unit of behavior attached to a scene node.
///
/// Contract for every concrete kind:
/// - The kind declares a constant type name, unique among sibling kinds
///   (conventionally exposed as an associated `TYPE_NAME` const that
///   [`Component::type_name`] returns). Uniqueness is enforced by
///   [`crate::ComponentRegistry`] at registration time.
/// - Each instance acquires a fresh [`InstanceId`] from the process-wide
///   allocator at construction and reports it unchanged for its whole
///   lifetime.
/// - Instances are owned exclusively by one node; a component does not
///   outlive its node and is never shared across nodes. Ownership transfer
///   happens only through [`crate::SceneNode::attach`] and
///   [`crate::SceneNode::detach`].
///
/// Lifecycle hooks default to no-ops; kinds override them when they hold
/// node-scoped resources.
pub trait Component: Send {
    /// Kind-level type name shared by all instances of this kind.
    fn type_name(&self) -> &'static str;

    /// Per-instance serial identity, stamped at construction.
    fn id(&self) -> InstanceId;

    /// Called after the component is attached to `node`.
    fn on_attach(&mut self, node: NodeId) {
        let _ = node;
    }

    /// Called before the component is detached from `node`.
    fn on_detach(&mut self, node: NodeId) {
        let _ = node;
    }
}

impl fmt::Debug for dyn Component + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type_name", &self.type_name())
            .field("id", &self.id())
            .finish()
    }
}
