// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene nodes: exclusive component ownership and event dispatch.

use arbor_core::{is_invocable, Handler, InstanceId, InvokeContext, NodeId, PropValue};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::component::Component;

/// Prefix under which event handler properties are stored.
///
/// `dispatch("activate", ..)` consults the property `"on:activate"`.
const EVENT_PROP_PREFIX: &str = "on:";

/// Errors returned by component attachment and detachment.
#[derive(Debug, Error)]
pub enum AttachError {
    /// The node already carries a component of this kind.
    #[error("node already has a component of kind: {0}")]
    DuplicateKind(&'static str),
    /// No attached component has the given instance id.
    #[error("no attached component with id: {0}")]
    UnknownComponent(InstanceId),
}

/// A node in the scene graph.
///
/// Owns its components exclusively: a component enters through
/// [`SceneNode::attach`], leaves through [`SceneNode::detach`], and is
/// dropped with the node otherwise. At most one component of each kind may
/// be attached at a time.
///
/// Properties hold arbitrary [`PropValue`]s; slots named `on:<event>` are
/// event handlers and are consulted by [`SceneNode::dispatch`].
pub struct SceneNode {
    id: NodeId,
    components: Vec<Box<dyn Component>>,
    props: FxHashMap<String, PropValue>,
}

impl SceneNode {
    /// Creates a detached node with a fresh serial id and no components.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NodeId::fresh(),
            components: Vec::new(),
            props: FxHashMap::default(),
        }
    }

    /// This node's serial identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Attaches `component`, taking ownership, and returns its instance id.
    ///
    /// Runs the component's `on_attach` hook after ownership transfers.
    ///
    /// # Errors
    /// Returns [`AttachError::DuplicateKind`] if a component of the same kind
    /// is already attached; the rejected component is dropped.
    pub fn attach(&mut self, mut component: Box<dyn Component>) -> Result<InstanceId, AttachError> {
        let kind = component.type_name();
        if self.component_by_kind(kind).is_some() {
            return Err(AttachError::DuplicateKind(kind));
        }
        let id = component.id();
        component.on_attach(self.id);
        self.components.push(component);
        tracing::debug!(node = %self.id, %id, kind, "attached component");
        Ok(id)
    }

    /// Detaches the component with instance id `id`, returning ownership to
    /// the caller.
    ///
    /// Runs the component's `on_detach` hook before ownership transfers.
    ///
    /// # Errors
    /// Returns [`AttachError::UnknownComponent`] if no attached component has
    /// that id.
    pub fn detach(&mut self, id: InstanceId) -> Result<Box<dyn Component>, AttachError> {
        let Some(index) = self.components.iter().position(|c| c.id() == id) else {
            return Err(AttachError::UnknownComponent(id));
        };
        let mut component = self.components.remove(index);
        component.on_detach(self.id);
        tracing::debug!(node = %self.id, %id, kind = component.type_name(), "detached component");
        Ok(component)
    }

    /// Returns the attached component of kind `name`, if any.
    #[must_use]
    pub fn component_by_kind(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.type_name() == name)
            .map(AsRef::as_ref)
    }

    /// Mutable access to the attached component of kind `name`, if any.
    pub fn component_by_kind_mut(&mut self, name: &str) -> Option<&mut (dyn Component + 'static)> {
        self.components
            .iter_mut()
            .find(|c| c.type_name() == name)
            .map(AsMut::as_mut)
    }

    /// Number of attached components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Sets property `name` to `value`, replacing any previous value.
    pub fn set_prop(&mut self, name: impl Into<String>, value: PropValue) {
        self.props.insert(name.into(), value);
    }

    /// Returns property `name`, if set.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Installs `handler` for `event` (stores it under `on:<event>`).
    pub fn set_handler(&mut self, event: &str, handler: Handler) {
        self.props.insert(
            format!("{EVENT_PROP_PREFIX}{event}"),
            PropValue::Handler(handler),
        );
    }

    /// Dispatches `event` to this node's handler slot.
    ///
    /// Probes the `on:<event>` property with [`is_invocable`]: a handler
    /// value is invoked with this node as the receiver and its result
    /// returned; an absent or non-invocable value is plain data and yields
    /// `None`. Never an error — capability absence is a negative answer, not
    /// a fault.
    pub fn dispatch(&self, event: &str, args: &[PropValue]) -> Option<PropValue> {
        let slot = self.props.get(&format!("{EVENT_PROP_PREFIX}{event}"))?;
        if !is_invocable(slot) {
            tracing::trace!(node = %self.id, event, "event slot holds data, not a handler");
            return None;
        }
        let handler = slot.as_handler()?;
        let ctx = InvokeContext::for_node(self.id);
        Some(handler.invoke(&ctx, args))
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SceneNode {
    fn drop(&mut self) {
        // Components do not outlive their node; give each its detach hook so
        // node-scoped resources are released in both teardown paths.
        let node = self.id;
        for component in &mut self.components {
            component.on_detach(node);
        }
    }
}

impl core::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneNode")
            .field("id", &self.id)
            .field("components", &self.components.len())
            .field("props", &self.props.len())
            .finish()
    }
}
