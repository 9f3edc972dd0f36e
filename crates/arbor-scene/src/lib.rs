// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! arbor-scene: the typed-component layer of the Arbor scene graph.
//!
//! A scene is a graph of nodes; behavior is composed onto nodes as
//! **components**. Every concrete component kind declares a constant type
//! name unique among sibling kinds, and every instance is stamped with a
//! process-unique serial id at construction (see `arbor-core`).
//!
//! # Layering
//!
//! - [`Component`] is the contract a kind implements.
//! - [`ComponentRegistry`] maps type names to factories and enforces
//!   kind-name uniqueness at registration time.
//! - [`SceneNode`] owns component instances exclusively and drives their
//!   attach/detach lifecycle; it also dispatches events to handler-valued
//!   properties, probing callability with `arbor_core::is_invocable`.
//!
//! Rendering, input, and asset serving are external collaborators; this
//! crate defines only the composition contract they build on.

mod component;
mod image;
mod node;
mod registry;

/// Component contract and identifier re-exports.
pub use component::Component;
/// Built-in image kind.
pub use image::ImageComponent;
/// Node ownership, lifecycle, and event dispatch.
pub use node::{AttachError, SceneNode};
/// Kind registry and registration errors.
pub use registry::{register_builtin_kinds, ComponentFactory, ComponentRegistry, RegistryError};

// Identity and value primitives come from arbor-core; re-exported so scene
// consumers need a single import.
pub use arbor_core::{
    is_invocable, Handler, InstanceId, Invocable, InvokeContext, NodeId, PropValue,
};
