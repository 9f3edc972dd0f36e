// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Component kind registry.
//!
//! Kinds register a factory under their constant type name; the registry
//! rejects duplicate names at registration time so a collision surfaces as a
//! configuration error, not a runtime fault. Instantiation dispatches by
//! name over the registered set.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::component::Component;
use crate::image::ImageComponent;

/// Factory producing a fresh component instance of one kind.
///
/// The factory (not the registry) stamps the instance's serial id, so every
/// construction path — registry-driven or direct — yields a fresh identity.
pub type ComponentFactory = Box<dyn Fn() -> Box<dyn Component> + Send + Sync>;

/// Errors returned by kind registration and instantiation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two kinds attempted to register the same type name.
    #[error("duplicate component type name: {0}")]
    DuplicateTypeName(&'static str),
    /// Instantiation was requested for a name no kind registered.
    #[error("unknown component type name: {0}")]
    UnknownTypeName(String),
}

/// Registry mapping kind-level type names to factories.
///
/// One registry per scene (or per application); the framework does not force
/// a global instance.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: FxHashMap<&'static str, ComponentFactory>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateTypeName`] if a kind already claimed
    /// `name`. Sibling kinds sharing a name is a programmer error; the first
    /// registration wins and the collision is reported to the caller.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: ComponentFactory,
    ) -> Result<(), RegistryError> {
        if self.factories.contains_key(name) {
            return Err(RegistryError::DuplicateTypeName(name));
        }
        self.factories.insert(name, factory);
        tracing::debug!(kind = name, "registered component kind");
        Ok(())
    }

    /// Instantiates a fresh component of the kind registered under `name`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTypeName`] when no kind registered
    /// `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Component>, RegistryError> {
        let Some(factory) = self.factories.get(name) else {
            return Err(RegistryError::UnknownTypeName(name.to_owned()));
        };
        Ok(factory())
    }

    /// Returns `true` if a kind registered `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered kind names in sorted order, for deterministic tooling
    /// output.
    #[must_use]
    pub fn kind_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Registers the kinds shipped with this crate.
///
/// # Errors
/// Forwards [`RegistryError::DuplicateTypeName`] if a built-in name was
/// already claimed.
pub fn register_builtin_kinds(registry: &mut ComponentRegistry) -> Result<(), RegistryError> {
    registry.register(
        ImageComponent::TYPE_NAME,
        Box::new(|| Box::new(ImageComponent::new())),
    )
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_type_name_is_rejected() {
        let mut registry = ComponentRegistry::new();
        register_builtin_kinds(&mut registry).unwrap();
        let err = register_builtin_kinds(&mut registry).unwrap_err();
        match err {
            RegistryError::DuplicateTypeName(name) => assert_eq!(name, "CImage"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_name_is_reported() {
        let registry = ComponentRegistry::new();
        let err = registry.instantiate("CMissing").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownTypeName(ref n) if n == "CMissing"));
    }

    #[test]
    fn kind_names_are_sorted() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("CZed", Box::new(|| Box::new(ImageComponent::new())))
            .unwrap();
        register_builtin_kinds(&mut registry).unwrap();
        assert_eq!(registry.kind_names(), vec!["CImage", "CZed"]);
    }
}
