// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Built-in image component kind.

use arbor_core::InstanceId;

use crate::component::Component;

/// Displays an image asset on its owning node.
///
/// The minimal kind: beyond the [`Component`] contract it carries only an
/// optional asset source. Decoding and drawing are the renderer's job.
#[derive(Debug)]
pub struct ImageComponent {
    id: InstanceId,
    source: Option<String>,
}

impl ImageComponent {
    /// Kind-level type name, unique among sibling kinds.
    pub const TYPE_NAME: &'static str = "CImage";

    /// Constructs an instance with a fresh serial id and no source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: InstanceId::fresh(),
            source: None,
        }
    }

    /// Constructs an instance pointing at an asset path or URL.
    #[must_use]
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            id: InstanceId::fresh(),
            source: Some(source.into()),
        }
    }

    /// Asset path or URL, when set.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Points the component at a new asset.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }
}

impl Default for ImageComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ImageComponent {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn id(&self) -> InstanceId {
        self.id
    }
}
