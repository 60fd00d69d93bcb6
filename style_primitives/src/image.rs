// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedded image handles and image descriptor resolution.

use alloc::string::String;

/// An opaque handle to an image embedded in rich text.
///
/// This crate does not load or decode image data; the handle identifies the
/// asset for whatever renderer consumes the built text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    name: String,
}

impl Image {
    /// Creates an image handle for a named asset.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The asset name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An image descriptor accepted by builder APIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSpec {
    /// A named asset to be resolved at build time.
    Source(String),
    /// An already-resolved image handle.
    Value(Image),
}

impl From<&str> for ImageSpec {
    fn from(value: &str) -> Self {
        Self::Source(value.into())
    }
}

impl From<String> for ImageSpec {
    fn from(value: String) -> Self {
        Self::Source(value)
    }
}

impl From<Image> for ImageSpec {
    fn from(value: Image) -> Self {
        Self::Value(value)
    }
}

/// Resolves an image descriptor to a concrete handle.
///
/// An empty asset name models an image that fails to load and resolves to
/// `None`; callers drop the corresponding part or attribute.
pub fn resolve_image(spec: &ImageSpec) -> Option<Image> {
    match spec {
        ImageSpec::Source(name) => {
            let name = name.trim();
            if name.is_empty() {
                None
            } else {
                Some(Image::new(name))
            }
        }
        ImageSpec::Value(image) => Some(image.clone()),
    }
}
