// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

/// A font request: a font name at a point size.
///
/// Fonts are resolved by the renderer; this type only carries what was asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    name: Arc<str>,
    size: f32,
}

impl Font {
    /// Name of the font used when none is set.
    pub const DEFAULT_NAME: &'static str = "HelveticaNeue";

    /// Size, in points, of the font used when none is set.
    pub const DEFAULT_SIZE: f32 = 12.0;

    /// Creates a font from a name and a size in points.
    ///
    /// Returns `None` if the name is blank or the size is negative or not finite.
    pub fn new(name: &str, size: f32) -> Option<Self> {
        if name.trim().is_empty() || !size.is_finite() || size < 0.0 {
            log::debug!("rejected font {name:?} at size {size}");
            return None;
        }
        Some(Self {
            name: name.into(),
            size,
        })
    }

    /// The font name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns a copy of this font at another size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Option<Self> {
        Self::new(&self.name, size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.into(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.name, self.size)
    }
}
