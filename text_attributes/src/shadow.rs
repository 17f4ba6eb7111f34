// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Size;

use crate::Color;

/// A drop shadow drawn behind the glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color. `None` lets the renderer pick its default (black at one third opacity).
    pub color: Option<Color>,
    /// Offset of the shadow from the glyphs, in points.
    pub offset: Size,
    /// Blur radius in points. Zero gives a hard edge.
    pub blur_radius: f64,
}

impl Shadow {
    /// The offset of a default shadow.
    pub const DEFAULT_OFFSET: Size = Size::new(0.0, -3.0);

    /// Creates a shadow from its components.
    pub fn new(color: Option<Color>, offset: Size, blur_radius: f64) -> Self {
        Self {
            color,
            offset,
            blur_radius,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::new(None, Self::DEFAULT_OFFSET, 0.0)
    }
}
