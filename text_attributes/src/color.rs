// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Blob;

/// An sRGB color with alpha.
pub type Color = peniko::Color;

/// A color attribute: either a solid color or a tiled image.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// A single sRGB color.
    Solid(Color),
    /// An image repeated to fill the painted area.
    Pattern(PatternImage),
}

impl ColorValue {
    /// A gray level from `0.0` (black) to `1.0` (white).
    pub fn white(white: f32, alpha: f32) -> Self {
        Self::Solid(Color::new([white, white, white, alpha]))
    }

    /// A color from hue, saturation and brightness, each in `0.0..=1.0`.
    ///
    /// Hue wraps around: `0.0` and `1.0` are both red. A zero saturation gives exactly the same
    /// color as [`ColorValue::white`] with `brightness`.
    pub fn hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        if saturation == 0.0 {
            return Self::white(brightness, alpha);
        }
        let h = (hue.rem_euclid(1.0) * 6.0) % 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let b = brightness;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The sector is a whole number in 0..6."
        )]
        let (red, green, blue) = match sector as u8 {
            0 => (b, t, p),
            1 => (q, b, p),
            2 => (p, b, t),
            3 => (p, q, b),
            4 => (t, p, b),
            _ => (b, p, q),
        };
        Self::rgba(red, green, blue, alpha)
    }

    /// A color from red, green and blue components in `0.0..=1.0`.
    pub fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::Solid(Color::new([red, green, blue, alpha]))
    }

    /// A tiled image.
    pub fn pattern(image: PatternImage) -> Self {
        Self::Pattern(image)
    }

    /// Returns the solid color, if this is not a pattern.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Pattern(_) => None,
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<PatternImage> for ColorValue {
    fn from(image: PatternImage) -> Self {
        Self::Pattern(image)
    }
}

/// RGBA8 pixels used as a color pattern or attachment image.
#[derive(Clone)]
pub struct PatternImage {
    data: Blob<u8>,
    width: u32,
    height: u32,
}

impl PatternImage {
    /// Wraps shared RGBA8 pixel data.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels.
    pub fn new(data: Blob<u8>, width: u32, height: u32) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4));
        if expected != Some(data.len()) {
            log::debug!(
                "pattern image of {width}x{height} does not match {} bytes of data",
                data.len()
            );
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Takes ownership of RGBA8 pixels.
    pub fn from_rgba8(pixels: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        Self::new(Blob::from(pixels), width, height)
    }

    /// The pixel data, row by row.
    pub fn data(&self) -> &Blob<u8> {
        &self.data
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl PartialEq for PatternImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (self.data.id() == other.data.id() || self.data.data() == other.data.data())
    }
}

impl fmt::Debug for PatternImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternImage")
            .field("data", &self.data.id())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ColorValue, PatternImage};

    fn assert_close(value: &ColorValue, expected: [f32; 4]) {
        let color = value.as_solid().unwrap();
        for (got, want) in color.components.iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "{color:?} != {expected:?}");
        }
    }

    #[test]
    fn hsb_primaries() {
        assert_eq!(ColorValue::hsb(0.0, 1.0, 1.0, 1.0), ColorValue::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(ColorValue::hsb(1.0, 1.0, 1.0, 1.0), ColorValue::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(
            ColorValue::hsb(1.0 / 3.0, 1.0, 1.0, 1.0),
            ColorValue::rgba(0.0, 1.0, 0.0, 1.0)
        );
        assert_eq!(
            ColorValue::hsb(2.0 / 3.0, 1.0, 1.0, 0.5),
            ColorValue::rgba(0.0, 0.0, 1.0, 0.5)
        );
    }

    #[test]
    fn hsb_secondaries_and_shades() {
        assert_close(&ColorValue::hsb(1.0 / 6.0, 1.0, 1.0, 1.0), [1.0, 1.0, 0.0, 1.0]);
        assert_close(&ColorValue::hsb(0.5, 1.0, 0.5, 1.0), [0.0, 0.5, 0.5, 1.0]);
        assert_close(&ColorValue::hsb(5.0 / 6.0, 0.5, 1.0, 1.0), [1.0, 0.5, 1.0, 1.0]);
        assert_close(&ColorValue::hsb(-0.25, 1.0, 1.0, 1.0), [0.5, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn hsb_grays() {
        assert_eq!(ColorValue::hsb(0.3, 0.0, 0.2, 1.0), ColorValue::white(0.2, 1.0));
        assert_eq!(ColorValue::hsb(0.0, 0.0, 0.5, 0.4), ColorValue::rgba(0.5, 0.5, 0.5, 0.4));
        assert_eq!(ColorValue::hsb(0.7, 0.8, 0.0, 1.0), ColorValue::white(0.0, 1.0));
    }

    #[test]
    fn white_is_gray() {
        assert_eq!(
            ColorValue::white(0.2, 1.0),
            ColorValue::rgba(0.2, 0.2, 0.2, 1.0)
        );
        assert_eq!(
            ColorValue::from(Color::new([0.1, 0.2, 0.3, 0.4])),
            ColorValue::rgba(0.1, 0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn pattern_size_must_match() {
        assert!(PatternImage::from_rgba8(vec![0; 16], 2, 2).is_some());
        assert!(PatternImage::from_rgba8(vec![0; 15], 2, 2).is_none());
        assert!(PatternImage::from_rgba8(vec![], 0, 5).is_some());
    }

    #[test]
    fn patterns_compare_by_content() {
        let a = PatternImage::from_rgba8(vec![7; 4], 1, 1).unwrap();
        let b = PatternImage::from_rgba8(vec![7; 4], 1, 1).unwrap();
        let c = PatternImage::from_rgba8(vec![8; 4], 1, 1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ColorValue::pattern(a.clone()).as_solid(), None);
    }
}
