// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which ligatures the shaper may form.
///
/// The raw code is the integer stored in an attribute mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LigatureStyle {
    /// Only ligatures that are required for correct rendering.
    None = 0,
    /// The default ligatures of the font.
    #[default]
    Default = 1,
    /// All ligatures the font provides.
    All = 2,
}

impl LigatureStyle {
    /// Returns the raw integer code of this style.
    pub const fn to_raw(self) -> i64 {
        self as i64
    }

    /// Decodes a raw integer code.
    ///
    /// ```
    /// use text_primitives::LigatureStyle;
    ///
    /// assert_eq!(LigatureStyle::from_raw(2), Some(LigatureStyle::All));
    /// assert_eq!(LigatureStyle::from_raw(3), None);
    /// ```
    pub fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Default,
            2 => Self::All,
            _ => return None,
        })
    }

    /// Returns a slice containing all ligature styles.
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Default, Self::All]
    }
}

/// Glyph orientation for vertical text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VerticalGlyphForm {
    /// Horizontal glyphs.
    #[default]
    Horizontal = 0,
    /// Vertical glyphs.
    Vertical = 1,
}

impl VerticalGlyphForm {
    /// Returns the raw integer code of this form.
    pub const fn to_raw(self) -> i64 {
        self as i64
    }

    /// Decodes a raw integer code.
    pub fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Horizontal,
            1 => Self::Vertical,
            _ => return None,
        })
    }

    /// Returns a slice containing all glyph forms.
    pub const fn all() -> &'static [Self] {
        &[Self::Horizontal, Self::Vertical]
    }
}

/// A whole-run visual effect applied by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextEffect {
    /// An embossed, letterpress look.
    LetterPress,
}

impl TextEffect {
    /// Returns the raw name of this effect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LetterPress => "_UIKitNewLetterpressStyle",
        }
    }

    /// Decodes a raw effect name.
    ///
    /// Matching is exact; no trimming or case folding is done.
    ///
    /// ```
    /// use text_primitives::TextEffect;
    ///
    /// let effect = TextEffect::LetterPress;
    /// assert_eq!(TextEffect::from_name(effect.name()), Some(effect));
    /// assert_eq!(TextEffect::from_name("emboss"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|effect| effect.name() == name)
    }

    /// Returns a slice containing all text effects.
    pub const fn all() -> &'static [Self] {
        &[Self::LetterPress]
    }
}

impl fmt::Display for TextEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{LigatureStyle, TextEffect, VerticalGlyphForm};

    #[test]
    fn ligature_codes_are_inverse() {
        for &style in LigatureStyle::all() {
            assert_eq!(LigatureStyle::from_raw(style.to_raw()), Some(style));
        }
        assert_eq!(LigatureStyle::from_raw(-1), None);
        assert_eq!(LigatureStyle::default(), LigatureStyle::Default);
    }

    #[test]
    fn vertical_glyph_form_codes_are_inverse() {
        for &form in VerticalGlyphForm::all() {
            assert_eq!(VerticalGlyphForm::from_raw(form.to_raw()), Some(form));
        }
        assert_eq!(VerticalGlyphForm::from_raw(2), None);
    }

    #[test]
    fn text_effect_names_are_exact() {
        assert_eq!(
            TextEffect::from_name("_uikitnewletterpressstyle"),
            None,
            "names are case-sensitive"
        );
        assert_eq!(
            TextEffect::from_name(" _UIKitNewLetterpressStyle"),
            None,
            "names are not trimmed"
        );
    }
}
