// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

const KNOWN_KEYS: &[AttributeKey] = &[
    AttributeKey::Font,
    AttributeKey::ForegroundColor,
    AttributeKey::BackgroundColor,
    AttributeKey::Ligature,
    AttributeKey::Kern,
    AttributeKey::StrikethroughStyle,
    AttributeKey::StrikethroughColor,
    AttributeKey::UnderlineStyle,
    AttributeKey::UnderlineColor,
    AttributeKey::StrokeColor,
    AttributeKey::StrokeWidth,
    AttributeKey::Shadow,
    AttributeKey::TextEffect,
    AttributeKey::Attachment,
    AttributeKey::Link,
    AttributeKey::BaselineOffset,
    AttributeKey::Obliqueness,
    AttributeKey::Expansion,
    AttributeKey::VerticalGlyphForm,
    AttributeKey::ParagraphStyle,
];

/// Identifies an entry of an [`AttributeSet`](crate::AttributeSet).
///
/// The known keys cover the standard character and paragraph attributes. Anything else (for
/// example a renderer-specific extension) can be stored under [`AttributeKey::Custom`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// The font used to render the text.
    Font,
    /// Color of the glyphs.
    ForegroundColor,
    /// Color behind the text.
    BackgroundColor,
    /// Ligature style code.
    Ligature,
    /// Extra space between characters, in points.
    Kern,
    /// Strikethrough style code.
    StrikethroughStyle,
    /// Color of the strikethrough line.
    StrikethroughColor,
    /// Underline style code.
    UnderlineStyle,
    /// Color of the underline.
    UnderlineColor,
    /// Color of the glyph outline.
    StrokeColor,
    /// Width of the glyph outline, as a percentage of the font size.
    StrokeWidth,
    /// Drop shadow.
    Shadow,
    /// Named text effect.
    TextEffect,
    /// Inline attachment.
    Attachment,
    /// Link target.
    Link,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Skew applied to glyphs.
    Obliqueness,
    /// Log of the horizontal expansion factor applied to glyphs.
    Expansion,
    /// Horizontal or vertical glyph form code.
    VerticalGlyphForm,
    /// Paragraph layout. Always present in an attribute set.
    ParagraphStyle,
    /// Any key not listed above.
    Custom(Arc<str>),
}

impl AttributeKey {
    /// Returns the stable name of this key.
    pub fn name(&self) -> &str {
        match self {
            Self::Font => "font",
            Self::ForegroundColor => "foregroundColor",
            Self::BackgroundColor => "backgroundColor",
            Self::Ligature => "ligature",
            Self::Kern => "kern",
            Self::StrikethroughStyle => "strikethroughStyle",
            Self::StrikethroughColor => "strikethroughColor",
            Self::UnderlineStyle => "underlineStyle",
            Self::UnderlineColor => "underlineColor",
            Self::StrokeColor => "strokeColor",
            Self::StrokeWidth => "strokeWidth",
            Self::Shadow => "shadow",
            Self::TextEffect => "textEffect",
            Self::Attachment => "attachment",
            Self::Link => "link",
            Self::BaselineOffset => "baselineOffset",
            Self::Obliqueness => "obliqueness",
            Self::Expansion => "expansion",
            Self::VerticalGlyphForm => "verticalGlyphForm",
            Self::ParagraphStyle => "paragraphStyle",
            Self::Custom(name) => &**name,
        }
    }

    /// Looks up a key by name.
    ///
    /// Names of known keys map back to those keys; any other name yields [`AttributeKey::Custom`].
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .find(|key| key.name() == name)
            .cloned()
            .unwrap_or_else(|| Self::Custom(name.into()))
    }

    /// Returns every known key, in declaration order.
    pub fn all() -> &'static [Self] {
        KNOWN_KEYS
    }

    /// Returns `true` for [`AttributeKey::Custom`].
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for AttributeKey {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
