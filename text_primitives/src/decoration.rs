// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

const LINE_MASK: i64 = 0x00ff;
const PATTERN_MASK: i64 = 0x0700;
const BY_WORD: i64 = 0x8000;

/// The stroke of an underline or strikethrough decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// No decoration.
    #[default]
    None,
    /// A single thin line.
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}

impl LineStyle {
    const fn to_raw(self) -> i64 {
        match self {
            Self::None => 0x00,
            Self::Single => 0x01,
            Self::Thick => 0x02,
            Self::Double => 0x09,
        }
    }

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0x00 => Self::None,
            0x01 => Self::Single,
            0x02 => Self::Thick,
            0x09 => Self::Double,
            _ => return None,
        })
    }
}

/// The dash pattern of an underline or strikethrough decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LinePattern {
    /// A continuous line.
    #[default]
    Solid,
    /// A dotted line.
    Dot,
    /// A dashed line.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// Alternating dashes and pairs of dots.
    DashDotDot,
}

impl LinePattern {
    const fn to_raw(self) -> i64 {
        match self {
            Self::Solid => 0x000,
            Self::Dot => 0x100,
            Self::Dash => 0x200,
            Self::DashDot => 0x300,
            Self::DashDotDot => 0x400,
        }
    }

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0x000 => Self::Solid,
            0x100 => Self::Dot,
            0x200 => Self::Dash,
            0x300 => Self::DashDot,
            0x400 => Self::DashDotDot,
            _ => return None,
        })
    }
}

/// Style of an underline or strikethrough decoration.
///
/// The raw code packs the line style, the pattern and the "by word" flag into one integer:
/// line styles occupy the low byte, patterns bits 8–10 and "by word" bit 15.
///
/// ```
/// use text_primitives::{LinePattern, UnderlineStyle};
///
/// let style = UnderlineStyle::DOUBLE.with_pattern(LinePattern::Dash).by_word(true);
/// assert_eq!(style.to_raw(), 0x8209);
/// assert_eq!(UnderlineStyle::from_raw(0x8209), Some(style));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct UnderlineStyle {
    line: LineStyle,
    pattern: LinePattern,
    by_word: bool,
}

impl UnderlineStyle {
    /// No decoration. This is the default value.
    pub const NONE: Self = Self::new(LineStyle::None);

    /// A single solid line.
    pub const SINGLE: Self = Self::new(LineStyle::Single);

    /// A single thick solid line.
    pub const THICK: Self = Self::new(LineStyle::Thick);

    /// Two solid lines.
    pub const DOUBLE: Self = Self::new(LineStyle::Double);

    /// Creates a solid decoration drawn under whitespace too.
    pub const fn new(line: LineStyle) -> Self {
        Self {
            line,
            pattern: LinePattern::Solid,
            by_word: false,
        }
    }

    /// Returns this style with the given dash pattern.
    #[must_use]
    pub const fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Returns this style with whitespace skipped (`true`) or decorated (`false`).
    #[must_use]
    pub const fn by_word(mut self, by_word: bool) -> Self {
        self.by_word = by_word;
        self
    }

    /// The line style.
    pub const fn line(self) -> LineStyle {
        self.line
    }

    /// The dash pattern.
    pub const fn pattern(self) -> LinePattern {
        self.pattern
    }

    /// Whether whitespace between words is left undecorated.
    pub const fn is_by_word(self) -> bool {
        self.by_word
    }

    /// Returns `true` if no line is drawn.
    pub fn is_none(self) -> bool {
        self.line == LineStyle::None
    }

    /// Returns the raw integer code of this style.
    pub const fn to_raw(self) -> i64 {
        let by_word = if self.by_word { BY_WORD } else { 0 };
        self.line.to_raw() | self.pattern.to_raw() | by_word
    }

    /// Decodes a raw integer code.
    ///
    /// Returns `None` for negative codes, unknown line styles or patterns, and any bit outside
    /// the three packed fields.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw < 0 || raw & !(LINE_MASK | PATTERN_MASK | BY_WORD) != 0 {
            return None;
        }
        Some(Self {
            line: LineStyle::from_raw(raw & LINE_MASK)?,
            pattern: LinePattern::from_raw(raw & PATTERN_MASK)?,
            by_word: raw & BY_WORD != 0,
        })
    }
}
