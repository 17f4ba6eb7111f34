// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align lines to the left edge.
    Left,
    /// Center lines between the edges.
    Center,
    /// Align lines to the right edge.
    Right,
    /// Stretch lines so both edges are flush, except for the last line.
    Justified,
    /// Align according to the writing direction of the script.
    #[default]
    Natural,
}

/// What happens to text that does not fit on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries, unless a word is too long for the line.
    #[default]
    WordWrapping,
    /// Wrap before the first character that does not fit.
    CharWrapping,
    /// Do not wrap; overflowing text is clipped.
    Clipping,
    /// Keep the end of the line and elide the start.
    TruncatingHead,
    /// Keep the start of the line and elide the end.
    TruncatingTail,
    /// Keep both ends of the line and elide the middle.
    TruncatingMiddle,
}

impl LineBreakMode {
    /// Returns `true` if this mode elides text with an ellipsis.
    pub fn is_truncating(self) -> bool {
        matches!(
            self,
            Self::TruncatingHead | Self::TruncatingTail | Self::TruncatingMiddle
        )
    }
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WritingDirection {
    /// Use the direction of the first strong character (Unicode bidi rules P2/P3).
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}
