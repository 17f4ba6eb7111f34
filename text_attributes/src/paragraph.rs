// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_primitives::{LineBreakMode, TextAlignment, WritingDirection};

/// Paragraph-level layout.
///
/// Lengths are in points. A zero `line_height_multiple` or `maximum_line_height` means no
/// constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Horizontal alignment of lines.
    pub alignment: TextAlignment,
    /// Indent of the first line from the leading margin.
    pub first_line_head_indent: f32,
    /// Indent of every other line from the leading margin.
    pub head_indent: f32,
    /// Trailing margin. Positive values are measured from the leading margin, other values from
    /// the trailing edge.
    pub tail_indent: f32,
    /// Multiplier applied to the natural line height.
    pub line_height_multiple: f32,
    /// Upper bound on line height.
    pub maximum_line_height: f32,
    /// Lower bound on line height.
    pub minimum_line_height: f32,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space after the paragraph.
    pub paragraph_spacing: f32,
    /// Space before the paragraph.
    pub paragraph_spacing_before: f32,
    /// How overflowing lines are handled.
    pub line_break_mode: LineBreakMode,
    /// Base direction for bidirectional text.
    pub base_writing_direction: WritingDirection,
}
