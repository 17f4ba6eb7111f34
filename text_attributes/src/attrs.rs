// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-attribute constructors.
//!
//! Each function here starts a fresh [`AttributeSet`] with a single attribute set, so that
//! `attrs::kern(2.0)` is the same as `AttributeSet::new().with_kern(2.0)`.
//!
//! ```
//! use text_attributes::{attrs, AttributeSet};
//!
//! let set = attrs::font_named("Menlo", 11.0).with_kern(0.5);
//! assert_eq!(set, AttributeSet::new().with_font_named("Menlo", 11.0).with_kern(0.5));
//! ```

use peniko::kurbo::Size;
use text_primitives::{
    LigatureStyle, LineBreakMode, TextAlignment, TextEffect, UnderlineStyle, VerticalGlyphForm,
    WritingDirection,
};
use url::Url;

use crate::{
    AttributeSet, Color, ColorValue, Font, ParagraphStyle, PatternImage, Shadow, TextAttachment,
};

macro_rules! shorthand {
    ($($name:ident => $with:ident($($arg:ident: $ty:ty),*);)*) => {$(
        #[doc = concat!("A new set with [`AttributeSet::", stringify!($with), "`] applied.")]
        pub fn $name($($arg: $ty),*) -> AttributeSet {
            AttributeSet::new().$with($($arg),*)
        }
    )*};
}

shorthand! {
    font => with_font(font: impl Into<Option<Font>>);
    font_named => with_font_named(name: &str, size: f32);
    foreground_color => with_foreground_color(color: impl Into<Option<ColorValue>>);
    foreground_color_white => with_foreground_color_white(white: f32, alpha: f32);
    foreground_color_hsb => with_foreground_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    foreground_color_rgba => with_foreground_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    foreground_color_pattern => with_foreground_color_pattern(image: PatternImage);
    background_color => with_background_color(color: impl Into<Option<ColorValue>>);
    background_color_white => with_background_color_white(white: f32, alpha: f32);
    background_color_hsb => with_background_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    background_color_rgba => with_background_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    background_color_pattern => with_background_color_pattern(image: PatternImage);
    strikethrough_color => with_strikethrough_color(color: impl Into<Option<ColorValue>>);
    strikethrough_color_white => with_strikethrough_color_white(white: f32, alpha: f32);
    strikethrough_color_hsb => with_strikethrough_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    strikethrough_color_rgba => with_strikethrough_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    strikethrough_color_pattern => with_strikethrough_color_pattern(image: PatternImage);
    underline_color => with_underline_color(color: impl Into<Option<ColorValue>>);
    underline_color_white => with_underline_color_white(white: f32, alpha: f32);
    underline_color_hsb => with_underline_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    underline_color_rgba => with_underline_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    underline_color_pattern => with_underline_color_pattern(image: PatternImage);
    stroke_color => with_stroke_color(color: impl Into<Option<ColorValue>>);
    stroke_color_white => with_stroke_color_white(white: f32, alpha: f32);
    stroke_color_hsb => with_stroke_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    stroke_color_rgba => with_stroke_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    stroke_color_pattern => with_stroke_color_pattern(image: PatternImage);
    ligature => with_ligature(ligature: impl Into<Option<LigatureStyle>>);
    kern => with_kern(value: impl Into<Option<f32>>);
    stroke_width => with_stroke_width(value: impl Into<Option<f32>>);
    baseline_offset => with_baseline_offset(value: impl Into<Option<f32>>);
    obliqueness => with_obliqueness(value: impl Into<Option<f32>>);
    expansion => with_expansion(value: impl Into<Option<f32>>);
    strikethrough_style => with_strikethrough_style(style: impl Into<Option<UnderlineStyle>>);
    underline_style => with_underline_style(style: impl Into<Option<UnderlineStyle>>);
    vertical_glyph_form => with_vertical_glyph_form(form: impl Into<Option<VerticalGlyphForm>>);
    text_effect => with_text_effect(effect: impl Into<Option<TextEffect>>);
    shadow => with_shadow(shadow: impl Into<Option<Shadow>>);
    shadow_with => with_shadow_with(color: Option<Color>, offset: Size, blur_radius: f64);
    attachment => with_attachment(attachment: impl Into<Option<TextAttachment>>);
    link => with_link(url: impl Into<Option<Url>>);
    link_str => with_link_str(url: &str);
    link_relative => with_link_relative(url: &str, base: &Url);
    paragraph_style => with_paragraph_style(style: ParagraphStyle);
    alignment => with_alignment(alignment: TextAlignment);
    first_line_head_indent => with_first_line_head_indent(indent: f32);
    head_indent => with_head_indent(indent: f32);
    tail_indent => with_tail_indent(indent: f32);
    line_height_multiple => with_line_height_multiple(multiple: f32);
    maximum_line_height => with_maximum_line_height(height: f32);
    minimum_line_height => with_minimum_line_height(height: f32);
    line_spacing => with_line_spacing(spacing: f32);
    paragraph_spacing => with_paragraph_spacing(spacing: f32);
    paragraph_spacing_before => with_paragraph_spacing_before(spacing: f32);
    line_break_mode => with_line_break_mode(mode: LineBreakMode);
    base_writing_direction => with_base_writing_direction(direction: WritingDirection);
}
