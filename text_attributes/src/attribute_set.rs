// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_text::MergeAttributes;
use hashbrown::HashMap;
use peniko::kurbo::Size;
use text_primitives::{
    LigatureStyle, LineBreakMode, TextAlignment, TextEffect, UnderlineStyle, VerticalGlyphForm,
    WritingDirection,
};
use url::Url;

use crate::{
    AttributeKey, AttributeValue, Color, ColorValue, Font, ParagraphStyle, PatternImage, Shadow,
    StyledString, TextAttachment,
};

/// The raw mapping behind an [`AttributeSet`].
pub type AttributeMap = HashMap<AttributeKey, AttributeValue>;

/// A set of text attributes, built by chaining setters.
///
/// Every set holds a [`ParagraphStyle`], starting from the default one; the paragraph fields are
/// also reachable as flat accessors such as [`set_line_height_multiple`]. Other attributes are
/// absent until set, and their getters return the documented default in that case.
///
/// Each attribute `x` has a getter `x()`, a chainable `set_x()` on `&mut self`, and a consuming
/// `with_x()`. Optional attributes are cleared by setting `None`.
///
/// Every entry is an owned value: a clone never shares state with its source.
///
/// ## Example
///
/// ```
/// use text_attributes::{AttributeKey, AttributeSet, ColorValue};
///
/// let attributes = AttributeSet::new()
///     .with_font_named("HelveticaNeue", 16.0)
///     .with_foreground_color_white(0.2, 1.0)
///     .with_line_height_multiple(1.5);
///
/// assert_eq!(attributes.font().size(), 16.0);
/// assert_eq!(attributes.foreground_color(), Some(&ColorValue::white(0.2, 1.0)));
/// assert!(attributes.contains(&AttributeKey::ParagraphStyle));
/// assert_eq!(attributes.len(), 3);
/// ```
///
/// [`set_line_height_multiple`]: AttributeSet::set_line_height_multiple
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeSet {
    attributes: AttributeMap,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! number_accessors {
    ($($(#[$doc:meta])* $key:ident: $get:ident, $set:ident;)*) => {$(
        $(#[$doc])*
        ///
        /// Defaults to `0.0`.
        pub fn $get(&self) -> f32 {
            self.decode(&AttributeKey::$key, |value| match value {
                AttributeValue::Number(number) => Some(*number),
                _ => None,
            })
            .unwrap_or_default()
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), "). `None` removes it.")]
        pub fn $set(&mut self, value: impl Into<Option<f32>>) -> &mut Self {
            self.put(AttributeKey::$key, value.into().map(AttributeValue::Number))
        }
    )*};
}

macro_rules! color_accessors {
    ($($key:ident($what:literal): $get:ident, $set:ident, $white:ident, $hsb:ident, $rgba:ident, $pattern:ident;)*) => {$(
        #[doc = concat!("The ", $what, ", if set.")]
        pub fn $get(&self) -> Option<&ColorValue> {
            self.color(&AttributeKey::$key)
        }

        #[doc = concat!("Sets the ", $what, ". `None` removes it.")]
        pub fn $set(&mut self, color: impl Into<Option<ColorValue>>) -> &mut Self {
            self.put(AttributeKey::$key, color.into().map(AttributeValue::Color))
        }

        #[doc = concat!("Sets the ", $what, " to a gray level. See [`ColorValue::white`].")]
        pub fn $white(&mut self, white: f32, alpha: f32) -> &mut Self {
            self.$set(ColorValue::white(white, alpha))
        }

        #[doc = concat!("Sets the ", $what, " from hue, saturation and brightness. See [`ColorValue::hsb`].")]
        pub fn $hsb(&mut self, hue: f32, saturation: f32, brightness: f32, alpha: f32) -> &mut Self {
            self.$set(ColorValue::hsb(hue, saturation, brightness, alpha))
        }

        #[doc = concat!("Sets the ", $what, " from RGB components. See [`ColorValue::rgba`].")]
        pub fn $rgba(&mut self, red: f32, green: f32, blue: f32, alpha: f32) -> &mut Self {
            self.$set(ColorValue::rgba(red, green, blue, alpha))
        }

        #[doc = concat!("Sets the ", $what, " to a tiled image.")]
        pub fn $pattern(&mut self, image: PatternImage) -> &mut Self {
            self.$set(ColorValue::pattern(image))
        }
    )*};
}

macro_rules! paragraph_accessors {
    ($($(#[$doc:meta])* $field:ident, $set:ident: $ty:ty;)*) => {$(
        $(#[$doc])*
        pub fn $field(&self) -> $ty {
            self.paragraph_style().$field
        }

        #[doc = concat!("Sets the paragraph style's `", stringify!($field), "`.")]
        pub fn $set(&mut self, $field: $ty) -> &mut Self {
            self.update_paragraph_style(|style| style.$field = $field)
        }
    )*};
}

impl AttributeSet {
    /// Creates a set holding only the default paragraph style.
    pub fn new() -> Self {
        let mut attributes = AttributeMap::new();
        attributes.insert(
            AttributeKey::ParagraphStyle,
            AttributeValue::ParagraphStyle(ParagraphStyle::default()),
        );
        Self { attributes }
    }

    /// The raw value stored under `key`.
    pub fn raw(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Stores a raw value, replacing any previous value for `key`.
    ///
    /// No checks are made; a value of the wrong kind makes the typed getter fall back to its
    /// default.
    pub fn set_raw(&mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> &mut Self {
        self.attributes.insert(key, value.into());
        self
    }

    /// Removes the value stored under `key` and returns it.
    ///
    /// The paragraph style cannot be removed: it is reset to the default instead.
    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        if *key == AttributeKey::ParagraphStyle {
            return self.attributes.insert(
                AttributeKey::ParagraphStyle,
                AttributeValue::ParagraphStyle(ParagraphStyle::default()),
            );
        }
        self.attributes.remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.attributes.contains_key(key)
    }

    /// The number of stored entries, including the paragraph style.
    #[expect(
        clippy::len_without_is_empty,
        reason = "An attribute set always holds a paragraph style."
    )]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Iterates over the stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.attributes.iter()
    }

    /// Borrows the raw mapping.
    pub fn mapping(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Converts this set into its raw mapping.
    pub fn into_mapping(self) -> AttributeMap {
        self.attributes
    }

    /// Creates a styled string whose whole text carries these attributes.
    pub fn apply_to(&self, text: impl Into<String>) -> StyledString {
        StyledString::with_attributes(text, self.clone())
    }

    /// The font. Defaults to [`Font::default`].
    pub fn font(&self) -> Font {
        self.decode(&AttributeKey::Font, |value| match value {
            AttributeValue::Font(font) => Some(font.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// Sets the font. `None` removes it.
    pub fn set_font(&mut self, font: impl Into<Option<Font>>) -> &mut Self {
        self.put(AttributeKey::Font, font.into().map(AttributeValue::Font))
    }

    /// Sets the font by name and size.
    ///
    /// If [`Font::new`] rejects the arguments the font is removed.
    pub fn set_font_named(&mut self, name: &str, size: f32) -> &mut Self {
        self.set_font(Font::new(name, size))
    }

    color_accessors! {
        ForegroundColor("foreground color"): foreground_color, set_foreground_color,
            set_foreground_color_white, set_foreground_color_hsb, set_foreground_color_rgba,
            set_foreground_color_pattern;
        BackgroundColor("background color"): background_color, set_background_color,
            set_background_color_white, set_background_color_hsb, set_background_color_rgba,
            set_background_color_pattern;
        StrikethroughColor("strikethrough color"): strikethrough_color, set_strikethrough_color,
            set_strikethrough_color_white, set_strikethrough_color_hsb,
            set_strikethrough_color_rgba, set_strikethrough_color_pattern;
        UnderlineColor("underline color"): underline_color, set_underline_color,
            set_underline_color_white, set_underline_color_hsb, set_underline_color_rgba,
            set_underline_color_pattern;
        StrokeColor("stroke color"): stroke_color, set_stroke_color, set_stroke_color_white,
            set_stroke_color_hsb, set_stroke_color_rgba, set_stroke_color_pattern;
    }

    /// The ligature style. Defaults to [`LigatureStyle::Default`].
    pub fn ligature(&self) -> LigatureStyle {
        self.decode_code(&AttributeKey::Ligature, LigatureStyle::from_raw)
    }

    /// Sets the ligature style. `None` removes it.
    pub fn set_ligature(&mut self, ligature: impl Into<Option<LigatureStyle>>) -> &mut Self {
        let value = ligature.into().map(|l| AttributeValue::Integer(l.to_raw()));
        self.put(AttributeKey::Ligature, value)
    }

    number_accessors! {
        /// Extra space between characters, in points.
        Kern: kern, set_kern;
        /// Glyph outline width as a percentage of the font size.
        ///
        /// Positive values stroke only, negative values stroke and fill.
        StrokeWidth: stroke_width, set_stroke_width;
        /// Vertical offset from the baseline, in points.
        BaselineOffset: baseline_offset, set_baseline_offset;
        /// Skew applied to glyphs.
        Obliqueness: obliqueness, set_obliqueness;
        /// Log of the horizontal expansion factor applied to glyphs.
        Expansion: expansion, set_expansion;
    }

    /// The strikethrough style. Defaults to [`UnderlineStyle::NONE`].
    pub fn strikethrough_style(&self) -> UnderlineStyle {
        self.decode_code(&AttributeKey::StrikethroughStyle, UnderlineStyle::from_raw)
    }

    /// Sets the strikethrough style. `None` removes it.
    pub fn set_strikethrough_style(&mut self, style: impl Into<Option<UnderlineStyle>>) -> &mut Self {
        let value = style.into().map(|s| AttributeValue::Integer(s.to_raw()));
        self.put(AttributeKey::StrikethroughStyle, value)
    }

    /// The underline style. Defaults to [`UnderlineStyle::NONE`].
    pub fn underline_style(&self) -> UnderlineStyle {
        self.decode_code(&AttributeKey::UnderlineStyle, UnderlineStyle::from_raw)
    }

    /// Sets the underline style. `None` removes it.
    pub fn set_underline_style(&mut self, style: impl Into<Option<UnderlineStyle>>) -> &mut Self {
        let value = style.into().map(|s| AttributeValue::Integer(s.to_raw()));
        self.put(AttributeKey::UnderlineStyle, value)
    }

    /// The vertical glyph form. Defaults to [`VerticalGlyphForm::Horizontal`].
    pub fn vertical_glyph_form(&self) -> VerticalGlyphForm {
        self.decode_code(&AttributeKey::VerticalGlyphForm, VerticalGlyphForm::from_raw)
    }

    /// Sets the vertical glyph form. `None` removes it.
    pub fn set_vertical_glyph_form(
        &mut self,
        form: impl Into<Option<VerticalGlyphForm>>,
    ) -> &mut Self {
        let value = form.into().map(|f| AttributeValue::Integer(f.to_raw()));
        self.put(AttributeKey::VerticalGlyphForm, value)
    }

    /// The text effect, if set.
    pub fn text_effect(&self) -> Option<TextEffect> {
        self.decode(&AttributeKey::TextEffect, |value| match value {
            AttributeValue::Text(name) => TextEffect::from_name(name),
            _ => None,
        })
    }

    /// Sets the text effect. `None` removes it.
    pub fn set_text_effect(&mut self, effect: impl Into<Option<TextEffect>>) -> &mut Self {
        let value = effect.into().map(|e| AttributeValue::Text(e.name().into()));
        self.put(AttributeKey::TextEffect, value)
    }

    /// The shadow, if set.
    pub fn shadow(&self) -> Option<&Shadow> {
        self.decode(&AttributeKey::Shadow, |value| match value {
            AttributeValue::Shadow(shadow) => Some(shadow),
            _ => None,
        })
    }

    /// Sets the shadow. `None` removes it.
    pub fn set_shadow(&mut self, shadow: impl Into<Option<Shadow>>) -> &mut Self {
        self.put(AttributeKey::Shadow, shadow.into().map(AttributeValue::Shadow))
    }

    /// Sets the shadow from its components.
    pub fn set_shadow_with(
        &mut self,
        color: Option<Color>,
        offset: Size,
        blur_radius: f64,
    ) -> &mut Self {
        self.set_shadow(Shadow::new(color, offset, blur_radius))
    }

    /// The attachment, if set.
    pub fn attachment(&self) -> Option<&TextAttachment> {
        self.decode(&AttributeKey::Attachment, |value| match value {
            AttributeValue::Attachment(attachment) => Some(attachment),
            _ => None,
        })
    }

    /// Sets the attachment. `None` removes it.
    pub fn set_attachment(&mut self, attachment: impl Into<Option<TextAttachment>>) -> &mut Self {
        let value = attachment.into().map(AttributeValue::Attachment);
        self.put(AttributeKey::Attachment, value)
    }

    /// The link target, if set.
    ///
    /// A link stored as text is parsed as an absolute URL. Relative references such as
    /// `"docs/index.html"` have no base to resolve against, so they read as no link; store them
    /// with [`set_link_relative`](Self::set_link_relative) instead.
    pub fn link(&self) -> Option<Url> {
        self.decode(&AttributeKey::Link, |value| match value {
            AttributeValue::Url(url) => Some(url.clone()),
            AttributeValue::Text(text) => Url::parse(text).ok(),
            _ => None,
        })
    }

    /// Sets the link target. `None` removes it.
    pub fn set_link(&mut self, url: impl Into<Option<Url>>) -> &mut Self {
        self.put(AttributeKey::Link, url.into().map(AttributeValue::Url))
    }

    /// Sets the link target from an absolute URL string.
    ///
    /// If the string does not parse the link is removed.
    pub fn set_link_str(&mut self, url: &str) -> &mut Self {
        let url = Url::parse(url)
            .inspect_err(|err| log::debug!("invalid link {url:?}: {err}"))
            .ok();
        self.set_link(url)
    }

    /// Sets the link target from a URL string resolved against `base`.
    ///
    /// If the string does not resolve the link is removed.
    pub fn set_link_relative(&mut self, url: &str, base: &Url) -> &mut Self {
        let url = base
            .join(url)
            .inspect_err(|err| log::debug!("invalid link {url:?} relative to {base}: {err}"))
            .ok();
        self.set_link(url)
    }

    /// The paragraph style.
    pub fn paragraph_style(&self) -> ParagraphStyle {
        self.decode(&AttributeKey::ParagraphStyle, |value| match value {
            AttributeValue::ParagraphStyle(style) => Some(*style),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// Replaces the paragraph style.
    pub fn set_paragraph_style(&mut self, style: ParagraphStyle) -> &mut Self {
        self.set_raw(AttributeKey::ParagraphStyle, style)
    }

    paragraph_accessors! {
        /// Horizontal alignment of the paragraph's lines.
        alignment, set_alignment: TextAlignment;
        /// Indent of the first line.
        first_line_head_indent, set_first_line_head_indent: f32;
        /// Indent of lines after the first.
        head_indent, set_head_indent: f32;
        /// Trailing margin.
        tail_indent, set_tail_indent: f32;
        /// Multiplier applied to the natural line height.
        line_height_multiple, set_line_height_multiple: f32;
        /// Upper bound on line height. Zero means unbounded.
        maximum_line_height, set_maximum_line_height: f32;
        /// Lower bound on line height.
        minimum_line_height, set_minimum_line_height: f32;
        /// Extra space between lines.
        line_spacing, set_line_spacing: f32;
        /// Space after the paragraph.
        paragraph_spacing, set_paragraph_spacing: f32;
        /// Space before the paragraph.
        paragraph_spacing_before, set_paragraph_spacing_before: f32;
        /// How overflowing lines are handled.
        line_break_mode, set_line_break_mode: LineBreakMode;
        /// Base direction for bidirectional text.
        base_writing_direction, set_base_writing_direction: WritingDirection;
    }

    /// Applies `update` to the paragraph style and stores the result.
    fn update_paragraph_style(&mut self, update: impl FnOnce(&mut ParagraphStyle)) -> &mut Self {
        let mut style = self.paragraph_style();
        update(&mut style);
        self.set_paragraph_style(style)
    }

    fn put(&mut self, key: AttributeKey, value: Option<AttributeValue>) -> &mut Self {
        match value {
            Some(value) => {
                self.attributes.insert(key, value);
            }
            None => {
                self.attributes.remove(&key);
            }
        }
        self
    }

    /// Decodes the value under `key`, logging values that `decode` rejects.
    fn decode<'a, T>(
        &'a self,
        key: &AttributeKey,
        decode: impl FnOnce(&'a AttributeValue) -> Option<T>,
    ) -> Option<T> {
        let value = self.attributes.get(key)?;
        let decoded = decode(value);
        if decoded.is_none() {
            log::debug!("ignoring unusable {} value for `{key}`", value.kind_name());
        }
        decoded
    }

    fn decode_code<T: Default>(&self, key: &AttributeKey, from_raw: fn(i64) -> Option<T>) -> T {
        self.decode(key, |value| match value {
            AttributeValue::Integer(raw) => from_raw(*raw),
            _ => None,
        })
        .unwrap_or_default()
    }

    fn color(&self, key: &AttributeKey) -> Option<&ColorValue> {
        self.decode(key, |value| match value {
            AttributeValue::Color(color) => Some(color),
            _ => None,
        })
    }
}

impl MergeAttributes for AttributeSet {
    /// Copies every entry of `other` over `self`, the paragraph style included.
    fn merge_from(&mut self, other: &Self) {
        self.attributes.extend(
            other
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = hashbrown::hash_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

macro_rules! with_setters {
    ($($with:ident => $set:ident($($arg:ident: $ty:ty),*);)*) => {
        /// Consuming forms of the setters, for building a set in one expression.
        impl AttributeSet {$(
            #[doc = concat!("Consuming form of [`", stringify!($set), "`](Self::", stringify!($set), ").")]
            #[must_use]
            pub fn $with(mut self, $($arg: $ty),*) -> Self {
                self.$set($($arg),*);
                self
            }
        )*}
    };
}

with_setters! {
    with_raw => set_raw(key: AttributeKey, value: impl Into<AttributeValue>);
    with_font => set_font(font: impl Into<Option<Font>>);
    with_font_named => set_font_named(name: &str, size: f32);
    with_foreground_color => set_foreground_color(color: impl Into<Option<ColorValue>>);
    with_foreground_color_white => set_foreground_color_white(white: f32, alpha: f32);
    with_foreground_color_hsb => set_foreground_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    with_foreground_color_rgba => set_foreground_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    with_foreground_color_pattern => set_foreground_color_pattern(image: PatternImage);
    with_background_color => set_background_color(color: impl Into<Option<ColorValue>>);
    with_background_color_white => set_background_color_white(white: f32, alpha: f32);
    with_background_color_hsb => set_background_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    with_background_color_rgba => set_background_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    with_background_color_pattern => set_background_color_pattern(image: PatternImage);
    with_strikethrough_color => set_strikethrough_color(color: impl Into<Option<ColorValue>>);
    with_strikethrough_color_white => set_strikethrough_color_white(white: f32, alpha: f32);
    with_strikethrough_color_hsb => set_strikethrough_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    with_strikethrough_color_rgba => set_strikethrough_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    with_strikethrough_color_pattern => set_strikethrough_color_pattern(image: PatternImage);
    with_underline_color => set_underline_color(color: impl Into<Option<ColorValue>>);
    with_underline_color_white => set_underline_color_white(white: f32, alpha: f32);
    with_underline_color_hsb => set_underline_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    with_underline_color_rgba => set_underline_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    with_underline_color_pattern => set_underline_color_pattern(image: PatternImage);
    with_stroke_color => set_stroke_color(color: impl Into<Option<ColorValue>>);
    with_stroke_color_white => set_stroke_color_white(white: f32, alpha: f32);
    with_stroke_color_hsb => set_stroke_color_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32);
    with_stroke_color_rgba => set_stroke_color_rgba(red: f32, green: f32, blue: f32, alpha: f32);
    with_stroke_color_pattern => set_stroke_color_pattern(image: PatternImage);
    with_ligature => set_ligature(ligature: impl Into<Option<LigatureStyle>>);
    with_kern => set_kern(value: impl Into<Option<f32>>);
    with_stroke_width => set_stroke_width(value: impl Into<Option<f32>>);
    with_baseline_offset => set_baseline_offset(value: impl Into<Option<f32>>);
    with_obliqueness => set_obliqueness(value: impl Into<Option<f32>>);
    with_expansion => set_expansion(value: impl Into<Option<f32>>);
    with_strikethrough_style => set_strikethrough_style(style: impl Into<Option<UnderlineStyle>>);
    with_underline_style => set_underline_style(style: impl Into<Option<UnderlineStyle>>);
    with_vertical_glyph_form => set_vertical_glyph_form(form: impl Into<Option<VerticalGlyphForm>>);
    with_text_effect => set_text_effect(effect: impl Into<Option<TextEffect>>);
    with_shadow => set_shadow(shadow: impl Into<Option<Shadow>>);
    with_shadow_with => set_shadow_with(color: Option<Color>, offset: Size, blur_radius: f64);
    with_attachment => set_attachment(attachment: impl Into<Option<TextAttachment>>);
    with_link => set_link(url: impl Into<Option<Url>>);
    with_link_str => set_link_str(url: &str);
    with_link_relative => set_link_relative(url: &str, base: &Url);
    with_paragraph_style => set_paragraph_style(style: ParagraphStyle);
    with_alignment => set_alignment(alignment: TextAlignment);
    with_first_line_head_indent => set_first_line_head_indent(indent: f32);
    with_head_indent => set_head_indent(indent: f32);
    with_tail_indent => set_tail_indent(indent: f32);
    with_line_height_multiple => set_line_height_multiple(multiple: f32);
    with_maximum_line_height => set_maximum_line_height(height: f32);
    with_minimum_line_height => set_minimum_line_height(height: f32);
    with_line_spacing => set_line_spacing(spacing: f32);
    with_paragraph_spacing => set_paragraph_spacing(spacing: f32);
    with_paragraph_spacing_before => set_paragraph_spacing_before(spacing: f32);
    with_line_break_mode => set_line_break_mode(mode: LineBreakMode);
    with_base_writing_direction => set_base_writing_direction(direction: WritingDirection);
}
