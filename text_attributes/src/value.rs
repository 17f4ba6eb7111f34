// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use url::Url;

use crate::{ColorValue, Font, ParagraphStyle, Shadow, TextAttachment};

/// The raw value stored under an [`AttributeKey`](crate::AttributeKey).
///
/// Enumerated attributes are stored by their raw codes (see `text_primitives`), so a mapping can
/// carry codes this crate does not know about. Typed accessors on
/// [`AttributeSet`](crate::AttributeSet) decode them.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font.
    Font(Font),
    /// A solid color or pattern.
    Color(ColorValue),
    /// A floating point number.
    Number(f32),
    /// An integer code.
    Integer(i64),
    /// A string.
    Text(Arc<str>),
    /// A URL.
    Url(Url),
    /// A drop shadow.
    Shadow(Shadow),
    /// An inline attachment.
    Attachment(TextAttachment),
    /// A paragraph style.
    ParagraphStyle(ParagraphStyle),
}

impl AttributeValue {
    /// A short name for the kind of value, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Font(_) => "font",
            Self::Color(_) => "color",
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::Url(_) => "url",
            Self::Shadow(_) => "shadow",
            Self::Attachment(_) => "attachment",
            Self::ParagraphStyle(_) => "paragraph style",
        }
    }
}

impl From<Font> for AttributeValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<ColorValue> for AttributeValue {
    fn from(value: ColorValue) -> Self {
        Self::Color(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<Url> for AttributeValue {
    fn from(value: Url) -> Self {
        Self::Url(value)
    }
}

impl From<Shadow> for AttributeValue {
    fn from(value: Shadow) -> Self {
        Self::Shadow(value)
    }
}

impl From<TextAttachment> for AttributeValue {
    fn from(value: TextAttachment) -> Self {
        Self::Attachment(value)
    }
}

impl From<ParagraphStyle> for AttributeValue {
    fn from(value: ParagraphStyle) -> Self {
        Self::ParagraphStyle(value)
    }
}
