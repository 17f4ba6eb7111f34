// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use peniko::Blob;
use peniko::kurbo::Rect;

use crate::PatternImage;

/// An inline object embedded in text, such as an image or a file.
///
/// The attachment is laid out like a single glyph occupying `bounds`.
#[derive(Clone, Default)]
pub struct TextAttachment {
    /// Raw file contents, if any.
    pub contents: Option<Blob<u8>>,
    /// Type identifier of `contents` (for example a MIME type).
    pub file_type: Option<Arc<str>>,
    /// Image drawn for the attachment.
    pub image: Option<PatternImage>,
    /// Layout bounds relative to the baseline origin. An empty rectangle means the image size.
    pub bounds: Rect,
}

impl TextAttachment {
    /// Creates an attachment holding file contents of the given type.
    pub fn with_contents(contents: Blob<u8>, file_type: &str) -> Self {
        Self {
            contents: Some(contents),
            file_type: Some(file_type.into()),
            ..Self::default()
        }
    }

    /// Creates an attachment that draws `image`.
    pub fn with_image(image: PatternImage) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Sets the layout bounds.
    #[must_use]
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

impl PartialEq for TextAttachment {
    fn eq(&self, other: &Self) -> bool {
        let contents_eq = match (&self.contents, &other.contents) {
            (Some(a), Some(b)) => a.id() == b.id() || a.data() == b.data(),
            (None, None) => true,
            _ => false,
        };
        contents_eq
            && self.file_type == other.file_type
            && self.image == other.image
            && self.bounds == other.bounds
    }
}

impl fmt::Debug for TextAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextAttachment")
            .field("contents", &self.contents.as_ref().map(|blob| blob.len()))
            .field("file_type", &self.file_type)
            .field("image", &self.image)
            .field("bounds", &self.bounds)
            .finish()
    }
}
