// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Attributes is a Rust crate for building styled-text attribute sets.
//!
//! An [`AttributeSet`] maps [`AttributeKey`]s to raw [`AttributeValue`]s, and offers typed,
//! chainable accessors for each attribute: fonts, colors, decorations, shadows, links, and the
//! fields of the [`ParagraphStyle`] every set carries. Sets are applied to text to produce a
//! [`StyledString`].
//!
//! ## Example
//!
//! ```
//! use text_attributes::{attrs, AttributeSet, StyledString};
//!
//! let body = AttributeSet::new()
//!     .with_font_named("HelveticaNeue", 16.0)
//!     .with_foreground_color_white(0.2, 1.0)
//!     .with_line_height_multiple(1.5);
//!
//! let text = "The quick brown fox" + &body;
//! let text = text + " jumps over the lazy dog";
//! assert_eq!(text.runs_len(), 1);
//!
//! let signed: StyledString = text + &(" (anonymous)" + &attrs::kern(1.0));
//! assert_eq!(signed.runs_len(), 2);
//! ```
//!
//! Unlike `text_primitives` and `attributed_text`, this crate requires the standard library.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attachment;
mod attribute_set;
mod color;
mod font;
mod key;
mod ops;
mod paragraph;
mod shadow;
mod value;

pub mod attrs;


pub use attributed_text::{AttributeRun, Error, ErrorKind, MergeAttributes};
pub use text_primitives::{
    LigatureStyle, LineBreakMode, LinePattern, LineStyle, TextAlignment, TextEffect,
    UnderlineStyle, VerticalGlyphForm, WritingDirection,
};

pub use crate::attachment::TextAttachment;
pub use crate::attribute_set::{AttributeMap, AttributeSet};
pub use crate::color::{Color, ColorValue, PatternImage};
pub use crate::font::Font;
pub use crate::key::AttributeKey;
pub use crate::paragraph::ParagraphStyle;
pub use crate::shadow::Shadow;
pub use crate::value::AttributeValue;

/// Text carrying runs of [`AttributeSet`]s.
pub type StyledString = attributed_text::StyledString<AttributeSet>;
