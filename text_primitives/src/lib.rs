// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental text attribute types.
//!
//! This crate is a lightweight, `no_std` vocabulary layer for attributed text. It holds the small
//! closed enumerations used by paragraph and character attributes (alignment, line breaking,
//! ligatures, decorations, …) together with their raw codes, so attribute mappings can store them
//! as plain integers or names and decode them again.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{LigatureStyle, UnderlineStyle};
//!
//! let raw = LigatureStyle::All.to_raw();
//! assert_eq!(LigatureStyle::from_raw(raw), Some(LigatureStyle::All));
//!
//! assert_eq!(UnderlineStyle::from_raw(UnderlineStyle::SINGLE.to_raw()), Some(UnderlineStyle::SINGLE));
//! ```
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
#![no_std]

mod decoration;
mod glyph;
mod text;

pub use decoration::{LinePattern, LineStyle, UnderlineStyle};
pub use glyph::{LigatureStyle, TextEffect, VerticalGlyphForm};
pub use text::{LineBreakMode, TextAlignment, WritingDirection};
