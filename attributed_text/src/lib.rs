// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is a Rust crate for text whose characters carry attribute values.
//!
//! A [`StyledString`] owns its text and a list of [`AttributeRun`]s. It is generic over the
//! attribute type, so any style model can be carried: a full attribute set, a single color, or an
//! application-specific wrapper.
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//!
//! ## Example
//!
//! ```
//! use attributed_text::StyledString;
//!
//! let bold = StyledString::with_attributes("bold", "b");
//! let plain = StyledString::new(" and plain");
//! let both = bold + plain;
//!
//! assert_eq!(both.as_str(), "bold and plain");
//! assert_eq!(both.attributes_at(0), Some(&"b"));
//! assert_eq!(both.attributes_at(5), None);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

extern crate alloc;

mod error;
mod ops;
mod styled_string;
mod traits;

#[cfg(test)]
mod tests;

pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::styled_string::{AttributeRun, StyledString};
pub use crate::traits::MergeAttributes;
