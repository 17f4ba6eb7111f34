// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `text + attributes` operators.
//!
//! Only `&str` gets these: an extra `Add` impl on `String` would stop `String + &String` from
//! coercing to the standard `String + &str`.
//!
//! Concatenation of styled strings and appending plain text to them are provided by
//! `attributed_text`.

use core::ops::Add;

use crate::{AttributeSet, StyledString};

impl Add<&AttributeSet> for &str {
    type Output = StyledString;

    fn add(self, attributes: &AttributeSet) -> StyledString {
        attributes.apply_to(self)
    }
}

impl Add<AttributeSet> for &str {
    type Output = StyledString;

    fn add(self, attributes: AttributeSet) -> StyledString {
        StyledString::with_attributes(self, attributes)
    }
}
