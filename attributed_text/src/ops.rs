// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concatenation operators for [`StyledString`].

use core::ops::{Add, AddAssign};

use crate::StyledString;

impl<A: Clone + PartialEq> Add for StyledString<A> {
    type Output = Self;

    /// Concatenates two styled strings, keeping the runs of each side.
    fn add(mut self, rhs: Self) -> Self {
        self.append(&rhs);
        self
    }
}

impl<A: Clone + PartialEq> Add<&StyledString<A>> for StyledString<A> {
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self {
        self.append(rhs);
        self
    }
}

impl<A> Add<&str> for StyledString<A> {
    type Output = Self;

    /// Appends plain text; see [`StyledString::push_str`] for which attributes it receives.
    fn add(mut self, rhs: &str) -> Self {
        self.push_str(rhs);
        self
    }
}

impl<A: Clone + PartialEq> AddAssign<&StyledString<A>> for StyledString<A> {
    fn add_assign(&mut self, rhs: &Self) {
        self.append(rhs);
    }
}

impl<A> AddAssign<&str> for StyledString<A> {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}
