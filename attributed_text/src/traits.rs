// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Attribute types that can be layered on top of each other.
///
/// Used by [`StyledString::add_attributes`](crate::StyledString::add_attributes), where the added
/// attributes are merged into whatever a range already carries.
pub trait MergeAttributes {
    /// Overwrites the entries of `self` with every entry present in `other`.
    ///
    /// Entries that only `self` has are kept.
    fn merge_from(&mut self, other: &Self);
}
