// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Endpoint, ErrorKind, MergeAttributes, StyledString};

#[derive(Clone, Debug, Default, PartialEq)]
struct TestAttributes {
    bold: Option<bool>,
    size: Option<u32>,
}

impl TestAttributes {
    fn bold() -> Self {
        Self {
            bold: Some(true),
            size: None,
        }
    }

    fn size(size: u32) -> Self {
        Self {
            bold: None,
            size: Some(size),
        }
    }
}

impl MergeAttributes for TestAttributes {
    fn merge_from(&mut self, other: &Self) {
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.size.is_some() {
            self.size = other.size;
        }
    }
}

fn runs<A: Clone>(styled: &StyledString<A>) -> Vec<(Range<usize>, A)> {
    styled
        .runs()
        .map(|run| (run.range.clone(), run.attributes.clone()))
        .collect()
}

#[test]
fn with_attributes_covers_whole_text() {
    let styled = StyledString::with_attributes("Hello!", TestAttributes::bold());
    assert_eq!(runs(&styled), [(0..6, TestAttributes::bold())]);
    assert_eq!(styled.attributes_at(5), Some(&TestAttributes::bold()));
    assert_eq!(styled.attributes_at(6), None);
}

#[test]
fn empty_text_has_no_runs() {
    let styled = StyledString::with_attributes("", TestAttributes::bold());
    assert!(styled.is_empty());
    assert_eq!(styled.runs_len(), 0);
}

#[test]
fn set_attributes_splits_existing_run() {
    let mut styled = StyledString::with_attributes("Hello world", TestAttributes::bold());
    styled.set_attributes(2..4, TestAttributes::size(3)).unwrap();
    assert_eq!(
        runs(&styled),
        [
            (0..2, TestAttributes::bold()),
            (2..4, TestAttributes::size(3)),
            (4..11, TestAttributes::bold()),
        ]
    );
}

#[test]
fn set_attributes_spanning_runs_and_gaps() {
    let mut styled = StyledString::<TestAttributes>::new("abcdefghij");
    styled.set_attributes(1..3, TestAttributes::bold()).unwrap();
    styled.set_attributes(6..8, TestAttributes::size(1)).unwrap();
    styled.set_attributes(2..7, TestAttributes::size(9)).unwrap();
    assert_eq!(
        runs(&styled),
        [
            (1..2, TestAttributes::bold()),
            (2..7, TestAttributes::size(9)),
            (7..8, TestAttributes::size(1)),
        ]
    );
    assert_eq!(styled.attributes_at(0), None);
    assert_eq!(styled.attributes_at(9), None);
}

#[test]
fn set_attributes_coalesces_equal_neighbors() {
    let mut styled = StyledString::<TestAttributes>::new("abcdef");
    styled.set_attributes(0..2, TestAttributes::bold()).unwrap();
    styled.set_attributes(4..6, TestAttributes::bold()).unwrap();
    styled.set_attributes(2..4, TestAttributes::bold()).unwrap();
    assert_eq!(runs(&styled), [(0..6, TestAttributes::bold())]);
    assert_eq!(
        styled,
        StyledString::with_attributes("abcdef", TestAttributes::bold())
    );
}

#[test]
fn add_attributes_merges_and_fills_gaps() {
    let mut styled = StyledString::<TestAttributes>::new("abcdefgh");
    styled.set_attributes(2..4, TestAttributes::bold()).unwrap();
    styled.add_attributes(1..6, &TestAttributes::size(4)).unwrap();

    let merged = TestAttributes {
        bold: Some(true),
        size: Some(4),
    };
    assert_eq!(
        runs(&styled),
        [
            (1..2, TestAttributes::size(4)),
            (2..4, merged),
            (4..6, TestAttributes::size(4)),
        ]
    );
}

#[test]
fn add_attributes_all_keeps_unrelated_entries() {
    let mut styled = StyledString::with_attributes("abc", TestAttributes::size(2));
    styled.add_attributes_all(&TestAttributes::bold());
    let expected = TestAttributes {
        bold: Some(true),
        size: Some(2),
    };
    assert_eq!(runs(&styled), [(0..3, expected)]);
}

#[expect(
    clippy::reversed_empty_ranges,
    reason = "We want an invalid range for testing."
)]
#[test]
fn bad_ranges_are_reported() {
    let mut styled = StyledString::<TestAttributes>::new("Hello!");

    let e = styled
        .set_attributes(4..3, TestAttributes::bold())
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidRange);
    assert!(format!("{e}").contains("start > end"));

    let e = styled
        .add_attributes(2..7, &TestAttributes::bold())
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidBounds);
    assert_eq!(e.range(), 2..7);
    assert_eq!(e.text_len(), 6);
    assert!(format!("{e}").contains("len 6"));

    assert_eq!(styled.runs_len(), 0, "failed calls must not change runs");
}

#[test]
fn ranges_must_be_on_char_boundaries() {
    // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
    let mut styled = StyledString::<TestAttributes>::new("éclair");

    let e = styled
        .set_attributes(1..3, TestAttributes::bold())
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::NotOnCharBoundary);
    assert_eq!(e.endpoint(), Some(Endpoint::Start));

    let e = styled
        .set_attributes(0..1, TestAttributes::bold())
        .unwrap_err();
    assert_eq!(e.endpoint(), Some(Endpoint::End));
    assert!(format!("{e}").contains("end index 1"));

    assert!(styled.set_attributes(0..2, TestAttributes::bold()).is_ok());
}

#[test]
fn concatenation_keeps_each_side() {
    let left = StyledString::with_attributes("ab", TestAttributes::bold());
    let right = StyledString::with_attributes("cd", TestAttributes::size(1));
    let joined = left + &right;
    assert_eq!(joined.as_str(), "abcd");
    assert_eq!(
        runs(&joined),
        [
            (0..2, TestAttributes::bold()),
            (2..4, TestAttributes::size(1)),
        ]
    );
}

#[test]
fn concatenation_merges_equal_seam() {
    let a = StyledString::with_attributes("string 1", TestAttributes::bold());
    let b = StyledString::with_attributes(" string 2", TestAttributes::bold());

    let mut appended = StyledString::new("");
    appended += &a;
    appended += &b;

    assert_eq!(a + b, appended);
    assert_eq!(appended.runs_len(), 1);
}

#[test]
fn concatenation_is_associative() {
    let a = StyledString::with_attributes("a", TestAttributes::bold());
    let b = StyledString::<TestAttributes>::new("b");
    let c = StyledString::with_attributes("c", TestAttributes::size(2));
    assert_eq!(
        (a.clone() + &b) + &c,
        a + &(b + &c),
        "grouping must not change the result"
    );
}

#[test]
fn pushed_text_inherits_trailing_run() {
    let styled = StyledString::with_attributes("ab", TestAttributes::bold()) + "cd";
    assert_eq!(runs(&styled), [(0..4, TestAttributes::bold())]);

    let mut gap = StyledString::with_attributes("ab", TestAttributes::bold());
    gap += &StyledString::new("cd");
    gap += "ef";
    assert_eq!(runs(&gap), [(0..2, TestAttributes::bold())]);
    assert_eq!(gap.attributes_at(5), None);
}
