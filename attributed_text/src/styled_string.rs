// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ops::Range;

use crate::{Error, MergeAttributes};

/// A maximal range of a [`StyledString`] that carries one set of attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun<A> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The attributes applied to every character of the range.
    pub attributes: A,
}

impl<A> AttributeRun<A> {
    fn new(range: Range<usize>, attributes: A) -> Self {
        Self { range, attributes }
    }
}

/// Immutable-by-convention text with attributes applied to byte ranges.
///
/// Runs are kept sorted, non-empty, non-overlapping and maximal: adjacent runs never carry equal
/// attributes. Text between runs carries no attributes. Because of this normal form, two styled
/// strings compare equal exactly when their text and the attributes of every character are equal.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledString<A> {
    text: String,
    runs: Vec<AttributeRun<A>>,
}

impl<A> Default for StyledString<A> {
    fn default() -> Self {
        Self {
            text: String::new(),
            runs: Vec::new(),
        }
    }
}

impl<A> StyledString<A> {
    /// Creates a styled string with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte range covering the whole text.
    pub fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }

    /// Iterate over the attribute runs in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = &AttributeRun<A>> {
        self.runs.iter()
    }

    /// Returns the number of attribute runs.
    pub fn runs_len(&self) -> usize {
        self.runs.len()
    }

    /// Returns the attributes of the character starting at byte `index`, if it has any.
    pub fn attributes_at(&self, index: usize) -> Option<&A> {
        self.runs
            .binary_search_by(|run| {
                if run.range.end <= index {
                    Ordering::Less
                } else if run.range.start > index {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|ix| &self.runs[ix].attributes)
    }

    /// Decomposes this string into its text and runs.
    pub fn into_parts(self) -> (String, Vec<AttributeRun<A>>) {
        (self.text, self.runs)
    }

    /// Appends plain text.
    ///
    /// When the last run reaches the end of the text, it grows to cover the appended text (the
    /// new characters inherit the trailing attributes). Otherwise the appended text carries no
    /// attributes.
    pub fn push_str(&mut self, text: &str) {
        let old_len = self.text.len();
        self.text.push_str(text);
        if let Some(last) = self.runs.last_mut() {
            if last.range.end == old_len {
                last.range.end = self.text.len();
            }
        }
    }
}

impl<A: Clone + PartialEq> StyledString<A> {
    /// Creates a styled string whose whole text carries `attributes`.
    ///
    /// An empty text carries no runs.
    pub fn with_attributes(text: impl Into<String>, attributes: A) -> Self {
        let mut styled = Self::new(text);
        styled.set_attributes_all(attributes);
        styled
    }

    /// Replaces the attributes of every character in `range` with `attributes`.
    ///
    /// The range is in bytes and must lie on UTF-8 character boundaries.
    pub fn set_attributes(&mut self, range: Range<usize>, attributes: A) -> Result<(), Error> {
        Error::check(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }

        let old = mem::take(&mut self.runs);
        let mut runs = Vec::with_capacity(old.len() + 2);
        let mut pending = Some(AttributeRun::new(range.clone(), attributes));
        for run in old {
            if run.range.end <= range.start {
                runs.push(run);
                continue;
            }
            if run.range.start < range.start {
                runs.push(AttributeRun::new(
                    run.range.start..range.start,
                    run.attributes.clone(),
                ));
            }
            if let Some(new_run) = pending.take() {
                runs.push(new_run);
            }
            if run.range.end > range.end {
                runs.push(AttributeRun::new(
                    run.range.start.max(range.end)..run.range.end,
                    run.attributes,
                ));
            }
        }
        runs.extend(pending);

        self.runs = runs;
        self.coalesce();
        Ok(())
    }

    /// Replaces the attributes of the whole text.
    pub fn set_attributes_all(&mut self, attributes: A) {
        self.runs.clear();
        if !self.text.is_empty() {
            self.runs.push(AttributeRun::new(0..self.text.len(), attributes));
        }
    }

    /// Appends another styled string, keeping the attribute runs of both sides.
    ///
    /// Equal runs meeting at the seam are merged into one.
    pub fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.runs.extend(other.runs.iter().map(|run| {
            AttributeRun::new(
                run.range.start + offset..run.range.end + offset,
                run.attributes.clone(),
            )
        }));
        self.coalesce();
    }

    fn coalesce(&mut self) {
        let mut runs: Vec<AttributeRun<A>> = Vec::with_capacity(self.runs.len());
        for run in mem::take(&mut self.runs) {
            if run.range.is_empty() {
                continue;
            }
            match runs.last_mut() {
                Some(last)
                    if last.range.end == run.range.start && last.attributes == run.attributes =>
                {
                    last.range.end = run.range.end;
                }
                _ => runs.push(run),
            }
        }
        self.runs = runs;
    }
}

impl<A: Clone + PartialEq + MergeAttributes> StyledString<A> {
    /// Merges `attributes` into every character of `range`.
    ///
    /// Characters that already carry attributes get a copy of them with `attributes` merged on
    /// top; characters without attributes get a copy of `attributes`.
    pub fn add_attributes(&mut self, range: Range<usize>, attributes: &A) -> Result<(), Error> {
        Error::check(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }

        let old = mem::take(&mut self.runs);
        let mut runs = Vec::with_capacity(old.len() * 2 + 2);
        // Start of the part of `range` not yet covered by a pushed run.
        let mut cursor = range.start;
        for run in old {
            if run.range.end <= range.start {
                runs.push(run);
                continue;
            }
            if run.range.start >= range.end {
                if cursor < range.end {
                    runs.push(AttributeRun::new(cursor..range.end, attributes.clone()));
                    cursor = range.end;
                }
                runs.push(run);
                continue;
            }

            let overlap = run.range.start.max(range.start)..run.range.end.min(range.end);
            if run.range.start < range.start {
                runs.push(AttributeRun::new(
                    run.range.start..range.start,
                    run.attributes.clone(),
                ));
            }
            if cursor < overlap.start {
                runs.push(AttributeRun::new(cursor..overlap.start, attributes.clone()));
            }
            let mut merged = run.attributes.clone();
            merged.merge_from(attributes);
            cursor = overlap.end;
            runs.push(AttributeRun::new(overlap, merged));
            if run.range.end > range.end {
                runs.push(AttributeRun::new(range.end..run.range.end, run.attributes));
            }
        }
        if cursor < range.end {
            runs.push(AttributeRun::new(cursor..range.end, attributes.clone()));
        }

        self.runs = runs;
        self.coalesce();
        Ok(())
    }

    /// Merges `attributes` into every character of the text.
    pub fn add_attributes_all(&mut self, attributes: &A) {
        let result = self.add_attributes(self.full_range(), attributes);
        debug_assert!(result.is_ok(), "the full range is always valid");
    }
}

impl<A> From<String> for StyledString<A> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<A> From<&str> for StyledString<A> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<A> fmt::Display for StyledString<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
