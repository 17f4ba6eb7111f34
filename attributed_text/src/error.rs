// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error returned when a byte range does not address a valid part of a styled string.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the text length at the time
/// of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    text_len: usize,
    /// The endpoint that split a UTF-8 sequence, for [`ErrorKind::NotOnCharBoundary`].
    endpoint: Option<Endpoint>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range provided by the caller.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The length in bytes of the text at the time of the error.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Which endpoint was not on a character boundary, if that was the problem.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    fn new(kind: ErrorKind, range: &Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            start: range.start,
            end: range.end,
            text_len,
            endpoint: None,
        }
    }

    /// Checks that `range` is ordered, in bounds and on UTF-8 boundaries of `text`.
    pub(crate) fn check(text: &str, range: &Range<usize>) -> Result<(), Self> {
        let len = text.len();
        if range.start > range.end {
            return Err(Self::new(ErrorKind::InvalidRange, range, len));
        }
        if range.end > len {
            return Err(Self::new(ErrorKind::InvalidBounds, range, len));
        }
        let endpoint = if !text.is_char_boundary(range.start) {
            Endpoint::Start
        } else if !text.is_char_boundary(range.end) {
            Endpoint::End
        } else {
            return Ok(());
        };
        Err(Self {
            endpoint: Some(endpoint),
            ..Self::new(ErrorKind::NotOnCharBoundary, range, len)
        })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.text_len
            ),
            ErrorKind::NotOnCharBoundary => {
                let (which, index) = match self.endpoint {
                    Some(Endpoint::End) => ("end", self.end),
                    _ => ("start", self.start),
                };
                write!(
                    f,
                    "range {}..{}: {which} index {index} not on UTF-8 boundary",
                    self.start, self.end
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range ends past the end of the text.
    InvalidBounds,

    /// The range has `start > end`.
    InvalidRange,

    /// Either `start` or `end` falls inside a multi-byte character.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}
