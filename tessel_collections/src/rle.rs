// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-length encoded vectors.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::error::RleError;

/// A sequence stored as runs of repeated values.
///
/// Runs are kept exactly as pushed; adjacent equal runs are not merged, so
/// two vectors compare equal only if they were built from the same runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RleVec<T> {
    runs: Vec<(T, usize)>,
    len: usize,
}

impl<T> Default for RleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RleVec<T> {
    /// Create an empty vector.
    pub const fn new() -> Self {
        Self {
            runs: Vec::new(),
            len: 0,
        }
    }

    /// A single run of `count` copies of `value`; empty if `count` is zero.
    pub fn from_elem(value: T, count: usize) -> Self {
        core::iter::once((value, count)).collect()
    }

    /// Append a single `value`.
    pub fn push(&mut self, value: T) {
        self.runs.push((value, 1));
        self.len += 1;
    }

    /// Append `count` copies of `value` as one run.
    pub fn push_run(&mut self, value: T, count: usize) -> Result<(), RleError> {
        if count == 0 {
            return Err(RleError::EmptyRun);
        }
        self.runs.push((value, count));
        self.len += count;
        Ok(())
    }

    /// Number of elements, counting repetitions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The runs as `(value, count)` pairs.
    pub fn runs(&self) -> &[(T, usize)] {
        &self.runs
    }

    /// Remove all runs.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.len = 0;
    }

    /// Iterate over the elements, repeating each value as often as its run says.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            runs: &self.runs,
            offset: 0,
            remaining: self.len,
        }
    }
}

/// Collects runs; zero-length runs are skipped.
impl<T> FromIterator<(T, usize)> for RleVec<T> {
    fn from_iter<I: IntoIterator<Item = (T, usize)>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<(T, usize)> for RleVec<T> {
    fn extend<I: IntoIterator<Item = (T, usize)>>(&mut self, iter: I) {
        for (value, count) in iter {
            if count > 0 {
                self.runs.push((value, count));
                self.len += count;
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a RleVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the elements of an [`RleVec`].
///
/// Skipping with [`Iterator::nth`] costs one step per run, not per element.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    runs: &'a [(T, usize)],
    /// Elements of `runs[0]` already yielded.
    offset: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// The next element, without advancing.
    pub fn peek(&self) -> Option<&'a T> {
        self.runs.first().map(|(value, _)| value)
    }

    /// How many more times the next element repeats, itself included.
    pub fn repetitions(&self) -> usize {
        self.runs.first().map_or(0, |(_, count)| count - self.offset)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (value, count) = self.runs.first()?;
        self.offset += 1;
        self.remaining -= 1;
        if self.offset == *count {
            self.runs = &self.runs[1..];
            self.offset = 0;
        }
        Some(value)
    }

    fn nth(&mut self, mut n: usize) -> Option<&'a T> {
        while let Some((_, count)) = self.runs.first() {
            let left = count - self.offset;
            if n < left {
                self.offset += n;
                self.remaining -= n;
                return self.next();
            }
            n -= left;
            self.remaining -= left;
            self.runs = &self.runs[1..];
            self.offset = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
