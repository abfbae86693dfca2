// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed scalar intervals.

use crate::scalar::{Scalar, max_t, min_t};

/// Closed interval `[left, right]`.
///
/// No ordering between the bounds is enforced; [`Interval::is_empty`] reports
/// inverted intervals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval<T> {
    /// Lower bound.
    pub left: T,
    /// Upper bound.
    pub right: T,
}

impl<T> Interval<T> {
    /// Create an interval from its bounds.
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// The same interval with the bounds exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.right, self.left)
    }
}

impl<T: Scalar> Interval<T> {
    /// `right - left`.
    pub fn length(&self) -> T {
        self.right - self.left
    }

    /// Whether `right < left`.
    pub fn is_empty(&self) -> bool {
        self.right < self.left
    }

    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: T) -> bool {
        self.left <= value && value <= self.right
    }

    /// Whether the open interiors of the two intervals overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.right > other.left && self.left < other.right
    }

    /// Clamp `value` into the interval.
    pub fn clamp(&self, value: T) -> T {
        if value < self.left {
            self.left
        } else if value > self.right {
            self.right
        } else {
            value
        }
    }

    /// Smallest interval covering both `self` and `value`.
    pub fn including(self, value: T) -> Self {
        Self::new(min_t(self.left, value), max_t(self.right, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_closed_intersection_is_open() {
        let a = Interval::new(0, 10);
        assert!(a.contains(0));
        assert!(a.contains(10));
        assert!(!a.contains(11));

        // Touching intervals do not intersect.
        assert!(!a.intersects(&Interval::new(10, 20)));
        assert!(a.intersects(&Interval::new(9, 20)));
    }

    #[test]
    fn clamp_and_grow() {
        let a = Interval::new(-1.0_f32, 1.0);
        assert_eq!(a.clamp(3.0), 1.0);
        assert_eq!(a.clamp(-3.0), -1.0);
        assert_eq!(a.clamp(0.25), 0.25);
        assert_eq!(a.including(4.0), Interval::new(-1.0, 4.0));
        assert_eq!(a.length(), 2.0);
        assert!(a.swapped().is_empty());
    }
}
