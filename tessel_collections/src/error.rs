// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collection errors.

use thiserror::Error;

/// Errors raised by [`RleVec`](crate::RleVec).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RleError {
    /// A run must repeat its value at least once.
    #[error("cannot add a run without repetitions")]
    EmptyRun,
}

/// Errors raised by [`IndexMap::at`](crate::IndexMap::at).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexMapError {
    /// The key lies beyond the allocated slots.
    #[error("key {key} is past the end of the map (capacity {capacity})")]
    PastEnd {
        /// The requested key.
        key: usize,
        /// Slots allocated at the time of the lookup.
        capacity: usize,
    },

    /// The slot exists but holds no value.
    #[error("no value was inserted at key {key}")]
    Vacant {
        /// The requested key.
        key: usize,
    },
}
