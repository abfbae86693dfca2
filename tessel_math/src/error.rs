// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for geometric operations.

use thiserror::Error;

/// Errors raised by geometric constructions that need a usable direction.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum MathError {
    /// A plane's normal is too short to be normalized.
    #[error("plane normal of length {length} is below the tolerance {epsilon}")]
    DegeneratePlane {
        /// Length of the offending normal.
        length: f64,
        /// Tolerance it was compared against.
        epsilon: f64,
    },

    /// A vector is too short to be normalized.
    #[error("vector of length {length} cannot be normalized")]
    ZeroLength {
        /// Length of the offending vector.
        length: f64,
    },
}

/// A specialized `Result` type for geometric operations.
pub type Result<T> = core::result::Result<T, MathError>;
