// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing errors.

use thiserror::Error;

/// Why a [`BoxPacker`](crate::BoxPacker) request failed.
///
/// A failed request leaves the packer unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PackError {
    /// No free region can hold the requested rectangle.
    #[error("no room for a {width}x{height} rectangle")]
    Overflow {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// The packer would shrink.
    #[error("cannot resize to {width}x{height}, the packer needs at least {min_width}x{min_height}")]
    InvalidEnlarge {
        /// Requested outer width.
        width: i32,
        /// Requested outer height.
        height: i32,
        /// Current outer width.
        min_width: i32,
        /// Current outer height.
        min_height: i32,
    },
}
