// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel buffer errors.

use thiserror::Error;

/// Errors raised when constructing or combining [`Pixbuf`](crate::Pixbuf)s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PixbufError {
    /// Only 1, 3 and 4 channels are supported.
    #[error("unsupported channel count {count}, expected 1, 3 or 4")]
    UnsupportedChannelCount {
        /// The rejected count.
        count: usize,
    },

    /// Blitting needs both images to have the same pixel layout.
    #[error("cannot blit a {from}-channel image into a {into}-channel image")]
    ChannelMismatch {
        /// Channels of the destination.
        into: usize,
        /// Channels of the source.
        from: usize,
    },

    /// Raw pixel data does not match the requested dimensions.
    #[error("expected {expected} bytes of pixel data, got {actual}")]
    DataLength {
        /// `width * height * channels`.
        expected: usize,
        /// Length of the provided buffer.
        actual: usize,
    },
}
