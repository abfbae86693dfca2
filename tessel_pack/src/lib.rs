// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessel Pack: a binary-tree rectangle packer for texture atlases.
//!
//! [`BoxPacker`] places rectangles first fit into a fixed area and never moves
//! them afterwards. Each placed rectangle is surrounded by a configurable
//! padding, which keeps bilinear filtering from bleeding between atlas
//! entries. When the area runs full it can be [enlarged](BoxPacker::enlarge)
//! in place; all earlier placements stay valid.
//!
//! # Example
//!
//! ```rust
//! use tessel_pack::{BoxPacker, PackError};
//! use tessel_math::Rect;
//!
//! let mut packer = BoxPacker::new(64, 64, 1);
//! let glyph = packer.pack(20, 30).unwrap();
//! assert_eq!(glyph, Rect::new(1, 1, 21, 31));
//!
//! // Too large for what is left: grow the atlas and retry.
//! assert!(matches!(packer.pack(60, 40), Err(PackError::Overflow { .. })));
//! packer.enlarge(64, 128).unwrap();
//! let banner = packer.pack(60, 40).unwrap();
//! assert!(!banner.intersects(&glyph));
//! ```
//!
//! Coordinates are `i32` with the y axis pointing up, matching
//! [`tessel_math::Rect`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod packer;

pub use error::PackError;
pub use packer::BoxPacker;
