// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessel Collections: two compact containers for dense data.
//!
//! - [`RleVec`] stores a sequence as `(value, count)` runs. Its iterator
//!   expands the runs and can report how often the current value repeats,
//!   so consumers can process whole runs at once.
//! - [`IndexMap`] maps small integer keys to values through a slot vector
//!   that doubles to fit the largest key. It suits ids handed out densely,
//!   such as glyph or texture indices.
//!
//! # Example
//!
//! ```rust
//! use tessel_collections::{IndexMap, RleVec};
//!
//! let mut scanline = RleVec::new();
//! scanline.push_run(0_u8, 6).unwrap();
//! scanline.push_run(255, 2).unwrap();
//! assert_eq!(scanline.len(), 8);
//!
//! let mut pixels = scanline.iter();
//! assert_eq!(pixels.nth(6), Some(&255));
//! assert_eq!(pixels.repetitions(), 1);
//!
//! let mut glyphs = IndexMap::new();
//! glyphs.insert(65, 'A');
//! assert_eq!(glyphs.get(65), Some(&'A'));
//! assert!(glyphs.at(66).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod index_map;
mod rle;

pub use error::{IndexMapError, RleError};
pub use index_map::IndexMap;
pub use rle::{Iter as RleIter, RleVec};
