// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tessel Pixbuf: 8-bit pixel buffers and byte colors.
//!
//! - [`ByteRgba`]: a 32-bit color with saturating arithmetic, blending and
//!   conversion to and from packed integers, floats and HTML hex strings.
//!   [`palette`] names a handful of common colors.
//! - [`Pixbuf`]: an owned greyscale, RGB or RGBA image with per-pixel access,
//!   clipped blitting, cropping, vertical flipping and RGBA conversion.
//!
//! Images are stored bottom row first, the convention of OpenGL textures.
//!
//! # Example
//!
//! ```rust
//! use tessel_pixbuf::{ByteRgba, ColorFormat, Pixbuf, palette};
//!
//! let mut tile = Pixbuf::new(2, 2, ColorFormat::Rgba);
//! tile.fill(palette::MEDIUM_BLUE);
//!
//! let mut atlas = Pixbuf::new(8, 8, ColorFormat::Rgba);
//! atlas.blit_from(3, 4, &tile).unwrap();
//! assert_eq!(atlas.read_pixel(4, 5), palette::MEDIUM_BLUE);
//! assert_eq!(atlas.read_pixel(0, 0), ByteRgba::default());
//! assert_eq!(atlas.read_pixel(4, 5).to_rgb_hex(), "#0080FF");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod error;
mod pixbuf;

pub use color::{ByteRgba, palette};
pub use error::PixbufError;
pub use pixbuf::{ColorFormat, Pixbuf};
