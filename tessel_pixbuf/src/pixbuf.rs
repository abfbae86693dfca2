// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned 8-bit images.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::ByteRgba;
use crate::error::PixbufError;

/// Pixel layout of a [`Pixbuf`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// One luminance byte.
    #[default]
    Greyscale,
    /// Red, green and blue bytes.
    Rgb,
    /// Red, green, blue and alpha bytes.
    Rgba,
}

impl ColorFormat {
    /// Bytes per pixel.
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Greyscale => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// The format with `count` channels.
    pub fn from_channel_count(count: usize) -> Result<Self, PixbufError> {
        match count {
            1 => Ok(Self::Greyscale),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            _ => Err(PixbufError::UnsupportedChannelCount { count }),
        }
    }
}

/// An image stored row by row without padding, bottom row first.
///
/// Pixel `(x, y)` starts at byte `(y * width + x) * channel_count`. Pixel
/// accessors panic for coordinates outside the image; [`Pixbuf::blit_from`]
/// and [`Pixbuf::crop`] clip instead.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Pixbuf {
    data: Vec<u8>,
    width: usize,
    height: usize,
    format: ColorFormat,
}

impl core::fmt::Debug for Pixbuf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixbuf")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Pixbuf {
    /// Create a zero-filled image.
    pub fn new(width: usize, height: usize, format: ColorFormat) -> Self {
        Self {
            data: vec![0; width * height * format.channel_count()],
            width,
            height,
            format,
        }
    }

    /// Create a zero-filled image with 1, 3 or 4 channels.
    pub fn with_channels(width: usize, height: usize, channels: usize) -> Result<Self, PixbufError> {
        Ok(Self::new(width, height, ColorFormat::from_channel_count(channels)?))
    }

    /// Wrap existing pixel data laid out as described on [`Pixbuf`].
    pub fn from_bytes(
        width: usize,
        height: usize,
        format: ColorFormat,
        data: Vec<u8>,
    ) -> Result<Self, PixbufError> {
        let expected = width * height * format.channel_count();
        if data.len() != expected {
            return Err(PixbufError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel layout.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Bytes per pixel.
    pub fn channel_count(&self) -> usize {
        self.format.channel_count()
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// All pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// All pixel bytes, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give up the pixel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside a {}x{} image",
            self.width,
            self.height
        );
        (y * self.width + x) * self.channel_count()
    }

    /// The bytes of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channel_count()]
    }

    /// The bytes of pixel `(x, y)`, mutably.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let start = self.offset(x, y);
        let end = start + self.channel_count();
        &mut self.data[start..end]
    }

    /// Set every pixel to the leading channels of `color`; a greyscale image
    /// takes the red channel.
    pub fn fill(&mut self, color: ByteRgba) {
        let channels = color.to_array();
        let channels = &channels[..self.channel_count()];
        for pixel in self.data.chunks_exact_mut(channels.len()) {
            pixel.copy_from_slice(channels);
        }
    }

    /// Set pixel `(x, y)` to the leading channels of `color`.
    pub fn assign_pixel(&mut self, x: usize, y: usize, color: ByteRgba) {
        let channels = color.to_array();
        let pixel = self.pixel_mut(x, y);
        let n = pixel.len();
        pixel.copy_from_slice(&channels[..n]);
    }

    /// Pixel `(x, y)` as RGBA. RGB pixels read as opaque; a greyscale value
    /// is replicated into every channel, alpha included.
    pub fn read_pixel(&self, x: usize, y: usize) -> ByteRgba {
        match *self.pixel(x, y) {
            [r, g, b, a] => ByteRgba::new(r, g, b, a),
            [r, g, b] => ByteRgba::rgb(r, g, b),
            [grey] => ByteRgba::grey(grey),
            _ => unreachable!("pixels have 1, 3 or 4 channels"),
        }
    }

    /// Copy all of `source` so that its origin lands on `(dx, dy)`.
    pub fn blit_from(&mut self, dx: usize, dy: usize, source: &Self) -> Result<(), PixbufError> {
        self.blit_region_from(dx, dy, source, 0, 0, source.width, source.height)
    }

    /// Copy the `width` × `height` block of `source` at `(sx, sy)` to
    /// `(dx, dy)`.
    ///
    /// The block is clipped against both images. Fails if the images have
    /// different pixel layouts.
    pub fn blit_region_from(
        &mut self,
        dx: usize,
        dy: usize,
        source: &Self,
        sx: usize,
        sy: usize,
        width: usize,
        height: usize,
    ) -> Result<(), PixbufError> {
        if self.format != source.format {
            return Err(PixbufError::ChannelMismatch {
                into: self.channel_count(),
                from: source.channel_count(),
            });
        }

        self.copy_block(dx, dy, source, sx, sy, width, height);
        Ok(())
    }

    /// Clipped copy between images of the same format.
    fn copy_block(
        &mut self,
        dx: usize,
        dy: usize,
        source: &Self,
        sx: usize,
        sy: usize,
        width: usize,
        height: usize,
    ) {
        let width = width
            .min(source.width.saturating_sub(sx))
            .min(self.width.saturating_sub(dx));
        let height = height
            .min(source.height.saturating_sub(sy))
            .min(self.height.saturating_sub(dy));
        if width == 0 || height == 0 {
            return;
        }

        let row_bytes = width * self.channel_count();
        for row in 0..height {
            let from = source.offset(sx, sy + row);
            let into = self.offset(dx, dy + row);
            self.data[into..into + row_bytes].copy_from_slice(&source.data[from..from + row_bytes]);
        }
    }

    /// A copy of the `width` × `height` block at `(x, y)`.
    ///
    /// The result always has the requested size; parts outside this image
    /// stay zero.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Self {
        let mut result = Self::new(width, height, self.format);
        result.copy_block(0, 0, self, x, y, width, height);
        result
    }

    /// Mirror the image vertically.
    pub fn flip_vertical(&mut self) {
        let row_bytes = self.width * self.channel_count();
        if row_bytes == 0 {
            return;
        }
        let mut rows = self.data.chunks_exact_mut(row_bytes);
        while let (Some(low), Some(high)) = (rows.next(), rows.next_back()) {
            low.swap_with_slice(high);
        }
    }

    /// Convert to [`ColorFormat::Rgba`]; RGB gains an opaque alpha channel and
    /// greyscale is replicated into red, green and blue.
    pub fn convert_to_rgba(&mut self) {
        let data = match self.format {
            ColorFormat::Rgba => return,
            ColorFormat::Rgb => self
                .data
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect(),
            ColorFormat::Greyscale => self.data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        };
        log::debug!("converted a {}x{} {:?} image to RGBA", self.width, self.height, self.format);
        self.data = data;
        self.format = ColorFormat::Rgba;
    }
}
