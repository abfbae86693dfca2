// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 32-bit RGBA colors.

use alloc::format;
use alloc::string::String;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use tessel_math::Vector4;

/// A color with one byte per channel, in RGBA order.
///
/// The default color is transparent black.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteRgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the byte range first."
)]
fn clamp_byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl ByteRgba {
    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Set every channel, alpha included, to `value`.
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// Unpack `0xRRGGBBAA`.
    pub const fn from_rgba_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::new(r, g, b, a)
    }

    /// Unpack `0xRRGGBB` as an opaque color; the top byte is ignored.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::from_rgba_u32((rgb << 8) | 0xFF)
    }

    /// Pack as `0xRRGGBBAA`.
    pub const fn to_rgba_u32(self) -> u32 {
        u32::from_be_bytes(self.to_array())
    }

    /// The channels in RGBA order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert from channels in `[0, 1]`; values outside are clamped.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float to int casts saturate; the result is clamped afterwards."
    )]
    pub fn from_float(color: Vector4<f32>) -> Self {
        let [r, g, b, a] = color.to_array().map(|c| clamp_byte((c * 255.0) as i32));
        Self::new(r, g, b, a)
    }

    /// Convert to channels in `[0, 1]`.
    pub fn to_float(self) -> Vector4<f32> {
        Vector4::from(self.to_array().map(|c| f32::from(c) / 255.0))
    }

    /// Invert every channel, alpha included.
    pub fn negate(&mut self) {
        *self = self.map(|c| 255 - c);
    }

    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        let [r, g, b, a] = self.to_array().map(f);
        Self::new(r, g, b, a)
    }

    fn zip(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let (lhs, rhs) = (self.to_array(), other.to_array());
        Self::new(f(lhs[0], rhs[0]), f(lhs[1], rhs[1]), f(lhs[2], rhs[2]), f(lhs[3], rhs[3]))
    }

    /// Blend towards `other`; `x = 0` gives `self`, `x = 255` gives `other`.
    pub fn lerp(self, other: Self, x: u8) -> Self {
        let x = i32::from(x);
        self.zip(other, |a, b| {
            let (a, b) = (i32::from(a), i32::from(b));
            clamp_byte(a + (b - a) * x / 255)
        })
    }

    /// Blend towards `other` with a weight in `[0, 1]`; the weight is
    /// quantized to a byte and clamped.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Float to int casts saturate; the weight is clamped afterwards."
    )]
    pub fn lerp_f32(self, other: Self, x: f32) -> Self {
        self.lerp(other, clamp_byte((255.0 * x) as i32))
    }

    /// Weighted squared RGB distance, `2Δr² + 4Δg² + 3Δb²`, which tracks the
    /// perceived difference better than the plain Euclidean one. Alpha is
    /// ignored.
    pub fn square_perceptual_difference(self, other: Self) -> i32 {
        let r = i32::from(self.r) - i32::from(other.r);
        let g = i32::from(self.g) - i32::from(other.g);
        let b = i32::from(self.b) - i32::from(other.b);
        2 * r * r + 4 * g * g + 3 * b * b
    }

    /// The RGB part as an HTML color, e.g. `#FF7F00`.
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for ByteRgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<ByteRgba> for [u8; 4] {
    fn from(c: ByteRgba) -> Self {
        c.to_array()
    }
}

/// Adds channel-wise, saturating at 255.
impl Add for ByteRgba {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, u8::saturating_add)
    }
}

/// Subtracts channel-wise, saturating at 0.
impl Sub for ByteRgba {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, u8::saturating_sub)
    }
}

impl AddAssign for ByteRgba {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for ByteRgba {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// A few named colors.
pub mod palette {
    use super::ByteRgba;

    /// Opaque white.
    pub const WHITE: ByteRgba = ByteRgba::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: ByteRgba = ByteRgba::rgb(0, 0, 0);
    /// Dark grey.
    pub const DARK_GREY: ByteRgba = ByteRgba::rgb(96, 96, 96);
    /// Light grey.
    pub const LIGHT_GREY: ByteRgba = ByteRgba::rgb(192, 192, 192);
    /// Medium grey.
    pub const GREY: ByteRgba = ByteRgba::rgb(128, 128, 128);
    /// Pure red.
    pub const RED: ByteRgba = ByteRgba::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: ByteRgba = ByteRgba::rgb(0, 255, 0);
    /// Yellow.
    pub const YELLOW: ByteRgba = ByteRgba::rgb(255, 255, 0);
    /// Pure blue.
    pub const BLUE: ByteRgba = ByteRgba::rgb(0, 0, 255);
    /// Light cyan.
    pub const LIGHT_CYAN: ByteRgba = ByteRgba::rgb(196, 255, 255);
    /// Medium blue.
    pub const MEDIUM_BLUE: ByteRgba = ByteRgba::rgb(0, 128, 255);
    /// Dark blue.
    pub const DARK_BLUE: ByteRgba = ByteRgba::rgb(0, 0, 128);
    /// White at half opacity.
    pub const HALF_ALPHA: ByteRgba = ByteRgba::new(255, 255, 255, 128);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_strings() {
        assert_eq!(palette::WHITE.to_rgb_hex(), "#FFFFFF");
        assert_eq!(ByteRgba::rgb(255, 127, 0).to_rgb_hex(), "#FF7F00");
        assert_eq!(palette::HALF_ALPHA.to_rgb_hex(), "#FFFFFF");
    }

    #[test]
    fn default_is_transparent_black() {
        assert_eq!(ByteRgba::default(), ByteRgba::new(0, 0, 0, 0));
        assert_eq!(ByteRgba::grey(7), ByteRgba::new(7, 7, 7, 7));
    }

    #[test]
    fn packed_integers() {
        let c = ByteRgba::from_rgba_u32(0x1122_3344);
        assert_eq!(c, ByteRgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(c.to_rgba_u32(), 0x1122_3344);
        assert_eq!(ByteRgba::from_rgb_u32(0xAB_FF_80_00), ByteRgba::rgb(0xFF, 0x80, 0x00));
    }

    #[test]
    fn arithmetic_saturates() {
        let a = ByteRgba::new(200, 10, 0, 255);
        let b = ByteRgba::new(100, 20, 5, 1);
        assert_eq!(a + b, ByteRgba::new(255, 30, 5, 255));
        assert_eq!(a - b, ByteRgba::new(100, 0, 0, 254));

        let mut c = a;
        c -= a;
        assert_eq!(c, ByteRgba::default());
        c += palette::HALF_ALPHA;
        c.negate();
        assert_eq!(c, ByteRgba::new(0, 0, 0, 127));
    }

    #[test]
    fn blending() {
        let (black, white) = (palette::BLACK, palette::WHITE);
        assert_eq!(black.lerp(white, 0), black);
        assert_eq!(black.lerp(white, 255), white);
        assert_eq!(black.lerp(white, 51), ByteRgba::new(51, 51, 51, 255));
        assert_eq!(white.lerp(black, 51), ByteRgba::new(204, 204, 204, 255));
        assert_eq!(black.lerp_f32(white, 2.0), white);
        assert_eq!(black.lerp_f32(white, -1.0), black);
    }

    #[test]
    fn float_conversion() {
        let c = ByteRgba::new(0, 51, 255, 102);
        let f = c.to_float();
        assert_eq!(f, Vector4::new(0.0, 0.2, 1.0, 0.4));
        assert_eq!(ByteRgba::from_float(Vector4::new(-1.0, 0.5, 2.0, 1.0)), ByteRgba::new(0, 127, 255, 255));
    }

    #[test]
    fn perceptual_difference_weights_green_most() {
        let base = palette::BLACK;
        let r = base.square_perceptual_difference(ByteRgba::rgb(10, 0, 0));
        let g = base.square_perceptual_difference(ByteRgba::rgb(0, 10, 0));
        let b = base.square_perceptual_difference(ByteRgba::rgb(0, 0, 10));
        assert_eq!((r, g, b), (200, 400, 300));
        assert_eq!(palette::RED.square_perceptual_difference(palette::RED), 0);
    }
}
