use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::math::approx_eq;

/// Values this close below an integer still round down when packing, so
/// that unpacking and packing again is lossless.
const PACKING_TOLERANCE: f32 = 1.0e-3;

/// RGBA color with floating point channels, nominally in `[0, 1]`
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    pub const ORANGE: Self = Self::new(1.0, 0.647_058_8, 0.0, 1.0);
    pub const GRAY: Self = Self::new(0.501_960_8, 0.501_960_8, 0.501_960_8, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Unpacks `0xRRGGBBAA`
    #[inline]
    pub fn from_u32_rgba(value: u32) -> Self {
        let [r, g, b, a] = value.to_be_bytes();
        Self::from_bytes(r, g, b, a)
    }

    /// Unpacks `0xBBGGRRAA`
    #[inline]
    pub fn from_u32_bgra(value: u32) -> Self {
        let [b, g, r, a] = value.to_be_bytes();
        Self::from_bytes(r, g, b, a)
    }

    /// Unpacks `0xAARRGGBB`
    #[inline]
    pub fn from_u32_argb(value: u32) -> Self {
        let [a, r, g, b] = value.to_be_bytes();
        Self::from_bytes(r, g, b, a)
    }

    /// Packs into `0xRRGGBBAA`
    #[inline]
    pub fn to_u32_rgba(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_be_bytes([r, g, b, a])
    }

    /// Packs into `0xBBGGRRAA`
    #[inline]
    pub fn to_u32_bgra(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_be_bytes([b, g, r, a])
    }

    /// Packs into `0xAARRGGBB`
    #[inline]
    pub fn to_u32_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_be_bytes([a, r, g, b])
    }

    fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unpack = |channel: u8| f32::from(channel) / 255.0;
        Self::new(unpack(r), unpack(g), unpack(b), unpack(a))
    }

    /// Channels scaled to `[0, 255]`, rounded up
    fn to_bytes(self) -> [u8; 4] {
        let pack = |channel: f32| {
            let scaled = (channel.clamp(0.0, 1.0) * 255.0 - PACKING_TOLERANCE).ceil();
            scaled.max(0.0) as u8
        };
        [pack(self.r), pack(self.g), pack(self.b), pack(self.a)]
    }

    #[inline]
    pub fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    /// Opaque black
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r)
            && approx_eq(self.g, other.g)
            && approx_eq(self.b, other.b)
            && approx_eq(self.a, other.a)
    }
}

impl Index<usize> for Color {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("Color index out of range: {}", index),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("Color index out of range: {}", index),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Add for Color {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for Color {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

/// Channel-wise modulation
impl Mul for Color {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl Div<f32> for Color {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        debug_assert!(rhs != 0.0, "division of a color by zero");
        self * rhs.recip()
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Color {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Color {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
