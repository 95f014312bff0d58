//! Squared Euclidean RGB distance between colors, ignoring alpha

use image::{Rgb, Rgba};
use num_traits::AsPrimitive;

/// Channel intensities of a single color
///
/// Alpha is carried along when the source had one but never takes part in
/// distance computations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    /// Red intensity
    pub red: f64,
    /// Green intensity
    pub green: f64,
    /// Blue intensity
    pub blue: f64,
    /// Optional alpha intensity
    pub alpha: Option<f64>,
}

impl Color {
    /// Create an opaque three channel color
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Create a four channel color
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Red, green and blue channels as an array
    pub const fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl<T: AsPrimitive<f64>> From<[T; 3]> for Color {
    fn from([r, g, b]: [T; 3]) -> Self {
        Self::rgb(r.as_(), g.as_(), b.as_())
    }
}

impl<T: AsPrimitive<f64>> From<[T; 4]> for Color {
    fn from([r, g, b, a]: [T; 4]) -> Self {
        Self::rgba(r.as_(), g.as_(), b.as_(), a.as_())
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Self::from(pixel.0)
    }
}

/// Squared Euclidean distance between two colors in RGB space
///
/// Skipping the square root keeps nearest-color comparisons order-preserving.
pub fn distance(c1: &Color, c2: &Color) -> f64 {
    let dr = c1.red - c2.red;
    let dg = c1.green - c2.green;
    let db = c1.blue - c2.blue;
    db.mul_add(db, dr.mul_add(dr, dg * dg))
}
