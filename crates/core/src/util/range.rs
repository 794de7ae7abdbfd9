use derive_more::Display;
use rand::{
    distributions::uniform::{SampleRange, SampleUniform, UniformSampler},
    RngCore,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    ops,
};

/// A type of value that we can create ranges of, where a range has a min and
/// max. In practice this is just our float types, but keeping it generic means
/// the range math only has to be written once.
pub trait Rangeable:
    Copy
    + Debug
    + Display
    + PartialOrd
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
    + ops::Mul<Self, Output = Self>
    + ops::Div<Self, Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl Rangeable for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

/// A range between two numeric values, inclusive on both ends. Used for each
/// axis of a [Rect](crate::Rect).
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange<T: Rangeable> {
    pub min: T,
    pub max: T,
}

impl<T: Rangeable> NumRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Get a [0,1] range for this type.
    pub fn normal_range() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Max minus min
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// The value halfway between min and max
    pub fn midpoint(&self) -> T {
        (self.min + self.max) / (T::one() + T::one())
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    /// NaN is never contained.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Create a new range with each bound pushed outward by `margin`. A
    /// negative margin shrinks the range.
    pub fn grow(&self, margin: T) -> Self {
        Self::new(self.min - margin, self.max + margin)
    }

    /// Map a value from this range to the target range. If the span of this
    /// range is zero, we can't properly map the value because we don't know
    /// where on the target range it should fall. In that case, we just always
    /// return the **minimum** of the target range.
    pub fn map_to(&self, dest_range: &Self, value: T) -> T {
        let span = self.span();
        if span > T::zero() {
            // Map down to [0,1], then map back up to the target range
            let normalized = (value - self.min) / span;
            dest_range.min + (normalized * dest_range.span())
        } else {
            // Source span is zero, so we can't do a proper mapping (which would
            // just return NaN). Arbitrarily pick the min bound on the target
            dest_range.min
        }
    }

    /// Map a value from this range to the range [0, 1]
    pub fn normalize(&self, value: T) -> T {
        self.map_to(&Self::normal_range(), value)
    }

    /// Force a value into this range. If it's already in the range, return
    /// that value. If it's outside the range, return the bound (lower or upper)
    /// that's closest to the value.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

// allow generating samples in the range
impl<T: Rangeable + SampleUniform> SampleRange<T> for NumRange<T> {
    #[inline]
    fn sample_single<R: RngCore + ?Sized>(self, rng: &mut R) -> T {
        T::Sampler::sample_single_inclusive(self.min, self.max, rng)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normal_range() {
        let range: NumRange<f64> = NumRange::normal_range();
        assert_approx_eq!(range.min, 0.0);
        assert_approx_eq!(range.max, 1.0);
    }

    #[test]
    fn test_span_and_midpoint() {
        let range: NumRange<f64> = NumRange::new(-1.0, 3.0);
        assert_approx_eq!(range.span(), 4.0);
        assert_approx_eq!(range.midpoint(), 1.0);
    }

    #[test]
    fn test_contains() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.1));
        assert!(!range.contains(f64::NAN));

        // Test a zero-length span, it should contain exactly one value
        let range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.1));
    }

    #[test]
    fn test_grow() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_eq!(range.grow(0.5), NumRange::new(0.5, 3.5));
        assert_eq!(range.grow(-0.5), NumRange::new(1.5, 2.5));
    }

    #[test]
    fn test_map_to() {
        let input_range: NumRange<f64> = NumRange::new(1.0, 3.0);
        let output_range: NumRange<f64> = NumRange::new(20.0, 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 10.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 2.0), 30.0);
        assert_approx_eq!(input_range.map_to(&output_range, 3.0), 40.0);

        // Test a zero-length span, it should always map to the min of the
        // output range
        let input_range: NumRange<f64> = NumRange::new(1.0, 1.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.5), 20.0);
    }

    #[test]
    fn test_normalize() {
        let range: NumRange<f64> = NumRange::new(-2.0, 2.0);
        assert_approx_eq!(range.normalize(-2.0), 0.0);
        assert_approx_eq!(range.normalize(0.0), 0.5);
        assert_approx_eq!(range.normalize(2.0), 1.0);
        assert_approx_eq!(range.normalize(4.0), 1.5);
    }

    #[test]
    fn test_clamp() {
        let range: NumRange<f64> = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.clamp(0.0), 1.0);
        assert_approx_eq!(range.clamp(2.0), 2.0);
        assert_approx_eq!(range.clamp(6.0), 3.0);
    }
}
