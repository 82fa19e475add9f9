// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for extents, offsets, and scroll positions.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A floating-point coordinate used along the scroll axis.
///
/// Implemented for `f32` and `f64`. Everything in this crate works in
/// logical pixels, but nothing depends on that unit.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Converts an item or row count into a coordinate.
    fn from_usize(value: usize) -> Self;

    /// Rounds toward negative infinity and converts to `isize`.
    ///
    /// Values outside the `isize` range saturate.
    fn floor_to_isize(self) -> isize;

    /// Returns `true` for values that are neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;

    /// The larger of `self` and `other`; NaN loses.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if self < other || self.is_nan() { other } else { self }
    }

    /// The smaller of `self` and `other`; NaN loses.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if self > other || self.is_nan() { other } else { self }
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                reason = "Counts beyond 2^24 (f32) lose precision, which is acceptable for layout"
            )]
            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                reason = "`as` saturates at the isize bounds, which is what callers want"
            )]
            fn floor_to_isize(self) -> isize {
                // `core` has no `floor` without libm; truncate and step down for
                // negative non-integers instead.
                let truncated = self as isize;
                if (truncated as $ty) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
