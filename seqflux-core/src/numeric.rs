// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::Add;

/// Primitive numbers usable by `sum`, `min`, `max` and ranges.
///
/// Implemented for every integer and float primitive.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// The additive identity, which also seeds `sum`, `min` and `max`
    const ZERO: Self;
    /// The default range step
    const ONE: Self;

    /// `self + rhs`, or `None` if the result is out of range for the type.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if the result is out of range for the type.
    fn try_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn try_add(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
