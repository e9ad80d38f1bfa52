// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Arithmetic progression source.
//!
//! Without an explicit step, a range counts up by one when `start <= end` and
//! down by one otherwise. The direction decides the stop test: an ascending
//! range stops once `current >= end`, a descending one once `current <= end`.
//! Inclusive ranges move `end` one step further before iterating.
//!
//! A range never leaves its element type: it stops before a value that would
//! overflow, and an inclusive end that lies beyond the type's bounds only
//! stops the range at those bounds.
//!
//! Unsigned types count down by subtracting the unit step. An explicit step is
//! added as given, so only signed and float ranges can descend with one.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! assert_eq!(range(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(irange(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
//! assert_eq!(range_between(5, 0).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
//! assert_eq!(irange_between(254u8, 255).collect::<Vec<_>>(), vec![254, 255]);
//! ```

use seqflux_core::{Numeric, Producer, Result, SeqfluxError, Step};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stride<T> {
    Add(T),
    Sub(T),
}

impl<T: Numeric> Stride<T> {
    fn apply(self, value: T) -> Option<T> {
        match self {
            Self::Add(step) => value.try_add(step),
            Self::Sub(step) => value.try_sub(step),
        }
    }

    fn is_descending(self) -> bool {
        match self {
            Self::Add(step) => step < T::ZERO,
            Self::Sub(step) => step > T::ZERO,
        }
    }
}

/// Source generating `start, start + step, ...` up to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    /// `None` once the range is exhausted
    current: Option<T>,
    /// `None` when the end lies beyond the bounds of `T`
    end: Option<T>,
    stride: Stride<T>,
}

impl<T> Range<T>
where
    T: Numeric,
{
    /// Exclusive range with an explicit step.
    ///
    /// # Errors
    ///
    /// Returns [`SeqfluxError::InvalidStep`] if `step` is zero or NaN.
    pub fn new(start: T, end: T, step: T) -> Result<Self> {
        if !(step > T::ZERO || step < T::ZERO) {
            return Err(SeqfluxError::invalid_step(format!(
                "step {step:?} cannot move from {start:?} towards {end:?}"
            )));
        }
        Ok(Self {
            current: Some(start),
            end: Some(end),
            stride: Stride::Add(step),
        })
    }

    fn unit(start: T, end: T) -> Self {
        let stride = if start <= end {
            Stride::Add(T::ONE)
        } else {
            Stride::Sub(T::ONE)
        };
        Self {
            current: Some(start),
            end: Some(end),
            stride,
        }
    }

    fn inclusive(mut self) -> Self {
        self.end = self.end.and_then(|end| self.stride.apply(end));
        self
    }

    fn is_finished(&self, current: T) -> bool {
        match self.end {
            None => false,
            Some(end) if self.stride.is_descending() => current <= end,
            Some(end) => current >= end,
        }
    }
}

impl<T> Producer for Range<T>
where
    T: Numeric,
{
    type Item = T;
    type Output = ();

    fn next(&mut self) -> Step<T> {
        let Some(value) = self.current else {
            return Step::Complete(());
        };
        if self.is_finished(value) {
            self.current = None;
            return Step::Complete(());
        }
        self.current = self.stride.apply(value);
        Step::Yielded(value)
    }

    fn force_return(&mut self, value: ()) -> Step<T> {
        self.current = None;
        Step::Complete(value)
    }

    fn force_throw(&mut self, _error: SeqfluxError) -> Step<T> {
        self.current = None;
        Step::Complete(())
    }
}

/// `0, 1, ..., end - 1` (or counting down for a negative `end`).
///
/// Works for every [`Numeric`] type; `range(0u32)` is empty.
pub fn range<T>(end: T) -> Range<T>
where
    T: Numeric,
{
    Range::unit(T::ZERO, end)
}

/// `start` towards `end`, exclusive, stepping by one in the direction of `end`.
pub fn range_between<T>(start: T, end: T) -> Range<T>
where
    T: Numeric,
{
    Range::unit(start, end)
}

/// `start` towards `end`, exclusive, with an explicit step.
///
/// # Errors
///
/// Returns [`SeqfluxError::InvalidStep`] if `step` is zero or NaN.
pub fn range_step<T>(start: T, end: T, step: T) -> Result<Range<T>>
where
    T: Numeric,
{
    Range::new(start, end, step)
}

/// `0, 1, ..., end`.
pub fn irange<T>(end: T) -> Range<T>
where
    T: Numeric,
{
    range(end).inclusive()
}

/// `start` towards `end`, inclusive.
pub fn irange_between<T>(start: T, end: T) -> Range<T>
where
    T: Numeric,
{
    range_between(start, end).inclusive()
}

/// `start` towards `end`, inclusive, with an explicit step.
///
/// # Errors
///
/// Returns [`SeqfluxError::InvalidStep`] if `step` is zero or NaN.
pub fn irange_step<T>(start: T, end: T, step: T) -> Result<Range<T>>
where
    T: Numeric,
{
    Ok(Range::new(start, end, step)?.inclusive())
}
