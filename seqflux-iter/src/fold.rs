// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Folding terminal operations.
//!
//! All of these drain the producer to exhaustion. Two behaviors differ from
//! `Iterator` and are relied upon by existing callers:
//!
//! - `all` and `any` do **not** short-circuit: every element is pulled even
//!   after the answer is known.
//! - `min` and `max` are folds seeded with zero, so zero always takes part in
//!   the comparison. `min` of all-positive elements is `0`, `max` of
//!   all-negative elements is `0`.

use seqflux_core::{Numeric, Producer, Step};

/// Extension trait providing folds over a whole producer.
pub trait FoldExt: Producer + Sized {
    /// Strict left fold.
    fn fold<A, F>(mut self, init: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = init;
        while let Step::Yielded(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Left fold seeded with the first element.
    ///
    /// `None` for an empty producer. With a single element `f` is never called.
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next().yielded()?;
        Some(self.fold(first, f))
    }

    /// Sum of all elements, `0` when empty.
    fn sum(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| acc + item)
    }

    /// Smallest of zero and all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// assert_eq!(vec![5, 7, 9].into_producer().min(), 0);
    /// assert_eq!(vec![-5, 7].into_producer().min(), -5);
    /// ```
    fn min(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| if item < acc { item } else { acc })
    }

    /// Largest of zero and all elements.
    fn max(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| if item > acc { item } else { acc })
    }

    /// `true` if every element is `true`. Traverses the whole producer.
    fn all(self) -> bool
    where
        Self: Producer<Item = bool>,
    {
        self.fold(true, |acc, item| acc && item)
    }

    /// `true` if any element is `true`. Traverses the whole producer.
    fn any(self) -> bool
    where
        Self: Producer<Item = bool>,
    {
        self.fold(false, |acc, item| acc || item)
    }
}

impl<P> FoldExt for P where P: Producer {}
