// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::into_iter::ProducerIter;
use core::fmt::Display;
use seqflux_core::{Producer, SeqfluxError, Step};

/// Extension trait providing terminal operations that drain a producer.
pub trait ConsumeExt: Producer + Sized {
    /// Calls `f` on every element.
    fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        while let Step::Yielded(item) = self.next() {
            f(item);
        }
    }

    /// Calls `f` on every element until it fails.
    ///
    /// On failure the error is thrown into the producer with `force_throw`
    /// before being returned, so the upstream is released while unwinding.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = range(10).try_for_each(|x| {
    ///     if x == 3 {
    ///         return Err("three is too many");
    ///     }
    ///     seen.push(x);
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(outcome, Err("three is too many"));
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    fn try_for_each<F, E>(mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
        E: Display,
    {
        while let Step::Yielded(item) = self.next() {
            if let Err(error) = f(item) {
                debug!("try_for_each aborted: {error}");
                let _ = self.force_throw(SeqfluxError::aborted(error.to_string()));
                return Err(error);
            }
        }
        Ok(())
    }

    /// Gathers every element into a collection.
    fn collect<C>(self) -> C
    where
        C: FromIterator<Self::Item>,
    {
        self.into_iter().collect()
    }

    /// Number of elements left in the producer.
    fn count(self) -> usize {
        self.into_iter().count()
    }

    /// Views the producer as a native `Iterator`.
    fn into_iter(self) -> ProducerIter<Self> {
        ProducerIter::new(self)
    }
}

impl<P> ConsumeExt for P where P: Producer {}
