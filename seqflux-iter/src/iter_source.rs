// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrapper source over any Rust iterator.
//!
//! Native iterators know nothing about forced shutdown, so the wrapper supplies
//! it: exhaustion, `force_return` and `force_throw` all drop the captured
//! iterator, which releases whatever it holds, and fuse the source.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! let mut letters = vec!["a", "b"].into_producer();
//!
//! assert_eq!(letters.next(), Step::Yielded("a"));
//! assert_eq!(letters.force_return(()), Step::Complete(()));
//! assert_eq!(letters.next(), Step::Complete(()));
//! ```

use seqflux_core::{Producer, SeqfluxError, Step};

/// Source adapting a native iterator to the pull protocol.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: Option<I>,
}

impl<I> IterSource<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Self { inner: Some(iter) }
    }

    /// `true` until the captured iterator has been released.
    pub const fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    fn release(&mut self, reason: &str) {
        if self.inner.take().is_some() {
            trace!("iter source released on {reason}");
        }
    }
}

impl<I> Producer for IterSource<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Output = ();

    fn next(&mut self) -> Step<I::Item> {
        let Some(iter) = self.inner.as_mut() else {
            return Step::Complete(());
        };
        match iter.next() {
            Some(item) => Step::Yielded(item),
            None => {
                self.release("exhaustion");
                Step::Complete(())
            }
        }
    }

    fn force_return(&mut self, value: ()) -> Step<I::Item> {
        self.release("forced return");
        Step::Complete(value)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<I::Item> {
        self.release("forced throw");
        debug!("iter source cannot handle thrown error, treating as exhausted: {error}");
        Step::Complete(())
    }
}

/// Wraps anything iterable as a source.
pub fn from_iter<T>(iterable: T) -> IterSource<T::IntoIter>
where
    T: IntoIterator,
{
    IterSource::new(iterable.into_iter())
}

/// Conversion of native collections and iterators into sources.
pub trait IntoProducer: IntoIterator + Sized {
    /// Captures the native iterator in an [`IterSource`].
    fn into_producer(self) -> IterSource<Self::IntoIter> {
        from_iter(self)
    }
}

impl<T> IntoProducer for T where T: IntoIterator {}
