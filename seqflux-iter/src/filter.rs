// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator with **discard-when-true** semantics.
//!
//! Unlike `Iterator::filter`, the predicate names the elements to *drop*:
//! an element for which it returns `true` is discarded and an element for
//! which it returns `false` is kept. Existing pipelines rely on this, so it is
//! kept as is.
//!
//! The stage pulls from its upstream until it finds an element to keep or the
//! upstream is exhausted. Forced operations are forwarded once, never once
//! per element; a discarded element produced during shutdown becomes
//! exhaustion.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! // Drops the even numbers
//! let odd: Vec<i32> = vec![1, 2, 3, 4].into_producer().filter(|x| x % 2 == 0).collect();
//! assert_eq!(odd, vec![1, 3]);
//! ```

use seqflux_core::state::Fuse;
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage dropping the elements its predicate matches.
#[derive(Clone)]
pub struct Filter<P, F> {
    upstream: P,
    discard: F,
    fuse: Fuse,
}

impl<P, F> Filter<P, F> {
    pub fn new(upstream: P, discard: F) -> Self {
        Self {
            upstream,
            discard,
            fuse: Fuse::new(),
        }
    }

    fn settle<Y, D: Default>(&mut self, step: Step<Y, D>) -> Step<Y, D>
    where
        F: FnMut(&Y) -> bool,
    {
        match step {
            Step::Yielded(item) if (self.discard)(&item) => Step::done(),
            other => other,
        }
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;
    type Output = P::Output;

    fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        loop {
            match self.upstream.next() {
                Step::Yielded(item) if (self.discard)(&item) => continue,
                other => return other,
            }
        }
    }

    fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value);
        self.settle(step)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error);
        self.settle(step)
    }
}

/// Extension trait providing the `filter` operator.
pub trait FilterExt: Producer + Sized {
    /// Drops every element for which `discard` returns `true`.
    ///
    /// Note the inverted sense compared to `Iterator::filter`; see the
    /// [module-level documentation](crate::filter).
    fn filter<F>(self, discard: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, discard)
    }
}

impl<P> FilterExt for P where P: Producer {}
