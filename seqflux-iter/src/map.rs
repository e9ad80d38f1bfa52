// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::state::Fuse;
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage applying a function to every element.
#[derive(Clone)]
pub struct Map<P, F> {
    upstream: P,
    f: F,
    fuse: Fuse,
}

impl<P, F> Map<P, F> {
    pub fn new(upstream: P, f: F) -> Self {
        Self {
            upstream,
            f,
            fuse: Fuse::new(),
        }
    }
}

impl<P, F, U> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;
    type Output = P::Output;

    fn next(&mut self) -> Step<U, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        self.upstream.next().map_yielded(&mut self.f)
    }

    fn force_return(&mut self, value: P::Output) -> Step<U, P::Output> {
        self.fuse.blow();
        self.upstream.force_return(value).map_yielded(&mut self.f)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<U, P::Output> {
        self.fuse.blow();
        self.upstream.force_throw(error).map_yielded(&mut self.f)
    }
}

/// Extension trait providing the `map` operator.
pub trait MapExt: Producer + Sized {
    /// Transforms each element with `f`. Exhaustion passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// let doubled: Vec<i32> = range(3).map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![0, 2, 4]);
    /// ```
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }
}

impl<P> MapExt for P where P: Producer {}
