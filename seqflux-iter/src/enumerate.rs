// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Enumerate operator - pairs each element with a running index.
//!
//! The index advances after every successful pull, including an element the
//! upstream still hands out while being shut down.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! let pairs: Vec<_> = vec!["a", "b"].into_producer().enumerate_from(5).collect();
//! assert_eq!(pairs, vec![(5, "a"), (6, "b")]);
//! ```

use seqflux_core::state::{Fuse, Tally};
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage pairing upstream elements with their index.
#[derive(Debug, Clone)]
pub struct Enumerate<P> {
    upstream: P,
    tally: Tally,
    fuse: Fuse,
}

impl<P> Enumerate<P> {
    pub fn new(upstream: P, start: usize) -> Self {
        Self {
            upstream,
            tally: Tally::starting_at(start),
            fuse: Fuse::new(),
        }
    }

    /// Index the next produced element will get.
    pub const fn next_index(&self) -> usize {
        self.tally.peek()
    }
}

impl<P> Producer for Enumerate<P>
where
    P: Producer,
{
    type Item = (usize, P::Item);
    type Output = P::Output;

    fn next(&mut self) -> Step<Self::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let step = self.upstream.next();
        self.tally.tag(step)
    }

    fn force_return(&mut self, value: P::Output) -> Step<Self::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_return(value);
        self.tally.tag(step)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, P::Output> {
        self.fuse.blow();
        let step = self.upstream.force_throw(error);
        self.tally.tag(step)
    }
}

/// Extension trait providing the `enumerate` operator.
pub trait EnumerateExt: Producer + Sized {
    /// Pairs each element with an index starting at 0.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self, 0)
    }

    /// Pairs each element with an index starting at `start`.
    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        Enumerate::new(self, start)
    }
}

impl<P> EnumerateExt for P where P: Producer {}
