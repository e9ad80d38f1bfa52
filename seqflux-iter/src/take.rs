// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator - limits a producer to its first `n` elements.
//!
//! Once the budget is used up, `next` reports exhaustion without consulting
//! the upstream again. The upstream is not released at that point: a consumer
//! that stops early still calls `force_return`, which is forwarded exactly
//! once. If the budget was already gone, whatever the upstream hands back
//! during shutdown is turned into exhaustion.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! let mut first_two = range(10).take(2);
//!
//! assert_eq!(first_two.next(), Step::Yielded(0));
//! assert_eq!(first_two.next(), Step::Yielded(1));
//! assert_eq!(first_two.next(), Step::Complete(()));
//! ```

use seqflux_core::state::Countdown;
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage emitting at most `n` upstream elements.
#[derive(Debug, Clone)]
pub struct Take<P> {
    upstream: P,
    countdown: Countdown,
}

impl<P> Take<P> {
    pub fn new(upstream: P, n: usize) -> Self {
        Self {
            upstream,
            countdown: Countdown::new(n),
        }
    }

    /// Number of elements the stage may still emit.
    pub const fn remaining(&self) -> usize {
        self.countdown.remaining()
    }

    pub fn into_inner(self) -> P {
        self.upstream
    }
}

impl<P> Producer for Take<P>
where
    P: Producer,
{
    type Item = P::Item;
    type Output = P::Output;

    fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.countdown.is_spent() {
            return Step::done();
        }
        let step = self.upstream.next();
        self.countdown.admit(step)
    }

    fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        let step = self.upstream.force_return(value);
        self.countdown.settle(step)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        let step = self.upstream.force_throw(error);
        self.countdown.settle(step)
    }
}

/// Extension trait providing the `take` operator.
pub trait TakeExt: Producer + Sized {
    /// Emits only the first `n` elements, then reports exhaustion.
    ///
    /// `take(0)` never pulls from the upstream.
    ///
    /// See the [module-level documentation](crate::take) for details.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }
}

impl<P> TakeExt for P where P: Producer {}
