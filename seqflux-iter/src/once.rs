// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::{Producer, SeqfluxError, Step};

/// Source producing a single value.
///
/// The first `next` hands the value out; every later call reports exhaustion.
/// Forced operations drop the value if it is still held and report exhaustion
/// unconditionally.
///
/// # Examples
///
/// ```rust
/// use seqflux_iter::prelude::*;
///
/// let mut single = once(7);
/// assert_eq!(single.next(), Step::Yielded(7));
/// assert_eq!(single.next(), Step::Complete(()));
/// ```
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

impl<T> Producer for Once<T> {
    type Item = T;
    type Output = ();

    fn next(&mut self) -> Step<T> {
        match self.value.take() {
            Some(value) => Step::Yielded(value),
            None => Step::Complete(()),
        }
    }

    fn force_return(&mut self, value: ()) -> Step<T> {
        self.value = None;
        Step::Complete(value)
    }

    fn force_throw(&mut self, _error: SeqfluxError) -> Step<T> {
        self.value = None;
        Step::Complete(())
    }
}

pub fn once<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}
