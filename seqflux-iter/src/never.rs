// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use seqflux_core::{Producer, Step};

/// Source that is exhausted from construction.
///
/// Zero-sized; usable anywhere an empty producer is needed.
#[derive(Debug)]
pub struct Never<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for Never<T> {
    fn clone(&self) -> Self {
        never()
    }
}

impl<T> Copy for Never<T> {}

impl<T> Default for Never<T> {
    fn default() -> Self {
        never()
    }
}

impl<T> Producer for Never<T> {
    type Item = T;
    type Output = ();

    fn next(&mut self) -> Step<T> {
        Step::Complete(())
    }
}

pub const fn never<T>() -> Never<T> {
    Never { _item: PhantomData }
}
