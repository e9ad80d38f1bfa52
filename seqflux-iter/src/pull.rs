// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::Producer;

/// Extension trait providing single-element pulls wrapped as `Option`.
pub trait PullExt: Producer {
    /// Pulls one element; `None` on exhaustion.
    fn opt_next(&mut self) -> Option<Self::Item> {
        self.next().yielded()
    }

    /// Skips `n` elements and pulls the next one; `None` if the producer runs out first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// let mut digits = range(10);
    /// assert_eq!(digits.nth(3), Some(3));
    /// assert_eq!(digits.opt_next(), Some(4));
    /// assert_eq!(digits.nth(10), None);
    /// ```
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.opt_next()?;
        }
        self.opt_next()
    }
}

impl<P> PullExt for P where P: Producer + ?Sized {}
