// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::{Producer, Step};

/// Extension trait providing index-aware searches.
///
/// The index handed to the closure starts at 0. After a match the producer is
/// shut down with `force_return`, so an early stop releases the upstream.
pub trait FindExt: Producer + Sized {
    /// First element for which `predicate(&item, index)` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflux_iter::prelude::*;
    ///
    /// let found = vec!["a", "bb", "cc"].into_producer().find(|s, _| s.len() == 2);
    /// assert_eq!(found, Some("bb"));
    /// ```
    fn find<F>(mut self, mut predicate: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Step::Yielded(item) = self.next() {
            if predicate(&item, index) {
                trace!("find matched at index {index}, shutting producer down");
                let _ = self.force_return(Self::Output::default());
                return Some(item);
            }
            index += 1;
        }
        None
    }

    /// Payload of the first `Some` returned by `f(item, index)`.
    fn find_map<F, U>(mut self, mut f: F) -> Option<U>
    where
        F: FnMut(Self::Item, usize) -> Option<U>,
    {
        let mut index = 0;
        while let Step::Yielded(item) = self.next() {
            if let Some(found) = f(item, index) {
                trace!("find_map matched at index {index}, shutting producer down");
                let _ = self.force_return(Self::Output::default());
                return Some(found);
            }
            index += 1;
        }
        None
    }
}

impl<P> FindExt for P where P: Producer {}
