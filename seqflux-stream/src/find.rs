// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::{AsyncProducer, Step};

/// Extension trait providing index-aware searches.
///
/// After a match the producer is shut down with `force_return`.
#[allow(async_fn_in_trait)]
pub trait AsyncFindExt: AsyncProducer + Sized {
    /// First element for which `predicate(&item, index)` holds.
    async fn find<F>(mut self, mut predicate: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Step::Yielded(item) = self.next().await {
            if predicate(&item, index) {
                trace!("find matched at index {index}, shutting producer down");
                let _ = self.force_return(Self::Output::default()).await;
                return Some(item);
            }
            index += 1;
        }
        None
    }

    /// Payload of the first `Some` returned by `f(item, index)`.
    async fn find_map<F, U>(mut self, mut f: F) -> Option<U>
    where
        F: FnMut(Self::Item, usize) -> Option<U>,
    {
        let mut index = 0;
        while let Step::Yielded(item) = self.next().await {
            if let Some(found) = f(item, index) {
                trace!("find_map matched at index {index}, shutting producer down");
                let _ = self.force_return(Self::Output::default()).await;
                return Some(found);
            }
            index += 1;
        }
        None
    }
}

impl<P> AsyncFindExt for P where P: AsyncProducer {}
