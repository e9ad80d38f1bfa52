// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Display;
use core::future::Future;
use futures::Stream;
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Extension trait providing terminal operations that drain a suspending
/// producer.
#[allow(async_fn_in_trait)]
pub trait AsyncConsumeExt: AsyncProducer + Sized {
    /// Awaits `f` on every element, one at a time.
    async fn for_each<F, Fut>(mut self, mut f: F)
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = ()>,
    {
        while let Step::Yielded(item) = self.next().await {
            f(item).await;
        }
    }

    /// Calls `f` on every element until it fails.
    ///
    /// On failure the error is thrown into the producer before being returned.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    async fn try_for_each<F, E>(mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
        E: Display,
    {
        while let Step::Yielded(item) = self.next().await {
            if let Err(error) = f(item) {
                debug!("try_for_each aborted: {error}");
                let _ = self
                    .force_throw(SeqfluxError::aborted(error.to_string()))
                    .await;
                return Err(error);
            }
        }
        Ok(())
    }

    /// Gathers every element into a collection.
    async fn collect<C>(mut self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        let mut collection = C::default();
        while let Step::Yielded(item) = self.next().await {
            collection.extend(Some(item));
        }
        collection
    }

    /// Number of elements left in the producer.
    async fn count(mut self) -> usize {
        let mut count = 0;
        while self.next().await.is_yielded() {
            count += 1;
        }
        count
    }

    /// Views the producer as a `futures::Stream`.
    fn into_stream(self) -> impl Stream<Item = Self::Item> {
        crate::bridge::into_stream(self)
    }
}

impl<P> AsyncConsumeExt for P where P: AsyncProducer {}
