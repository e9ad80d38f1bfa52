// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Folding terminal operations for suspending producers.
//!
//! Same behavior as the immediate [`FoldExt`](seqflux_iter::FoldExt):
//! `all` and `any` never short-circuit, and `min` and `max` are seeded with
//! zero.

use seqflux_core::{AsyncProducer, Numeric, Step};

#[allow(async_fn_in_trait)]
pub trait AsyncFoldExt: AsyncProducer + Sized {
    /// Strict left fold.
    async fn fold<A, F>(mut self, init: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = init;
        while let Step::Yielded(item) = self.next().await {
            acc = f(acc, item);
        }
        acc
    }

    /// Left fold seeded with the first element; `None` when empty.
    async fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next().await.yielded()?;
        Some(self.fold(first, f).await)
    }

    async fn sum(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| acc + item).await
    }

    /// Smallest of zero and all elements.
    async fn min(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| if item < acc { item } else { acc })
            .await
    }

    /// Largest of zero and all elements.
    async fn max(self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::ZERO, |acc, item| if item > acc { item } else { acc })
            .await
    }

    async fn all(self) -> bool
    where
        Self: AsyncProducer<Item = bool>,
    {
        self.fold(true, |acc, item| acc && item).await
    }

    async fn any(self) -> bool
    where
        Self: AsyncProducer<Item = bool>,
    {
        self.fold(false, |acc, item| acc || item).await
    }
}

impl<P> AsyncFoldExt for P where P: AsyncProducer {}
