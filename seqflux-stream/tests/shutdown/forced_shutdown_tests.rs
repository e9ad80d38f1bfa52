// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::ready;
use seqflux_stream::prelude::*;
use seqflux_test_utils::helpers::assert_exhausted_async;
use seqflux_test_utils::{AsyncProbedSource, Probe};

#[tokio::test]
async fn test_forced_return_releases_source_once_through_chain() {
    // Arrange
    let probe = Probe::new();
    let mut source = AsyncProbedSource::probed(1..=10, &probe);
    let mut mapped = (&mut source).map(|x| async move { x + 1 });
    let mut filtered = (&mut mapped).filter(|x| ready(x % 3 == 0));
    assert_eq!(filtered.next().await, Step::Yielded(2));

    // Act
    let shutdown = filtered.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_eq!(probe.returns(), 1);
    assert_eq!(probe.releases(), 1);
    assert_exhausted_async(&mut filtered, 2).await;
    assert_exhausted_async(&mut mapped, 2).await;
    assert_exhausted_async(&mut source, 2).await;
}

#[tokio::test]
async fn test_forced_throw_reaches_every_zip_member_through_chain() {
    // Arrange
    let left = Probe::new();
    let right = Probe::new();
    let mut chain = AsyncProbedSource::probed(vec![1, 2, 3], &left)
        .zip(AsyncProbedSource::probed(vec![4, 5, 6], &right))
        .enumerate()
        .take(2);

    // Act
    let shutdown = chain.force_throw(SeqfluxError::aborted("cancelled")).await;

    // Assert
    assert_eq!(shutdown, Step::Complete((None, None)));
    assert_eq!(left.throws(), 1);
    assert_eq!(right.throws(), 1);
    assert_exhausted_async(&mut chain, 2).await;
}

#[tokio::test]
async fn test_foreign_producer_degrades_to_exhaustion() {
    // Arrange
    let mut chain = Countdown(5).take(3);
    assert_eq!(chain.next().await, Step::Yielded(4));

    // Act
    let shutdown = chain.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted_async(&mut chain, 2).await;
}

/// Suspending producer implementing only `next`.
struct Countdown(u32);

impl AsyncProducer for Countdown {
    type Item = u32;
    type Output = ();

    async fn next(&mut self) -> Step<u32> {
        if self.0 == 0 {
            return Step::Complete(());
        }
        self.0 -= 1;
        Step::Yielded(self.0)
    }
}

#[tokio::test]
async fn test_forced_return_keeps_next_only_source_shut_through_map_and_filter() {
    // Arrange
    let mut chain = Countdown(4)
        .map(|x| async move { x * 10 })
        .filter(|_| ready(false));
    assert_eq!(chain.next().await, Step::Yielded(30));

    // Act
    let shutdown = chain.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted_async(&mut chain, 3).await;
}

#[tokio::test]
async fn test_forced_throw_keeps_next_only_members_shut_through_zip() {
    // Arrange
    let mut rows = zip(vec![Countdown(3), Countdown(5)]);
    let mut pairs = Countdown(3).zip(Countdown(5));
    assert_eq!(rows.next().await, Step::Yielded(vec![2, 4]));
    assert_eq!(pairs.next().await, Step::Yielded((2, 4)));

    // Act
    let rows_shutdown = rows.force_throw(SeqfluxError::aborted("stop")).await;
    let pairs_shutdown = pairs.force_throw(SeqfluxError::aborted("stop")).await;

    // Assert
    assert_eq!(rows_shutdown, Step::Complete(Vec::new()));
    assert_eq!(pairs_shutdown, Step::Complete((None, None)));
    assert_exhausted_async(&mut rows, 2).await;
    assert_exhausted_async(&mut pairs, 2).await;
}

#[tokio::test]
async fn test_forced_return_keeps_next_only_source_shut_through_enumerate_and_filter_map() {
    // Arrange
    let mut chain = Countdown(6)
        .enumerate()
        .filter_map(|(i, x)| ready((i % 2 == 0).then_some(x)));
    assert_eq!(chain.next().await, Step::Yielded(5));

    // Act
    let shutdown = chain.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted_async(&mut chain, 3).await;
}

#[tokio::test]
async fn test_lifted_next_only_source_stays_shut() {
    // Arrange
    struct Digits(u8);

    impl seqflux_iter::Producer for Digits {
        type Item = u8;
        type Output = ();

        fn next(&mut self) -> Step<u8> {
            self.0 = (self.0 + 1) % 10;
            Step::Yielded(self.0)
        }
    }

    let mut lifted = lift(Digits(0));
    assert_eq!(lifted.next().await, Step::Yielded(1));

    // Act
    let shutdown = lifted.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted_async(&mut lifted, 3).await;
}
