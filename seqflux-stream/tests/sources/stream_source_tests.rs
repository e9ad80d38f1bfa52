// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use seqflux_stream::prelude::*;
use seqflux_stream::StreamSource;
use seqflux_test_utils::helpers::{assert_exhausted_async, drain_async};

#[tokio::test]
async fn test_stream_source_yields_stream_items() {
    // Arrange
    let source = from_stream(stream::iter(vec![1, 2, 3]));

    // Act
    let (items, ()) = drain_async(source).await;

    // Assert
    assert_eq!(items, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_stream_source_releases_on_exhaustion() {
    // Arrange
    let mut source = from_stream(stream::iter(vec!['q']));

    // Act
    let _ = source.next().await;
    let end = source.next().await;

    // Assert
    assert_eq!(end, Step::Complete(()));
    assert!(!source.is_live());
    assert_exhausted_async(&mut source, 2).await;
}

#[tokio::test]
async fn test_stream_source_releases_on_forced_operations() {
    // Arrange
    let mut returned = StreamSource::new(stream::repeat(7));
    let mut thrown = StreamSource::new(stream::repeat(7));

    // Act
    let first = returned.next().await;
    let after_return = returned.force_return(()).await;
    let after_throw = thrown.force_throw(SeqfluxError::aborted("no more")).await;

    // Assert
    assert_eq!(first, Step::Yielded(7));
    assert_eq!(after_return, Step::Complete(()));
    assert_eq!(after_throw, Step::Complete(()));
    assert!(!returned.is_live());
    assert!(!thrown.is_live());
    assert_exhausted_async(&mut returned, 2).await;
}

#[tokio::test]
async fn test_stream_source_accepts_pinned_streams() {
    // Arrange
    let unfolded = stream::unfold(0, |n| async move { (n < 3).then_some((n, n + 1)) });
    let source = from_stream(Box::pin(unfolded));

    // Act
    let total = source.sum().await;

    // Assert
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_stream_source_feeds_stages() {
    // Arrange
    let source = from_stream(stream::iter(1..=6));

    // Act
    let items: Vec<(usize, i32)> = source
        .filter(|x| futures::future::ready(x % 3 != 0))
        .enumerate()
        .collect()
        .await;

    // Assert
    assert_eq!(items, vec![(0, 3), (1, 6)]);
}
