// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::range;
use seqflux_stream::prelude::*;
use seqflux_test_utils::helpers::{assert_exhausted_async, drain_async};
use seqflux_test_utils::{Probe, ProbedSource};

#[tokio::test]
async fn test_lift_forwards_elements() {
    // Arrange
    let lifted = lift(range(3));

    // Act
    let (items, ()) = drain_async(lifted).await;

    // Assert
    assert_eq!(items, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_lift_forwards_forced_operations() {
    // Arrange
    let probe = Probe::new();
    let mut lifted = ProbedSource::new(vec![1, 2], &probe).lift();

    // Act
    let returned = lifted.force_return(()).await;
    let thrown = lifted.force_throw(SeqfluxError::aborted("late")).await;

    // Assert
    assert_eq!(returned, Step::Complete(()));
    assert_eq!(thrown, Step::Complete(()));
    assert_eq!(probe.returns(), 1);
    assert_eq!(probe.throws(), 1);
    assert_eq!(probe.releases(), 1);
}

#[tokio::test]
async fn test_once_and_never() {
    // Arrange
    let mut single = once("solo");
    let mut empty = never::<u8>();

    // Act
    let first = single.next().await;

    // Assert
    assert_eq!(first, Step::Yielded("solo"));
    assert_exhausted_async(&mut single, 2).await;
    assert_exhausted_async(&mut empty, 2).await;
}

#[tokio::test]
async fn test_from_iter_releases_on_forced_return() {
    // Arrange
    let mut words = from_iter(vec![String::from("a"), String::from("b")]);
    assert_eq!(words.next().await, Step::Yielded(String::from("a")));

    // Act
    let shutdown = words.force_return(()).await;

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert!(!words.into_inner().is_live());
}
