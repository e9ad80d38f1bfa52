// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_stream::prelude::*;
use seqflux_test_utils::{AsyncProbedSource, Probe};
use std::cell::RefCell;

#[tokio::test]
async fn test_for_each_awaits_closure_per_element() {
    // Arrange
    let seen = RefCell::new(Vec::new());

    // Act
    from_iter(vec![1, 2, 3])
        .for_each(|x| {
            let seen = &seen;
            async move {
                tokio::task::yield_now().await;
                seen.borrow_mut().push(x);
            }
        })
        .await;

    // Assert
    assert_eq!(seen.into_inner(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_try_for_each_throws_into_upstream_on_error() {
    // Arrange
    let probe = Probe::new();
    let source = AsyncProbedSource::probed(vec![1, 2, 3], &probe);

    // Act
    let outcome = source
        .try_for_each(|x| if x == 2 { Err("two") } else { Ok(()) })
        .await;

    // Assert
    assert_eq!(outcome, Err("two"));
    assert_eq!(probe.throws(), 1);
    assert_eq!(probe.releases(), 1);
    assert!(probe.last_error().is_some_and(|e| e.is_aborted()));
}

#[tokio::test]
async fn test_try_for_each_success() {
    // Act
    let outcome: Result<(), String> = from_iter(vec![1, 2]).try_for_each(|_| Ok(())).await;

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_collect_and_count() {
    // Act
    let text: String = from_iter("abc".chars()).collect().await;
    let count = from_iter(0..7).count().await;

    // Assert
    assert_eq!(text, "abc");
    assert_eq!(count, 7);
}
