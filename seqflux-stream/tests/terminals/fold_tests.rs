// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_stream::prelude::*;
use seqflux_test_utils::{AsyncProbedSource, Probe};

#[tokio::test]
async fn test_fold_and_reduce() {
    // Act
    let folded = from_iter(vec![1, 2, 3]).fold(10, |acc, x| acc * x).await;
    let reduced = from_iter(vec![8, 4, 2]).reduce(|a, b| a / b).await;
    let reduced_empty = never::<i32>().reduce(|a, b| a + b).await;
    let reduced_single = once(4).reduce(|_, _| panic!("nothing to combine")).await;

    // Assert
    assert_eq!(folded, 60);
    assert_eq!(reduced, Some(1));
    assert_eq!(reduced_empty, None);
    assert_eq!(reduced_single, Some(4));
}

#[tokio::test]
async fn test_sum_min_max_are_seeded_with_zero() {
    // Act
    let sum_empty = never::<i32>().sum().await;
    let min = from_iter(vec![5, 7, 9]).min().await;
    let max = from_iter(vec![5, 7, 9]).max().await;
    let max_negative = from_iter(vec![-2.5, -1.0]).max().await;

    // Assert
    assert_eq!(sum_empty, 0);
    assert_eq!(min, 0);
    assert_eq!(max, 9);
    assert_eq!(max_negative, 0.0);
}

#[tokio::test]
async fn test_all_and_any_traverse_everything() {
    // Arrange
    let all_probe = Probe::new();
    let any_probe = Probe::new();

    // Act
    let all = AsyncProbedSource::probed(vec![false, true, true], &all_probe).all().await;
    let any = AsyncProbedSource::probed(vec![true, false, false], &any_probe).any().await;

    // Assert
    assert!(!all);
    assert!(any);
    assert_eq!(all_probe.pulls(), 4);
    assert_eq!(any_probe.pulls(), 4);
}
