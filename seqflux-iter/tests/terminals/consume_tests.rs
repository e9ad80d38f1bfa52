// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::{Probe, ProbedSource};
use std::collections::HashSet;

#[test]
fn test_for_each_visits_every_element() {
    // Arrange
    let mut seen = Vec::new();

    // Act
    range(4).for_each(|x| seen.push(x));

    // Assert
    assert_eq!(seen, vec![0, 1, 2, 3]);
}

#[test]
fn test_try_for_each_completes_without_error() {
    // Arrange
    let mut total = 0;

    // Act
    let outcome: Result<(), String> = range(4).try_for_each(|x| {
        total += x;
        Ok(())
    });

    // Assert
    assert!(outcome.is_ok());
    assert_eq!(total, 6);
}

#[test]
fn test_try_for_each_throws_into_upstream_on_error() {
    // Arrange
    let probe = Probe::new();
    let source = ProbedSource::new(vec![1, 2, 3, 4], &probe);

    // Act
    let outcome = source.try_for_each(|x| if x == 2 { Err("bad element") } else { Ok(()) });

    // Assert
    assert_eq!(outcome, Err("bad element"));
    assert_eq!(probe.pulls(), 2);
    assert_eq!(probe.throws(), 1);
    assert_eq!(probe.releases(), 1);
    let error = probe.last_error().expect("error was thrown into the source");
    assert!(error.is_aborted());
    assert!(error.to_string().contains("bad element"));
}

#[test]
fn test_collect_into_other_collections() {
    // Act
    let set: HashSet<i32> = vec![1, 1, 2].into_producer().collect();
    let text: String = from_iter("hey".chars()).collect();

    // Assert
    assert_eq!(set.len(), 2);
    assert_eq!(text, "hey");
}

#[test]
fn test_count_drains_producer() {
    // Arrange
    let probe = Probe::new();

    // Act
    let count = ProbedSource::new(vec!['a', 'b', 'c'], &probe).count();

    // Assert
    assert_eq!(count, 3);
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_into_iter_bridges_to_native_iterators() {
    // Act
    let doubled: Vec<i32> = range(3).into_iter().map(|x| x * 2).collect();
    let mut fused = once(1).into_iter();

    // Assert
    assert_eq!(doubled, vec![0, 2, 4]);
    assert_eq!(fused.next(), Some(1));
    assert_eq!(fused.next(), None);
    assert_eq!(fused.next(), None);
}
