// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::helpers::{assert_exhausted, drain};
use seqflux_test_utils::{Probe, ProbedSource};

#[test]
fn test_filter_map_emits_some_payloads() {
    // Arrange
    let parsed = vec!["4", "four", "16", ""]
        .into_producer()
        .filter_map(|s| s.parse::<u32>().ok());

    // Act
    let (items, ()) = drain(parsed);

    // Assert
    assert_eq!(items, vec![4, 16]);
}

#[test]
fn test_filter_map_skips_to_exhaustion() {
    // Arrange
    let probe = Probe::new();
    let mut nothing = ProbedSource::new(vec![1, 2, 3], &probe).filter_map(|_: i32| None::<i32>);

    // Act
    let first = nothing.next();

    // Assert
    assert_eq!(first, Step::Complete(()));
    assert_eq!(probe.pulls(), 4);
    assert_exhausted(&mut nothing, 2);
}

#[test]
fn test_filter_map_maps_element_produced_during_shutdown() {
    // Arrange
    let probe = Probe::new();
    let mut halves = ProbedSource::new(vec![8], &probe)
        .with_parting(6)
        .filter_map(|x: i32| (x % 2 == 0).then(|| x / 2));

    // Act
    let shutdown = halves.force_return(());

    // Assert
    assert_eq!(shutdown, Step::Yielded(3));
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_filter_map_drops_none_produced_during_shutdown() {
    // Arrange
    let probe = Probe::new();
    let mut halves = ProbedSource::new(vec![8], &probe)
        .with_parting(7)
        .filter_map(|x: i32| (x % 2 == 0).then(|| x / 2));

    // Act
    let shutdown = halves.force_throw(SeqfluxError::aborted("stop"));

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_eq!(probe.throws(), 1);
}
