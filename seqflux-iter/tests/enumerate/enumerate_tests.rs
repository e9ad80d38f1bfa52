// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::helpers::{assert_exhausted, drain};
use seqflux_test_utils::test_data::letters;
use seqflux_test_utils::{Probe, ProbedSource};

#[test]
fn test_enumerate_starts_at_zero() {
    // Arrange
    let enumerated = letters().into_producer().enumerate();

    // Act
    let (items, ()) = drain(enumerated);

    // Assert
    assert_eq!(items, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn test_enumerate_from_custom_start() {
    // Arrange
    let enumerated = letters().into_producer().enumerate_from(5);

    // Act
    let (items, ()) = drain(enumerated);

    // Assert
    assert_eq!(items, vec![(5, "a"), (6, "b"), (7, "c")]);
}

#[test]
fn test_enumerate_empty_producer() {
    // Arrange
    let mut enumerated = never::<char>().enumerate();

    // Act & Assert
    assert_exhausted(&mut enumerated, 3);
}

#[test]
fn test_enumerate_counts_element_produced_during_shutdown() {
    // Arrange
    let probe = Probe::new();
    let mut enumerated = ProbedSource::new(letters(), &probe)
        .with_parting("z")
        .enumerate();
    assert_eq!(enumerated.next(), Step::Yielded((0, "a")));

    // Act
    let shutdown = enumerated.force_return(());

    // Assert
    assert_eq!(shutdown, Step::Yielded((1, "z")));
    assert_eq!(probe.returns(), 1);
    assert_exhausted(&mut enumerated, 2);
}

#[test]
fn test_enumerate_force_throw_without_element_keeps_index() {
    // Arrange
    let probe = Probe::new();
    let mut enumerated = ProbedSource::new(letters(), &probe).enumerate_from(10);
    assert_eq!(enumerated.next(), Step::Yielded((10, "a")));

    // Act
    let shutdown = enumerated.force_throw(SeqfluxError::aborted("stop"));

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_eq!(probe.throws(), 1);
}
