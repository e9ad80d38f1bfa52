// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::helpers::{assert_exhausted, drain};
use seqflux_test_utils::{Probe, ProbedSource};
use std::cell::Cell;

#[test]
fn test_map_transforms_each_element() {
    // Arrange
    let mapped = range(4).map(|x| x * x);

    // Act
    let (items, ()) = drain(mapped);

    // Assert
    assert_eq!(items, vec![0, 1, 4, 9]);
}

#[test]
fn test_map_passes_final_value_through() {
    // Arrange
    let mut widths = zip(vec![range(1), range(2)]).map(|row| row.len());

    // Act
    let first = widths.next();
    let second = widths.next();

    // Assert
    assert_eq!(first, Step::Yielded(2));
    assert_eq!(second, Step::Complete(vec![None, Some(1)]));
}

#[test]
fn test_map_is_not_called_on_exhaustion() {
    // Arrange
    let calls = Cell::new(0);
    let mut mapped = vec![1, 2].into_producer().map(|x| {
        calls.set(calls.get() + 1);
        x
    });

    // Act
    let _ = drain(&mut mapped);
    assert_exhausted(&mut mapped, 3);

    // Assert
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_map_transforms_element_produced_during_shutdown() {
    // Arrange
    let probe = Probe::new();
    let mut mapped = ProbedSource::new(vec![1, 2], &probe)
        .with_parting(5)
        .map(|x| x * 10);

    // Act
    let shutdown = mapped.force_return(());

    // Assert
    assert_eq!(shutdown, Step::Yielded(50));
    assert_eq!(probe.returns(), 1);
    assert_exhausted(&mut mapped, 2);
}

#[test]
#[should_panic(expected = "transform failed")]
fn test_map_does_not_catch_panics() {
    // Arrange
    let mut mapped = range(3).map(|x: i32| -> i32 {
        if x == 1 {
            panic!("transform failed");
        }
        x
    });

    // Act
    let _ = mapped.next();
    let _ = mapped.next();
}
