// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::test_data::readings;

#[test]
fn test_filter_then_enumerate_has_consecutive_indices() {
    // Arrange - drop negative readings
    let result: Vec<(usize, i64)> = readings()
        .into_producer()
        .map(|r| r.value)
        .filter(|v| *v < 0)
        .enumerate()
        .collect();

    // Assert
    assert_eq!(result, vec![(0, 71), (1, 74), (2, 12)]);
}

#[test]
fn test_enumerate_then_filter_keeps_original_indices() {
    // Arrange - drop the odd positions
    let result: Vec<(usize, &str)> = readings()
        .into_producer()
        .map(|r| r.sensor)
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .collect();

    // Assert
    assert_eq!(result, vec![(0, "boiler"), (2, "boiler"), (4, "attic")]);
}

#[test]
fn test_enumerate_feeds_find_map() {
    // Arrange
    let labelled = readings().into_producer().enumerate_from(1);

    // Act
    let first_cellar = labelled.find_map(|(position, r), _| (r.sensor == "cellar").then_some(position));

    // Assert
    assert_eq!(first_cellar, Some(4));
}
