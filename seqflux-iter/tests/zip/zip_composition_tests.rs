// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::helpers::drain;
use seqflux_test_utils::test_data::letters;

#[test]
fn test_map_over_zip_keeps_partial_row() {
    // Arrange
    let sums = zip(vec![range(2), range(5)]).map(|row| row.iter().sum::<i32>());

    // Act
    let (items, last) = drain(sums);

    // Assert
    assert_eq!(items, vec![0, 2]);
    assert_eq!(last, vec![None, Some(2)]);
}

#[test]
fn test_zip_with_enumerate_and_take() {
    // Arrange
    let labelled: Vec<(usize, (&str, i32))> = letters()
        .into_producer()
        .zip(range_between(10, 0))
        .enumerate()
        .take(2)
        .collect();

    // Assert
    assert_eq!(labelled, vec![(0, ("a", 10)), (1, ("b", 9))]);
}

#[test]
fn test_zip_of_filtered_members() {
    // Arrange - each member drops its own elements
    let evens = range(10).filter(|x| x % 2 == 1);
    let odds = range(10).filter(|x| x % 2 == 0);

    // Act
    let pairs: Vec<(i32, i32)> = evens.zip(odds).collect();

    // Assert
    assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5), (6, 7), (8, 9)]);
}
