// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_iter::prelude::*;
use seqflux_test_utils::helpers::{assert_exhausted, drain};

#[test]
fn test_once_yields_single_value() {
    // Arrange
    let single = once("only");

    // Act
    let (items, ()) = drain(single);

    // Assert
    assert_eq!(items, vec!["only"]);
}

#[test]
fn test_once_forced_return_drops_value() {
    // Arrange
    let mut single = once(String::from("unused"));

    // Act
    let shutdown = single.force_return(());

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted(&mut single, 2);
}

#[test]
fn test_once_forced_throw_drops_value() {
    // Arrange
    let mut single = once(1);

    // Act
    let shutdown = single.force_throw(SeqfluxError::aborted("no thanks"));

    // Assert
    assert_eq!(shutdown, Step::Complete(()));
    assert_exhausted(&mut single, 1);
}

#[test]
fn test_never_is_exhausted_immediately() {
    // Arrange
    let mut empty = never::<u64>();

    // Act
    let first = empty.next();

    // Assert
    assert_eq!(first, Step::Complete(()));
    assert_exhausted(&mut empty, 2);
}

#[test]
fn test_never_uses_default_shutdown() {
    // Arrange
    let mut empty = never::<char>();

    // Act
    let returned = empty.force_return(());
    let thrown = empty.force_throw(SeqfluxError::aborted("ignored"));

    // Assert
    assert_eq!(returned, Step::Complete(()));
    assert_eq!(thrown, Step::Complete(()));
}

#[test]
fn test_never_counts_zero() {
    // Arrange
    let empty = never::<i32>();

    // Act
    let count = empty.count();

    // Assert
    assert_eq!(count, 0);
}
