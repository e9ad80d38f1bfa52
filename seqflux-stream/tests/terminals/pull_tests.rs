// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_stream::prelude::*;
use seqflux_test_utils::{AsyncProbedSource, Probe};

#[tokio::test]
async fn test_opt_next_and_nth() {
    // Arrange
    let probe = Probe::new();
    let mut source = AsyncProbedSource::probed(10..20, &probe);

    // Act
    let first = source.opt_next().await;
    let fourth = source.nth(2).await;
    let beyond = source.nth(100).await;
    let after = source.opt_next().await;

    // Assert
    assert_eq!(first, Some(10));
    assert_eq!(fourth, Some(13));
    assert_eq!(beyond, None);
    assert_eq!(after, None);
}
