// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::{AsyncProducer, Producer, Step};

/// Pulls until exhaustion, returning the elements and the final value.
pub fn drain<P>(mut producer: P) -> (Vec<P::Item>, P::Output)
where
    P: Producer,
{
    let mut items = Vec::new();
    loop {
        match producer.next() {
            Step::Yielded(item) => items.push(item),
            Step::Complete(output) => return (items, output),
        }
    }
}

/// Async version of [`drain`].
pub async fn drain_async<P>(mut producer: P) -> (Vec<P::Item>, P::Output)
where
    P: AsyncProducer,
{
    let mut items = Vec::new();
    loop {
        match producer.next().await {
            Step::Yielded(item) => items.push(item),
            Step::Complete(output) => return (items, output),
        }
    }
}

/// Asserts that `producer` keeps reporting exhaustion.
pub fn assert_exhausted<P>(producer: &mut P, calls: usize)
where
    P: Producer,
{
    for call in 0..calls {
        assert!(
            producer.next().is_complete(),
            "producer resurrected on call {call}"
        );
    }
}

/// Async version of [`assert_exhausted`].
pub async fn assert_exhausted_async<P>(producer: &mut P, calls: usize)
where
    P: AsyncProducer,
{
    for call in 0..calls {
        assert!(
            producer.next().await.is_complete(),
            "producer resurrected on call {call}"
        );
    }
}
