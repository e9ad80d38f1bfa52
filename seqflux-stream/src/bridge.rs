// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Crossings between the immediate family, the suspending family and
//! `futures::Stream`.
//!
//! | From | To | Use |
//! |------|----|-----|
//! | [`Producer`] | [`AsyncProducer`] | [`lift`](crate::lift) |
//! | [`AsyncProducer`] | completed [`IterSource`] | [`settle`] |
//! | [`AsyncProducer`] | [`Producer`] | [`blocking`] |
//! | [`AsyncProducer`] | `Stream` | [`into_stream`] |
//! | [`Producer`] | `Stream` | [`ProducerStream`] |
//! | `Stream` | [`AsyncProducer`] | [`from_stream`](crate::from_stream) |

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::executor::block_on;
use futures::stream::{self, Stream};
use pin_project::pin_project;
use seqflux_core::state::Fuse;
use seqflux_core::{AsyncProducer, Producer, SeqfluxError, Step};
use seqflux_iter::IterSource;

/// Drains a suspending producer into an immediate source over the collected
/// elements.
///
/// The producer's final value is dropped.
///
/// # Examples
///
/// ```rust
/// use seqflux_stream::prelude::*;
///
/// # futures::executor::block_on(async {
/// let settled = settle(from_iter(vec![1, 2, 3])).await;
/// let items: Vec<i32> = seqflux_iter::ConsumeExt::collect(settled);
/// assert_eq!(items, vec![1, 2, 3]);
/// # });
/// ```
pub async fn settle<P>(mut producer: P) -> IterSource<std::vec::IntoIter<P::Item>>
where
    P: AsyncProducer,
{
    let mut items = Vec::new();
    while let Step::Yielded(item) = producer.next().await {
        items.push(item);
    }
    trace!("settled {} elements", items.len());
    IterSource::new(items.into_iter())
}

/// Immediate producer driving a suspending one to completion on every call.
///
/// Each protocol call blocks the current thread with
/// `futures::executor::block_on`. Do not use it from inside an async task:
/// a producer that needs that task's executor to make progress will never
/// complete.
#[derive(Debug)]
pub struct Blocking<P> {
    inner: P,
    fuse: Fuse,
}

impl<P> Blocking<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            fuse: Fuse::new(),
        }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Producer for Blocking<P>
where
    P: AsyncProducer,
{
    type Item = P::Item;
    type Output = P::Output;

    fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        block_on(self.inner.next())
    }

    fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        block_on(self.inner.force_return(value))
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        block_on(self.inner.force_throw(error))
    }
}

pub fn blocking<P>(producer: P) -> Blocking<P>
where
    P: AsyncProducer,
{
    Blocking::new(producer)
}

/// Views a suspending producer as a `futures::Stream`.
///
/// The stream ends at the first exhaustion; the final value is dropped.
pub fn into_stream<P>(producer: P) -> impl Stream<Item = P::Item>
where
    P: AsyncProducer,
{
    stream::unfold(producer, |mut producer| async move {
        match producer.next().await {
            Step::Yielded(item) => Some((item, producer)),
            Step::Complete(_) => None,
        }
    })
}

/// A `futures::Stream` over an immediate producer. It is always ready.
///
/// # Examples
///
/// ```rust
/// use futures::StreamExt;
/// use seqflux_iter::prelude::*;
/// use seqflux_stream::ProducerStream;
///
/// # futures::executor::block_on(async {
/// let squares: Vec<i32> = ProducerStream::new(range(4).map(|x| x * x)).collect().await;
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// # });
/// ```
#[pin_project]
#[derive(Debug)]
pub struct ProducerStream<P> {
    producer: P,
    done: bool,
}

impl<P> ProducerStream<P> {
    pub const fn new(producer: P) -> Self {
        Self {
            producer,
            done: false,
        }
    }

    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> Stream for ProducerStream<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<P::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        match this.producer.next() {
            Step::Yielded(item) => Poll::Ready(Some(item)),
            Step::Complete(_) => {
                *this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

impl<P> futures::stream::FusedStream for ProducerStream<P>
where
    P: Producer,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
