// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wrapper source over a `futures::Stream`.
//!
//! Streams have no notion of forced shutdown. The wrapper supplies it the
//! same way [`IterSource`](seqflux_iter::IterSource) does for iterators:
//! exhaustion and both forced operations drop the stream and fuse the source.

use futures::{Stream, StreamExt};
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Source pulling from a `futures::Stream`.
#[derive(Debug)]
pub struct StreamSource<S> {
    inner: Option<S>,
}

impl<S> StreamSource<S>
where
    S: Stream + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            inner: Some(stream),
        }
    }

    /// `true` until the captured stream has been dropped.
    pub const fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    fn release(&mut self, reason: &str) {
        if self.inner.take().is_some() {
            trace!("stream source released on {reason}");
        }
    }
}

impl<S> AsyncProducer for StreamSource<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;
    type Output = ();

    async fn next(&mut self) -> Step<S::Item> {
        let Some(stream) = self.inner.as_mut() else {
            return Step::Complete(());
        };
        match stream.next().await {
            Some(item) => Step::Yielded(item),
            None => {
                self.release("exhaustion");
                Step::Complete(())
            }
        }
    }

    async fn force_return(&mut self, value: ()) -> Step<S::Item> {
        self.release("forced return");
        Step::Complete(value)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<S::Item> {
        self.release("forced throw");
        debug!("stream source cannot handle thrown error, treating as exhausted: {error}");
        Step::Complete(())
    }
}

/// Wraps a stream as a suspending source.
///
/// Streams that are not `Unpin` can be pinned first with `Box::pin`.
///
/// # Examples
///
/// ```rust
/// use futures::stream;
/// use seqflux_stream::prelude::*;
///
/// # futures::executor::block_on(async {
/// let total = from_stream(stream::iter(1..=4)).sum().await;
/// assert_eq!(total, 10);
/// # });
/// ```
pub fn from_stream<S>(stream: S) -> StreamSource<S>
where
    S: Stream + Unpin,
{
    StreamSource::new(stream)
}
