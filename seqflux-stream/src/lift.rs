// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Immediate producers seen through the suspending protocol.
//!
//! [`Lift`] forwards every call to the wrapped [`Producer`] and never
//! suspends. The immediate sources (`once`, `never`, native iterables) enter
//! this family through it.

use seqflux_core::state::Fuse;
use seqflux_core::{AsyncProducer, Producer, SeqfluxError, Step};
use seqflux_iter::{IntoProducer, IterSource, Never, Once};

/// Suspending producer over an immediate one.
#[derive(Debug, Clone)]
pub struct Lift<P> {
    inner: P,
    fuse: Fuse,
}

impl<P> Lift<P> {
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

impl<P> AsyncProducer for Lift<P>
where
    P: Producer,
{
    type Item = P::Item;
    type Output = P::Output;

    async fn next(&mut self) -> Step<P::Item, P::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        self.inner.next()
    }

    async fn force_return(&mut self, value: P::Output) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        self.inner.force_return(value)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<P::Item, P::Output> {
        self.fuse.blow();
        self.inner.force_throw(error)
    }
}

/// Wraps any immediate producer as a suspending one.
pub fn lift<P>(producer: P) -> Lift<P>
where
    P: Producer,
{
    Lift::new(producer)
}

/// Wraps anything iterable as a suspending source.
///
/// # Examples
///
/// ```rust
/// use seqflux_stream::prelude::*;
///
/// # futures::executor::block_on(async {
/// let doubled: Vec<i32> = from_iter(vec![1, 2, 3]).map(|x| async move { x * 2 }).collect().await;
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # });
/// ```
pub fn from_iter<T>(iterable: T) -> Lift<IterSource<T::IntoIter>>
where
    T: IntoIterator,
{
    Lift::new(iterable.into_producer())
}

/// Suspending source producing a single value.
pub fn once<T>(value: T) -> Lift<Once<T>> {
    Lift::new(seqflux_iter::once(value))
}

/// Suspending source that is exhausted from the start.
pub fn never<T>() -> Lift<Never<T>> {
    Lift::new(seqflux_iter::never())
}

/// Extension trait lifting an immediate producer into the suspending family.
pub trait LiftExt: Producer + Sized {
    fn lift(self) -> Lift<Self> {
        Lift::new(self)
    }
}

impl<P> LiftExt for P where P: Producer {}
