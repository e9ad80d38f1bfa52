// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Suspending zip.
//!
//! Members are awaited one after the other, left to right, and every member
//! is awaited every round. Rows, partial rows and shutdown fan-out follow the
//! immediate [`zip`](seqflux_iter::zip) exactly.
//!
//! `async fn` trait methods rule out trait objects, so [`Zip`] needs members
//! of one concrete type. Use [`Zip2`] (possibly nested) to combine different
//! types.

use seqflux_core::state::{zip_pair, zip_pair_shutdown, Fuse, ZipRound};
use seqflux_core::{AsyncProducer, SeqfluxError, Step};

/// Suspending stage zipping a homogeneous group of producers.
#[derive(Debug, Clone)]
pub struct Zip<P> {
    members: Vec<P>,
    fuse: Fuse,
}

impl<P> Zip<P>
where
    P: AsyncProducer,
{
    pub fn new(members: Vec<P>) -> Self {
        if members.is_empty() {
            warn!("zip created without members; it is exhausted from the start");
        }
        Self {
            members,
            fuse: Fuse::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<P> AsyncProducer for Zip<P>
where
    P: AsyncProducer,
{
    type Item = Vec<P::Item>;
    type Output = Vec<Option<P::Item>>;

    async fn next(&mut self) -> Step<Self::Item, Self::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.next().await);
        }
        round.finish()
    }

    async fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding forced return to {} members", self.members.len());
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.force_return(P::Output::default()).await);
        }
        round.finish_shutdown(value)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding thrown error to {} members: {error}", self.members.len());
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.force_throw(error.clone()).await);
        }
        round.finish_shutdown(Vec::new())
    }
}

/// Zips any number of suspending producers of the same type.
pub fn zip<I>(members: I) -> Zip<I::Item>
where
    I: IntoIterator,
    I::Item: AsyncProducer,
{
    Zip::new(members.into_iter().collect())
}

/// Suspending stage zipping two producers of possibly different types.
#[derive(Debug, Clone)]
pub struct Zip2<A, B> {
    left: A,
    right: B,
    fuse: Fuse,
}

impl<A, B> Zip2<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            fuse: Fuse::new(),
        }
    }
}

impl<A, B> AsyncProducer for Zip2<A, B>
where
    A: AsyncProducer,
    B: AsyncProducer,
{
    type Item = (A::Item, B::Item);
    type Output = (Option<A::Item>, Option<B::Item>);

    async fn next(&mut self) -> Step<Self::Item, Self::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let left = self.left.next().await;
        let right = self.right.next().await;
        zip_pair(left, right)
    }

    async fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding forced return to both members");
        let left = self.left.force_return(A::Output::default()).await;
        let right = self.right.force_return(B::Output::default()).await;
        zip_pair_shutdown(left, right, value)
    }

    async fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding thrown error to both members: {error}");
        let left = self.left.force_throw(error.clone()).await;
        let right = self.right.force_throw(error).await;
        zip_pair_shutdown(left, right, (None, None))
    }
}

pub trait AsyncZipExt: AsyncProducer + Sized {
    /// Pairs this producer with `other`, awaiting both every round.
    fn zip<B>(self, other: B) -> Zip2<Self, B>
    where
        B: AsyncProducer,
    {
        Zip2::new(self, other)
    }
}

impl<P> AsyncZipExt for P where P: AsyncProducer {}
