// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator - pulls one element from every member per round.
//!
//! Members are polled left to right and **every member is polled every
//! round**, even after one of them reported exhaustion. A round in which any
//! member was exhausted reports exhaustion, and the final value is the partial
//! row: `Some(item)` for members that still produced, `None` for the exhausted
//! ones.
//!
//! Forced operations fan out to every member unconditionally.
//!
//! [`Zip`] holds any number of members of one type (use
//! `Box<dyn Producer<..>>` to mix concrete types); [`Zip2`] pairs two
//! producers of different types.
//!
//! # Examples
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! let mut rows = zip(vec![range(2), range(3)]);
//!
//! assert_eq!(rows.next(), Step::Yielded(vec![0, 0]));
//! assert_eq!(rows.next(), Step::Yielded(vec![1, 1]));
//! assert_eq!(rows.next(), Step::Complete(vec![None, Some(2)]));
//! ```

use seqflux_core::state::{zip_pair, zip_pair_shutdown, Fuse, ZipRound};
use seqflux_core::{Producer, SeqfluxError, Step};

/// Stage zipping a homogeneous group of producers.
#[derive(Debug, Clone)]
pub struct Zip<P> {
    members: Vec<P>,
    fuse: Fuse,
}

impl<P> Zip<P>
where
    P: Producer,
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

impl<P> Producer for Zip<P>
where
    P: Producer,
{
    type Item = Vec<P::Item>;
    type Output = Vec<Option<P::Item>>;

    fn next(&mut self) -> Step<Self::Item, Self::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.next());
        }
        round.finish()
    }

    fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding forced return to {} members", self.members.len());
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.force_return(P::Output::default()));
        }
        round.finish_shutdown(value)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding thrown error to {} members: {error}", self.members.len());
        let mut round = ZipRound::with_capacity(self.members.len());
        for member in &mut self.members {
            round.record(member.force_throw(error.clone()));
        }
        round.finish_shutdown(Vec::new())
    }
}

/// Zips any number of producers of the same type.
pub fn zip<I>(members: I) -> Zip<I::Item>
where
    I: IntoIterator,
    I::Item: Producer,
{
    Zip::new(members.into_iter().collect())
}

/// Stage zipping two producers of possibly different types.
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

impl<A, B> Producer for Zip2<A, B>
where
    A: Producer,
    B: Producer,
{
    type Item = (A::Item, B::Item);
    type Output = (Option<A::Item>, Option<B::Item>);

    fn next(&mut self) -> Step<Self::Item, Self::Output> {
        if self.fuse.is_blown() {
            return Step::done();
        }
        let left = self.left.next();
        let right = self.right.next();
        zip_pair(left, right)
    }

    fn force_return(&mut self, value: Self::Output) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding forced return to both members");
        let left = self.left.force_return(A::Output::default());
        let right = self.right.force_return(B::Output::default());
        zip_pair_shutdown(left, right, value)
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<Self::Item, Self::Output> {
        self.fuse.blow();
        debug!("zip forwarding thrown error to both members: {error}");
        let left = self.left.force_throw(error.clone());
        let right = self.right.force_throw(error);
        zip_pair_shutdown(left, right, (None, None))
    }
}

/// Extension trait providing the pairwise `zip` operator.
pub trait ZipExt: Producer + Sized {
    /// Pairs this producer with `other`, polling both every round.
    fn zip<B>(self, other: B) -> Zip2<Self, B>
    where
        B: Producer,
    {
        Zip2::new(self, other)
    }
}

impl<P> ZipExt for P where P: Producer {}
