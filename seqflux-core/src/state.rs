// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stage bookkeeping shared by the immediate and the suspending families.
//!
//! A stage in either family does the same thing around its upstream call:
//! pull, then fold the result into its own state. The folding part lives here
//! and both `seqflux-iter` and `seqflux-stream` call into it, so a `take` or a
//! `zip` behaves identically whether or not its upstream can suspend.

use crate::Step;

/// Shutdown latch of a pass-through stage.
///
/// Once either forced operation went through the stage, `next` must report
/// exhaustion without consulting the upstream again. Upstreams that only
/// implement `next` would otherwise resume after the shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fuse {
    blown: bool,
}

impl Fuse {
    pub const fn new() -> Self {
        Self { blown: false }
    }

    pub const fn is_blown(&self) -> bool {
        self.blown
    }

    /// Records a forced operation.
    pub fn blow(&mut self) {
        self.blown = true;
    }
}

/// Remaining budget of a `take` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: usize,
}

impl Countdown {
    pub const fn new(limit: usize) -> Self {
        Self { remaining: limit }
    }

    /// `true` once the stage must stop consulting its upstream.
    pub const fn is_spent(&self) -> bool {
        self.remaining == 0
    }

    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Accounts for a regular pull. Only successful pulls use up budget.
    pub fn admit<Y, D>(&mut self, step: Step<Y, D>) -> Step<Y, D> {
        if step.is_yielded() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        step
    }

    /// Folds the upstream result of a forced shutdown.
    ///
    /// An element produced while shutting down is only let through if budget
    /// was left before the call. The budget is gone afterwards either way.
    pub fn settle<Y, D: Default>(&mut self, step: Step<Y, D>) -> Step<Y, D> {
        let was_spent = self.is_spent();
        self.remaining = 0;
        match step {
            Step::Yielded(_) if was_spent => Step::done(),
            other => other,
        }
    }
}

/// Running index of an `enumerate` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    next: usize,
}

impl Tally {
    pub const fn starting_at(start: usize) -> Self {
        Self { next: start }
    }

    /// Index the next produced element will get.
    pub const fn peek(&self) -> usize {
        self.next
    }

    /// Pairs a produced element with the running index and advances it.
    ///
    /// The index wraps around to 0 past `usize::MAX`.
    pub fn tag<Y, D>(&mut self, step: Step<Y, D>) -> Step<(usize, Y), D> {
        step.map_yielded(|item| {
            let index = self.next;
            self.next = self.next.wrapping_add(1);
            (index, item)
        })
    }
}

/// One polling round of a homogeneous zip.
///
/// Every member result is recorded, exhausted or not, so the row keeps the
/// position of each member: `Some` for a produced element, `None` as the
/// placeholder of an exhausted member.
#[derive(Debug)]
pub struct ZipRound<T> {
    row: Vec<Option<T>>,
    exhausted: bool,
}

impl<T> ZipRound<T> {
    pub fn with_capacity(members: usize) -> Self {
        Self {
            row: Vec::with_capacity(members),
            exhausted: false,
        }
    }

    pub fn record<D>(&mut self, step: Step<T, D>) {
        match step {
            Step::Yielded(item) => self.row.push(Some(item)),
            Step::Complete(_) => {
                self.exhausted = true;
                self.row.push(None);
            }
        }
    }

    /// Closes a regular round.
    ///
    /// The round is exhausted if any member was, and then the partial row is
    /// the final value. A zip without members is always exhausted.
    pub fn finish(self) -> Step<Vec<T>, Vec<Option<T>>> {
        if self.exhausted || self.row.is_empty() {
            Step::Complete(self.row)
        } else {
            Step::Yielded(self.row.into_iter().flatten().collect())
        }
    }

    /// Closes a shutdown round.
    ///
    /// When no member produced anything the caller's value is handed back,
    /// otherwise the round closes like a regular one.
    pub fn finish_shutdown(self, value: Vec<Option<T>>) -> Step<Vec<T>, Vec<Option<T>>> {
        if self.row.iter().all(Option::is_none) {
            Step::Complete(value)
        } else {
            self.finish()
        }
    }
}

/// Closes a regular round of a two-member zip.
pub fn zip_pair<A, DA, B, DB>(
    left: Step<A, DA>,
    right: Step<B, DB>,
) -> Step<(A, B), (Option<A>, Option<B>)> {
    match (left, right) {
        (Step::Yielded(a), Step::Yielded(b)) => Step::Yielded((a, b)),
        (left, right) => Step::Complete((left.yielded(), right.yielded())),
    }
}

/// Closes a shutdown round of a two-member zip.
pub fn zip_pair_shutdown<A, DA, B, DB>(
    left: Step<A, DA>,
    right: Step<B, DB>,
    value: (Option<A>, Option<B>),
) -> Step<(A, B), (Option<A>, Option<B>)> {
    if left.is_complete() && right.is_complete() {
        Step::Complete(value)
    } else {
        zip_pair(left, right)
    }
}
