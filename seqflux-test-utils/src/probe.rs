// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::{Producer, SeqfluxError, Step};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    pulls: Cell<usize>,
    returns: Cell<usize>,
    throws: Cell<usize>,
    releases: Cell<usize>,
    last_error: RefCell<Option<SeqfluxError>>,
}

/// Shared record of the protocol calls that reached a [`ProbedSource`].
#[derive(Debug, Clone, Default)]
pub struct Probe {
    counts: Rc<Counts>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `next` calls.
    pub fn pulls(&self) -> usize {
        self.counts.pulls.get()
    }

    /// Number of `force_return` calls.
    pub fn returns(&self) -> usize {
        self.counts.returns.get()
    }

    /// Number of `force_throw` calls.
    pub fn throws(&self) -> usize {
        self.counts.throws.get()
    }

    /// Number of times the source dropped its remaining items.
    pub fn releases(&self) -> usize {
        self.counts.releases.get()
    }

    /// Error carried by the most recent `force_throw`.
    pub fn last_error(&self) -> Option<SeqfluxError> {
        self.counts.last_error.borrow().clone()
    }

    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// Source over a fixed list of items that records every protocol call.
///
/// The items are released once, on exhaustion or on the first forced
/// operation. A parting item, if set, is what the source still hands out when
/// it is first forced to shut down, like a generator yielding from its
/// cleanup block.
#[derive(Debug)]
pub struct ProbedSource<T> {
    items: Option<VecDeque<T>>,
    parting: Option<T>,
    probe: Probe,
}

impl<T> ProbedSource<T> {
    pub fn new(items: impl IntoIterator<Item = T>, probe: &Probe) -> Self {
        Self {
            items: Some(items.into_iter().collect()),
            parting: None,
            probe: probe.clone(),
        }
    }

    /// Hands `item` out on the first forced shutdown instead of completing.
    pub fn with_parting(mut self, item: T) -> Self {
        self.parting = Some(item);
        self
    }

    fn release(&mut self) {
        if self.items.take().is_some() {
            Probe::bump(&self.probe.counts.releases);
        }
    }

    fn shut_down(&mut self) -> Step<T> {
        let was_live = self.items.is_some();
        self.release();
        match self.parting.take() {
            Some(item) if was_live => Step::Yielded(item),
            _ => Step::Complete(()),
        }
    }
}

impl<T> Producer for ProbedSource<T> {
    type Item = T;
    type Output = ();

    fn next(&mut self) -> Step<T> {
        Probe::bump(&self.probe.counts.pulls);
        let Some(items) = self.items.as_mut() else {
            return Step::Complete(());
        };
        match items.pop_front() {
            Some(item) => Step::Yielded(item),
            None => {
                self.release();
                Step::Complete(())
            }
        }
    }

    fn force_return(&mut self, _value: ()) -> Step<T> {
        Probe::bump(&self.probe.counts.returns);
        self.shut_down()
    }

    fn force_throw(&mut self, error: SeqfluxError) -> Step<T> {
        Probe::bump(&self.probe.counts.throws);
        *self.probe.counts.last_error.borrow_mut() = Some(error);
        self.shut_down()
    }
}
