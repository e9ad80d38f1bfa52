// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Result of a single pull: either a produced element or exhaustion.
///
/// Exhaustion is a normal result, not a failure. It carries the producer's
/// final value (`D`), which is `()` for plain sources.
///
/// # Examples
///
/// ```rust
/// use seqflux_core::Step;
///
/// let produced: Step<i32> = Step::Yielded(42);
/// let finished: Step<i32> = Step::Complete(());
///
/// assert_eq!(produced.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The producer advanced by one element
    Yielded(Y),
    /// The producer is exhausted
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if this is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if this is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding the final value.
    #[inline]
    pub fn yielded(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<D>`, discarding a produced element.
    #[inline]
    pub fn complete(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the produced element, leaving exhaustion untouched.
    #[inline]
    pub fn map_yielded<U, F>(self, f: F) -> Step<U, D>
    where
        F: FnOnce(Y) -> U,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the final value, leaving a produced element untouched.
    #[inline]
    pub fn map_complete<E, F>(self, f: F) -> Step<Y, E>
    where
        F: FnOnce(D) -> E,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the produced element, panicking on exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    #[track_caller]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }
}

impl<Y, D: Default> Step<Y, D> {
    /// Shorthand for an exhaustion carrying the default final value.
    #[inline]
    pub fn done() -> Self {
        Step::Complete(D::default())
    }
}

impl<Y, D> From<Step<Y, D>> for Option<Y> {
    fn from(step: Step<Y, D>) -> Self {
        step.yielded()
    }
}
