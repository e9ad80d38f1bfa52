// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the seqflux workspace.
//!
//! Designed for tests and benches only, not for production code.
//!
//! # Key Types
//!
//! ## `Probe`
//!
//! Shared counters recording how a source was driven: pulls, forced returns,
//! forced throws and releases. Cloning a probe shares the counters, so a test
//! keeps one handle while the source moves into a chain.
//!
//! ```rust
//! use seqflux_core::{Producer, Step};
//! use seqflux_test_utils::{Probe, ProbedSource};
//!
//! let probe = Probe::new();
//! let mut source = ProbedSource::new(vec![1, 2], &probe);
//!
//! assert_eq!(source.next(), Step::Yielded(1));
//! assert_eq!(source.force_return(()), Step::Complete(()));
//! assert_eq!(probe.pulls(), 1);
//! assert_eq!(probe.releases(), 1);
//! ```
//!
//! ## `Yielding`
//!
//! Lifts any immediate producer into the suspending family, handing control
//! back to the scheduler before every protocol call. Use it to prove a stage
//! behaves the same when its upstream really suspends.

pub mod helpers;
pub mod probe;
pub mod test_data;
pub mod yielding;

pub use probe::{Probe, ProbedSource};
pub use yielding::{AsyncProbedSource, Yielding};
