// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Seqflux
//!
//! Composable lazy sequences over a single pull protocol.
//!
//! ## Overview
//!
//! A sequence is a chain of stages ending at a source. Nothing happens until a
//! terminal operation pulls: each stage asks its upstream for one element,
//! transforms it and hands it on. Two families share the protocol:
//!
//! - [`iter`]: immediate producers ([`Producer`]) that never suspend
//! - [`stream`]: suspending producers ([`AsyncProducer`]) for async code
//!
//! Besides `next`, every producer understands `force_return` and
//! `force_throw`. They shut a chain down early from the outside, and the
//! shutdown travels upstream so every source releases what it holds exactly
//! once.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqflux::iter::prelude::*;
//!
//! let squares_of_odds: Vec<i32> = range(10)
//!     .filter(|x| x % 2 == 0) // drops the even numbers
//!     .map(|x| x * x)
//!     .take(3)
//!     .collect();
//!
//! assert_eq!(squares_of_odds, vec![1, 9, 25]);
//! ```
//!
//! The same chain, suspending:
//!
//! ```rust
//! use seqflux::stream::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let squares_of_odds: Vec<i32> = lift(seqflux::iter::range(10))
//!     .filter(|x| {
//!         let even = x % 2 == 0;
//!         async move { even }
//!     })
//!     .map(|x| async move { x * x })
//!     .take(3)
//!     .collect()
//!     .await;
//!
//! assert_eq!(squares_of_odds, vec![1, 9, 25]);
//! # });
//! ```

pub use seqflux_core::{AsyncProducer, Numeric, Producer, Result, SeqfluxError, Step};

/// Immediate sequences.
pub mod iter {
    pub use seqflux_iter::*;
}

/// Suspending sequences and `futures::Stream` bridges.
pub mod stream {
    pub use seqflux_stream::*;
}

/// Stage bookkeeping shared by both families.
pub use seqflux_core::state;
