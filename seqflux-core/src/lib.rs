// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for seqflux lazy sequences.
//!
//! Everything in seqflux speaks one pull protocol made of three calls:
//!
//! - `next` advances by one element or reports exhaustion
//! - `force_return` asks for a cooperative early shutdown
//! - `force_throw` pushes an external failure signal into the chain
//!
//! The protocol exists twice: [`Producer`] for immediate sequences and
//! [`AsyncProducer`] for sequences whose calls may suspend. Both return the
//! same [`Step`] value, and the bookkeeping of every stage lives in
//! [`state`] so that the immediate and the suspending implementations of a
//! stage cannot drift apart.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod async_producer;
pub mod error;
pub mod numeric;
pub mod producer;
pub mod state;
pub mod step;

pub use self::async_producer::AsyncProducer;
pub use self::error::{Result, SeqfluxError};
pub use self::numeric::Numeric;
pub use self::producer::Producer;
pub use self::step::Step;
