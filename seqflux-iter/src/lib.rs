// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Immediate lazy sequences.
//!
//! This crate implements the [`Producer`] protocol for sequences that never
//! suspend: sources, transformation stages and terminal operations. Every
//! operator is provided by its own extension trait, all of which are gathered
//! in the [`prelude`].
//!
//! # Sources
//!
//! - [`from_iter`] / [`IntoProducer::into_producer`]: wrap any native iterable
//! - [`once`]: a single value
//! - [`never`]: exhausted from the start
//! - [`range`], [`irange`] and friends: arithmetic progressions
//!
//! # Stages
//!
//! | Operator | Emits |
//! |----------|-------|
//! | [`take`](TakeExt::take) | at most `n` elements |
//! | [`enumerate`](EnumerateExt::enumerate) | `(index, element)` pairs |
//! | [`map`](MapExt::map) | transformed elements |
//! | [`filter`](FilterExt::filter) | elements the predicate does **not** match |
//! | [`filter_map`](FilterMapExt::filter_map) | `Some` payloads |
//! | [`zip`](fn@zip) / [`ZipExt::zip`] | one row per round across members |
//!
//! # Terminal operations
//!
//! [`opt_next`](PullExt::opt_next), [`nth`](PullExt::nth),
//! [`fold`](FoldExt::fold), [`reduce`](FoldExt::reduce),
//! [`sum`](FoldExt::sum), [`min`](FoldExt::min), [`max`](FoldExt::max),
//! [`all`](FoldExt::all), [`any`](FoldExt::any), [`find`](FindExt::find),
//! [`find_map`](FindExt::find_map), [`for_each`](ConsumeExt::for_each),
//! [`try_for_each`](ConsumeExt::try_for_each), [`collect`](ConsumeExt::collect),
//! [`count`](ConsumeExt::count).
//!
//! # Early shutdown
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//!
//! let mut chain = vec![1, 2, 3, 4].into_producer().map(|x| x * 10).filter(|x| *x == 20);
//!
//! assert_eq!(chain.next(), Step::Yielded(10));
//! assert_eq!(chain.force_return(()), Step::Complete(()));
//! assert_eq!(chain.next(), Step::Complete(()));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod consume;
pub mod enumerate;
pub mod filter;
pub mod filter_map;
pub mod find;
pub mod fold;
pub mod into_iter;
pub mod iter_source;
pub mod map;
pub mod never;
pub mod once;
pub mod prelude;
pub mod pull;
pub mod range;
pub mod take;
pub mod zip;

pub use consume::ConsumeExt;
pub use enumerate::{Enumerate, EnumerateExt};
pub use filter::{Filter, FilterExt};
pub use filter_map::{FilterMap, FilterMapExt};
pub use find::FindExt;
pub use fold::FoldExt;
pub use into_iter::ProducerIter;
pub use iter_source::{from_iter, IntoProducer, IterSource};
pub use map::{Map, MapExt};
pub use never::{never, Never};
pub use once::{once, Once};
pub use pull::PullExt;
pub use range::{irange, irange_between, irange_step, range, range_between, range_step, Range};
pub use seqflux_core::{Producer, SeqfluxError, Step};
pub use take::{Take, TakeExt};
pub use zip::{zip, Zip, Zip2, ZipExt};
