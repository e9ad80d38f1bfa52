// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Suspending lazy sequences.
//!
//! This crate implements the [`AsyncProducer`] protocol: every call may
//! suspend, and a chain runs on a single-threaded cooperative scheduler. The
//! stages mirror those of `seqflux-iter` and share their bookkeeping through
//! `seqflux_core::state`, so the two families behave the same way.
//!
//! # Sources
//!
//! - [`from_iter`], [`once`], [`never`]: immediate sources seen through [`Lift`]
//! - [`from_stream`]: any `futures::Stream + Unpin`
//! - [`lift`]: any immediate [`Producer`](seqflux_core::Producer)
//!
//! # Stages
//!
//! | Operator | Closure |
//! |----------|---------|
//! | [`take`](AsyncTakeExt::take) | - |
//! | [`enumerate`](AsyncEnumerateExt::enumerate) | - |
//! | [`map`](AsyncMapExt::map) | returns a future |
//! | [`filter`](AsyncFilterExt::filter) | returns a future of `bool`, `true` drops |
//! | [`filter_map`](AsyncFilterMapExt::filter_map) | returns a future of `Option` |
//! | [`zip`](fn@zip) / [`AsyncZipExt::zip`] | - |
//!
//! Terminal operations take plain closures, except
//! [`for_each`](AsyncConsumeExt::for_each) which awaits its closure.
//!
//! # Example
//!
//! ```rust
//! use seqflux_stream::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let mut chain = from_iter(vec![3, 1, 4, 1, 5])
//!     .map(|x| async move { x * 2 })
//!     .enumerate()
//!     .take(3);
//!
//! assert_eq!(chain.next().await, Step::Yielded((0, 6)));
//! assert_eq!(chain.force_return(()).await, Step::Complete(()));
//! assert_eq!(chain.next().await, Step::Complete(()));
//! # });
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod bridge;
pub mod consume;
pub mod enumerate;
pub mod filter;
pub mod filter_map;
pub mod find;
pub mod fold;
pub mod lift;
pub mod map;
pub mod prelude;
pub mod pull;
pub mod stream_source;
pub mod take;
pub mod zip;

pub use bridge::{blocking, into_stream, settle, Blocking, ProducerStream};
pub use consume::AsyncConsumeExt;
pub use enumerate::{AsyncEnumerateExt, Enumerate};
pub use filter::{AsyncFilterExt, Filter};
pub use filter_map::{AsyncFilterMapExt, FilterMap};
pub use find::AsyncFindExt;
pub use fold::AsyncFoldExt;
pub use lift::{from_iter, lift, never, once, Lift, LiftExt};
pub use map::{AsyncMapExt, Map};
pub use pull::AsyncPullExt;
pub use seqflux_core::{AsyncProducer, SeqfluxError, Step};
pub use stream_source::{from_stream, StreamSource};
pub use take::{AsyncTakeExt, Take};
pub use zip::{zip, AsyncZipExt, Zip, Zip2};
