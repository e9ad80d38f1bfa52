// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and consume suspending sequences.
//!
//! ```rust
//! use seqflux_stream::prelude::*;
//! ```

pub use crate::bridge::{blocking, into_stream, settle, ProducerStream};
pub use crate::consume::AsyncConsumeExt;
pub use crate::enumerate::AsyncEnumerateExt;
pub use crate::filter::AsyncFilterExt;
pub use crate::filter_map::AsyncFilterMapExt;
pub use crate::find::AsyncFindExt;
pub use crate::fold::AsyncFoldExt;
pub use crate::lift::{from_iter, lift, never, once, LiftExt};
pub use crate::map::AsyncMapExt;
pub use crate::pull::AsyncPullExt;
pub use crate::stream_source::from_stream;
pub use crate::take::AsyncTakeExt;
pub use crate::zip::{zip, AsyncZipExt};
pub use seqflux_core::{AsyncProducer, SeqfluxError, Step};
