// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build and consume immediate sequences.
//!
//! ```rust
//! use seqflux_iter::prelude::*;
//! ```

pub use crate::consume::ConsumeExt;
pub use crate::enumerate::EnumerateExt;
pub use crate::filter::FilterExt;
pub use crate::filter_map::FilterMapExt;
pub use crate::find::FindExt;
pub use crate::fold::FoldExt;
pub use crate::iter_source::{from_iter, IntoProducer};
pub use crate::map::MapExt;
pub use crate::never::never;
pub use crate::once::once;
pub use crate::pull::PullExt;
pub use crate::range::{irange, irange_between, irange_step, range, range_between, range_step};
pub use crate::take::TakeExt;
pub use crate::zip::{zip, ZipExt};
pub use seqflux_core::{Producer, SeqfluxError, Step};
