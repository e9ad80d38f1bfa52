// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflux_core::AsyncProducer;

/// Extension trait providing single-element pulls wrapped as `Option`.
#[allow(async_fn_in_trait)]
pub trait AsyncPullExt: AsyncProducer {
    /// Pulls one element; `None` on exhaustion.
    async fn opt_next(&mut self) -> Option<Self::Item> {
        self.next().await.yielded()
    }

    /// Skips `n` elements and pulls the next one.
    async fn nth(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.opt_next().await?;
        }
        self.opt_next().await
    }
}

impl<P> AsyncPullExt for P where P: AsyncProducer {}
