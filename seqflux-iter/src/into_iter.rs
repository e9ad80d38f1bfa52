// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::iter::FusedIterator;
use seqflux_core::Producer;

/// A producer viewed as a native `Iterator`.
///
/// The producer's final value is dropped; use the producer directly when it
/// matters (e.g. for the partial row of a zip).
#[derive(Debug, Clone)]
pub struct ProducerIter<P> {
    producer: P,
}

impl<P> ProducerIter<P> {
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P> Iterator for ProducerIter<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.producer.next().yielded()
    }
}

// Exhausted producers stay exhausted.
impl<P> FusedIterator for ProducerIter<P> where P: Producer {}
