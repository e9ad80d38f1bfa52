// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixture data shared by the workspace tests.

/// A sensor reading, used where tests need a non-trivial element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub sensor: &'static str,
    pub value: i64,
}

impl Reading {
    pub const fn new(sensor: &'static str, value: i64) -> Self {
        Self { sensor, value }
    }
}

pub fn letters() -> Vec<&'static str> {
    vec!["a", "b", "c"]
}

pub fn readings() -> Vec<Reading> {
    vec![
        Reading::new("boiler", 71),
        Reading::new("attic", -4),
        Reading::new("boiler", 74),
        Reading::new("cellar", 12),
        Reading::new("attic", -6),
    ]
}
