// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for seqflux.
//!
//! Exhaustion is never an error: it is reported as [`Step::Complete`](crate::Step).
//! [`SeqfluxError`] covers the remaining cases, which are the failure signal a
//! consumer pushes into a chain with `force_throw` and invalid stage
//! configuration.
//!
//! # Examples
//!
//! ```
//! use seqflux_core::{Result, SeqfluxError};
//!
//! fn check_step(step: i64) -> Result<i64> {
//!     if step == 0 {
//!         return Err(SeqfluxError::invalid_step("step must not be zero"));
//!     }
//!     Ok(step)
//! }
//!
//! assert!(check_step(0).is_err());
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all seqflux operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeqfluxError {
    /// A consumer abandoned the sequence because of a failure outside the chain
    ///
    /// This is what `try_for_each` throws into a producer when its closure fails.
    #[error("Sequence aborted: {reason}")]
    Aborted {
        /// Why the consumer stopped
        reason: String,
    },

    /// Error raised by user code
    ///
    /// Held behind an `Arc` so the error can be fanned out to every member of a zip.
    #[error("User error: {0}")]
    User(#[source] Arc<dyn Error + Send + Sync>),

    /// A range was configured with a step that can never reach its end
    #[error("Invalid range step: {context}")]
    InvalidStep {
        /// Description of the rejected configuration
        context: String,
    },
}

impl SeqfluxError {
    /// Create an abort signal with the given reason
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self::Aborted {
            reason: reason.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::User(Arc::new(error))
    }

    /// Create an invalid-step error with the given context
    pub fn invalid_step(context: impl Into<String>) -> Self {
        Self::InvalidStep {
            context: context.into(),
        }
    }

    /// Check if this is a consumer abort signal
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    /// Check if this wraps a user error
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

/// Specialized Result type for seqflux operations
pub type Result<T> = std::result::Result<T, SeqfluxError>;
