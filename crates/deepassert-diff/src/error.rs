// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors raised by the diff engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The trees nest deeper than [`DiffOptions::max_depth`](crate::DiffOptions::max_depth)
    #[error("depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded {
        /// Path where the limit was hit
        path: String,
        /// Configured limit
        limit: usize,
    },
}
