// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors raised while building comparison operands
#[derive(Error, Debug)]
pub enum CoreError {
    /// A tolerance was negative or NaN
    #[error("invalid {name} tolerance: {value}")]
    InvalidTolerance {
        /// Which tolerance (`rel` or `abs`)
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A value could not be serialized into a node
    #[error("cannot convert value to a node: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
