// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for matrix, pattern and rule parsing.
//!
//! Geometric evaluation itself never fails; these errors only report
//! malformed text handed in by a caller.

/// Result type alias for relate-lite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building relate-lite values from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A DE-9IM pattern or matrix string is not exactly nine symbols long.
    #[error("DE-9IM string must have 9 symbols, found {0}")]
    InvalidLength(usize),

    /// A pattern string contains a symbol outside `{T, F, *, 0, 1, 2}`.
    #[error("invalid DE-9IM pattern symbol '{symbol}' at index {index}")]
    InvalidPatternSymbol { symbol: char, index: usize },

    /// A matrix string contains a symbol outside `{F, 0, 1, 2}`.
    #[error("invalid DE-9IM matrix symbol '{symbol}' at index {index}")]
    InvalidMatrixSymbol { symbol: char, index: usize },

    /// A boundary node rule name was not recognised.
    #[error("unknown boundary node rule: {0}")]
    UnknownBoundaryNodeRule(String),
}
