// src/error.rs
//
// Typed failures surfaced by the pitch-estimation core.

use thiserror::Error;

/// Why a clip could not be measured or classified.
///
/// Every estimator reports its own failure; nothing in the core turns one of
/// these into a guessed frequency.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PitchError {
    /// The decoded buffer is missing, empty, or structurally invalid.
    #[error("unreadable input: {0}")]
    UnreadableInput(String),

    /// The three-point parabola around `index` has no vertex.
    #[error("parabolic fit undefined at index {index}: {reason}")]
    DomainError { index: usize, reason: &'static str },

    /// Autocorrelation decreases monotonically from lag 0.
    #[error("autocorrelation never rises after lag 0")]
    NoRisingEdge,

    /// Fewer than two rising zero crossings were found.
    #[error("found {found} rising zero crossing(s), need at least 2")]
    NoCrossings { found: usize },

    /// A period or interval collapsed to zero.
    #[error("division by zero computing {0}")]
    DivideByZero(&'static str),
}

pub type PitchResult<T> = std::result::Result<T, PitchError>;
