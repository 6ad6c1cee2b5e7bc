//! Error types for the kernel boundary.

use thiserror::Error;

/// Errors raised when validating externally supplied values.
///
/// The numeric kernel itself never fails: normalizations are guarded and
/// out-of-range sample placements are dropped. `Result` only appears at the
/// boundary, before any computation starts.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// One-sided bandwidth must be positive.
    #[error("bandwidth must be positive, got {0} Hz")]
    NonPositiveBandwidth(f64),

    /// Analysis window length must be positive.
    #[error("analysis window must be positive, got {0} s")]
    NonPositiveDuration(f64),

    /// The fine grid must be strictly denser than the critical-rate grid.
    #[error("fine rate {fine_rate} Hz must exceed the critical rate {critical} Hz")]
    FineRateTooLow { fine_rate: f64, critical: f64 },

    /// FIR design needs at least one tap.
    #[error("filter needs at least one tap")]
    EmptyFilter,

    /// The windowed-sinc kernel needs at least one sample period of support.
    #[error("sinc kernel half-width must be at least one sample period")]
    ZeroHalfWidth,

    /// Explicit FFT size is not a power of two.
    #[error("FFT size must be a power of two, got {0}")]
    InvalidFftSize(usize),

    /// Signal selector outside the known set.
    #[error("unknown signal selector {0}")]
    UnknownSignal(u8),
}

/// Result type for kernel-boundary operations.
pub type SamplingResult<T> = Result<T, SamplingError>;
