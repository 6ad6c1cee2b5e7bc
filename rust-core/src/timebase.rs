//! Time-base construction: the fine analog-proxy grid and the critically
//! sampled grid derived from it.

use crate::params::Params;

/// Derived sample grids for one experiment.
///
/// The sampling rate is pinned at exactly twice the one-sided bandwidth —
/// critical (Nyquist) sampling, chosen to expose reconstruction error
/// rather than hide it behind oversampling. It is not a tunable.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBase {
    /// Critical sampling rate 2·B, in Hz.
    pub sample_rate: f64,
    /// Sampling period 1/`sample_rate`, in seconds.
    pub sample_period: f64,
    /// Fine-grid timestamps, centered on zero, spaced 1/`fs_fine`.
    pub t_fine: Vec<f64>,
    /// Sample timestamps, offset by the fractional sampling phase.
    pub t_samples: Vec<f64>,
}

impl TimeBase {
    /// Build both grids from the parameters.
    ///
    /// Pure in bandwidth, duration, fine rate and phase fraction. Sample
    /// counts are rounded to the nearest integer and both grids are affine
    /// maps of the integer index. Degenerate bandwidth or duration must be
    /// rejected beforehand by [`Params::validate`].
    pub fn from_params(params: &Params) -> Self {
        let sample_rate = 2.0 * params.bandwidth_hz;
        let sample_period = 1.0 / sample_rate;
        let half = params.duration_s / 2.0;

        let num_fine = (params.duration_s * params.fine_rate_hz).round() as usize;
        let t_fine = (0..num_fine)
            .map(|i| i as f64 / params.fine_rate_hz - half)
            .collect();

        let num_samples = (params.duration_s * sample_rate).round() as usize;
        let offset = params.phase_frac * sample_period;
        let t_samples = (0..num_samples)
            .map(|n| n as f64 * sample_period - half + offset)
            .collect();

        Self {
            sample_rate,
            sample_period,
            t_fine,
            t_samples,
        }
    }

    /// Number of fine-grid points.
    pub fn fine_len(&self) -> usize {
        self.t_fine.len()
    }

    /// Number of critical-rate samples.
    pub fn sample_count(&self) -> usize {
        self.t_samples.len()
    }
}
