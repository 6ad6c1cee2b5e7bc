//! Experiment parameters and the persisted parameter record.
//!
//! Parameters arrive from an external store as a flat JSON object keyed by
//! the historical field names (`B`, `T`, `fs_fine`, ...). A partial record
//! is completed from the defaults; a record that fails to parse at all is
//! replaced wholesale by the defaults, with no partial repair.

use serde::{Deserialize, Serialize};

use crate::error::{SamplingError, SamplingResult};

/// Reference waveform selector.
///
/// Dispatched once at synthesis time. The numeric wire encoding (1, 2, 3)
/// is the store's historical format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SignalKind {
    /// Sinusoid at a quarter of the critical sampling rate.
    Sinusoid,
    /// Gaussian pulse with 3 dB bandwidth near the configured bandwidth.
    GaussianPulse,
    /// Rectangle low-pass filtered on the fine grid.
    BandlimitedRect,
}

impl TryFrom<u8> for SignalKind {
    type Error = SamplingError;

    fn try_from(value: u8) -> SamplingResult<Self> {
        match value {
            1 => Ok(Self::Sinusoid),
            2 => Ok(Self::GaussianPulse),
            3 => Ok(Self::BandlimitedRect),
            other => Err(SamplingError::UnknownSignal(other)),
        }
    }
}

impl From<SignalKind> for u8 {
    fn from(kind: SignalKind) -> u8 {
        match kind {
            SignalKind::Sinusoid => 1,
            SignalKind::GaussianPulse => 2,
            SignalKind::BandlimitedRect => 3,
        }
    }
}

/// Immutable inputs of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// One-sided signal bandwidth in Hz.
    #[serde(rename = "B")]
    pub bandwidth_hz: f64,

    /// Analysis window length in seconds.
    #[serde(rename = "T")]
    pub duration_s: f64,

    /// Fine (analog-proxy) sample rate in Hz; must sit well above 2·B.
    #[serde(rename = "fs_fine")]
    pub fine_rate_hz: f64,

    /// Rectangle pulse width in seconds, bandlimited-rect waveform only.
    #[serde(rename = "rect_w")]
    pub rect_width_s: f64,

    /// Windowed-sinc kernel half-width, in sample periods.
    #[serde(rename = "M")]
    pub sinc_half_width: usize,

    /// FIR low-pass length; odd keeps the zero-phase response symmetric.
    #[serde(rename = "Ntap")]
    pub num_taps: usize,

    /// Sampling phase offset as a fraction of the sampling period, in [0, 1].
    #[serde(rename = "phi_frac")]
    pub phase_frac: f64,

    /// Reference waveform selector.
    #[serde(rename = "signal_sel")]
    pub signal: SignalKind,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            bandwidth_hz: 700.0,
            duration_s: 0.03,
            fine_rate_hz: 200_000.0,
            rect_width_s: 0.003,
            sinc_half_width: 12,
            num_taps: 1024,
            phase_frac: 0.30,
            signal: SignalKind::GaussianPulse,
        }
    }
}

impl Params {
    /// Reject degenerate inputs before any grid is built.
    ///
    /// The kernel stages themselves are total functions; this is the one
    /// place where bad values are turned away.
    pub fn validate(&self) -> SamplingResult<()> {
        if !(self.bandwidth_hz > 0.0) {
            return Err(SamplingError::NonPositiveBandwidth(self.bandwidth_hz));
        }
        if !(self.duration_s > 0.0) {
            return Err(SamplingError::NonPositiveDuration(self.duration_s));
        }
        let critical = 2.0 * self.bandwidth_hz;
        if !(self.fine_rate_hz > critical) {
            return Err(SamplingError::FineRateTooLow {
                fine_rate: self.fine_rate_hz,
                critical,
            });
        }
        if self.num_taps == 0 {
            return Err(SamplingError::EmptyFilter);
        }
        if self.sinc_half_width == 0 {
            return Err(SamplingError::ZeroHalfWidth);
        }
        Ok(())
    }

    /// Load parameters from a persisted JSON record.
    ///
    /// Missing fields take their default value and unknown fields are
    /// ignored. A record that does not parse is discarded wholesale in
    /// favor of the defaults. The phase fraction is clamped to [0, 1].
    pub fn from_record_json(raw: &str) -> Params {
        match serde_json::from_str::<Params>(raw) {
            Ok(mut params) => {
                params.phase_frac = params.phase_frac.clamp(0.0, 1.0);
                params
            }
            Err(err) => {
                tracing::warn!("discarding malformed parameter record: {err}");
                Params::default()
            }
        }
    }

    /// Serialize to the flat JSON record format.
    pub fn to_record_json(&self) -> String {
        serde_json::to_string(self).expect("parameter record serialization cannot fail")
    }
}
