//! Reference-waveform synthesis on the fine and sampled grids.

use std::f64::consts::PI;

use crate::filters::FirFilter;
use crate::numerics::{interp_linear, normalize_peak};
use crate::params::{Params, SignalKind};
use crate::timebase::TimeBase;

/// The synthesized signal set of one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalModel {
    /// Reference waveform on the fine grid.
    pub fine: Vec<f64>,
    /// The same waveform at the sample timestamps.
    pub sampled: Vec<f64>,
    /// Fine-grid sequence, zero everywhere except at the fine-grid cell
    /// nearest each sample timestamp, which carries `fine`'s value there.
    pub zero_padded: Vec<f64>,
}

/// Synthesize the selected reference waveform on both grids and derive the
/// zero-padded series.
///
/// Pure: identical parameters produce bit-identical output.
pub fn synthesize(params: &Params, time_base: &TimeBase) -> SignalModel {
    let (fine, sampled) = match params.signal {
        SignalKind::Sinusoid => sinusoid(time_base),
        SignalKind::GaussianPulse => gaussian_pulse(params, time_base),
        SignalKind::BandlimitedRect => bandlimited_rect(params, time_base),
    };
    let zero_padded = place_samples(params, time_base, &fine);
    SignalModel {
        fine,
        sampled,
        zero_padded,
    }
}

/// Sinusoid at a quarter of the critical sampling rate, evaluated in
/// closed form on both grids — exact, no interpolation error.
fn sinusoid(time_base: &TimeBase) -> (Vec<f64>, Vec<f64>) {
    let f0 = time_base.sample_rate / 4.0;
    let eval = |t: f64| (2.0 * PI * f0 * t).sin();
    let fine = time_base.t_fine.iter().map(|&t| eval(t)).collect();
    let sampled = time_base.t_samples.iter().map(|&t| eval(t)).collect();
    (fine, sampled)
}

/// Gaussian pulse whose 3 dB bandwidth sits near the configured bandwidth:
/// σ_t = √(ln 2)/(π·B). Each grid's peak is normalized to 1 independently.
fn gaussian_pulse(params: &Params, time_base: &TimeBase) -> (Vec<f64>, Vec<f64>) {
    let sigma_t = (2.0f64.ln()).sqrt() / (PI * params.bandwidth_hz);
    let eval = |t: f64| (-0.5 * (t / sigma_t).powi(2)).exp();

    let mut fine: Vec<f64> = time_base.t_fine.iter().map(|&t| eval(t)).collect();
    normalize_peak(&mut fine);

    let mut sampled: Vec<f64> = time_base.t_samples.iter().map(|&t| eval(t)).collect();
    normalize_peak(&mut sampled);

    (fine, sampled)
}

/// Unit rectangle of the configured width, low-pass filtered on the fine
/// grid and peak-normalized. The sampled sequence is *resampled from the
/// fine waveform* by linear interpolation — there is no closed form for it
/// after filtering.
fn bandlimited_rect(params: &Params, time_base: &TimeBase) -> (Vec<f64>, Vec<f64>) {
    let half_width = params.rect_width_s / 2.0;
    let rect: Vec<f64> = time_base
        .t_fine
        .iter()
        .map(|&t| if t.abs() <= half_width { 1.0 } else { 0.0 })
        .collect();

    let filter = FirFilter::lowpass(params.bandwidth_hz, params.fine_rate_hz, params.num_taps);
    let mut fine = filter.filter(&rect);
    normalize_peak(&mut fine);

    let sampled = time_base
        .t_samples
        .iter()
        .map(|&t| interp_linear(&time_base.t_fine, &fine, t))
        .collect();

    (fine, sampled)
}

/// Place each sample onto the nearest fine-grid cell.
///
/// The cell index is `round((t_samp + T/2)·fs_fine)`; indices outside
/// `[0, Nf)` are dropped silently. This emulates sample placement, not
/// exact sample-and-hold — the rounding error is expected.
fn place_samples(params: &Params, time_base: &TimeBase, fine: &[f64]) -> Vec<f64> {
    let mut padded = vec![0.0; fine.len()];
    let half = params.duration_s / 2.0;
    for &t in &time_base.t_samples {
        let idx = ((t + half) * params.fine_rate_hz).round();
        if idx >= 0.0 && (idx as usize) < fine.len() {
            let idx = idx as usize;
            padded[idx] = fine[idx];
        }
    }
    padded
}
