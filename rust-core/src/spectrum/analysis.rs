//! Shifted, peak-normalized magnitude spectra in dB.

use super::fft::FftEngine;
use crate::error::{SamplingError, SamplingResult};

/// Floor added to the normalized magnitude before the log, keeping exact
/// zeros at `20·log10(1e-12)` instead of −∞.
pub const MAG_FLOOR: f64 = 1e-12;

/// A frequency-shifted magnitude spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin frequencies in Hz, zero-centered: `f[i] = (i − N/2)·(Fs/N)`.
    pub freqs: Vec<f64>,
    /// Peak-normalized magnitude in dB.
    pub mag_db: Vec<f64>,
}

impl Spectrum {
    /// Crop to the bins whose frequency lies in `[f_lo, f_hi]`.
    pub fn band(&self, f_lo: f64, f_hi: f64) -> Spectrum {
        let (freqs, mag_db) = self
            .freqs
            .iter()
            .zip(self.mag_db.iter())
            .filter(|&(&f, _)| f >= f_lo && f <= f_hi)
            .map(|(&f, &m)| (f, m))
            .unzip();
        Spectrum { freqs, mag_db }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

/// Magnitude spectrum with the FFT size taken as the next power of two of
/// the signal length.
pub fn magnitude_spectrum(signal: &[f64], sample_rate_hz: f64) -> Spectrum {
    let fft_size = signal.len().max(1).next_power_of_two();
    shifted_spectrum(signal, sample_rate_hz, fft_size)
}

/// Magnitude spectrum with an explicit FFT size.
///
/// The size must be a power of two; anything else is rejected here rather
/// than silently corrupting the result.
pub fn magnitude_spectrum_sized(
    signal: &[f64],
    sample_rate_hz: f64,
    fft_size: usize,
) -> SamplingResult<Spectrum> {
    if !fft_size.is_power_of_two() {
        return Err(SamplingError::InvalidFftSize(fft_size));
    }
    Ok(shifted_spectrum(signal, sample_rate_hz, fft_size))
}

fn shifted_spectrum(signal: &[f64], sample_rate_hz: f64, fft_size: usize) -> Spectrum {
    let mut engine = FftEngine::new(fft_size);
    let mag = engine.compute_magnitude(signal);

    // Peak over the non-negative bins is the global peak: a real input has
    // a conjugate-symmetric spectrum.
    let peak = mag.iter().fold(0.0f64, |m, &v| m.max(v));
    let norm = if peak == 0.0 { 1.0 } else { peak };

    let half = fft_size / 2;
    let step = sample_rate_hz / fft_size as f64;
    let mut freqs = Vec::with_capacity(fft_size);
    let mut mag_db = Vec::with_capacity(fft_size);
    for i in 0..fft_size {
        // Shifted bin i maps onto non-negative bin |i − N/2|.
        let bin = if i < half { half - i } else { i - half };
        let normalized = mag[bin] / norm;
        freqs.push((i as f64 - half as f64) * step);
        mag_db.push(20.0 * (normalized + MAG_FLOOR).log10());
    }

    Spectrum { freqs, mag_db }
}
