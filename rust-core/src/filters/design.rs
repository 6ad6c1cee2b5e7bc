//! FIR low-pass design using the windowing method.

use super::convolve::{convolve_same, zero_phase};
use super::windows::{generate_window, WindowType};
use crate::numerics::sinc;

/// A designed FIR low-pass: symmetric taps with unit DC gain.
#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    taps: Vec<f64>,
}

impl FirFilter {
    /// Design a low-pass by the window method.
    ///
    /// # Algorithm
    /// 1. Ideal impulse response `h[n] = 2·fc·sinc(2·fc·(n − (N−1)/2))`
    ///    with the cutoff `fc = bandwidth / sample_rate` in cycles/sample
    /// 2. Taper by a Hamming window of the same length
    /// 3. Normalize to unit tap sum (unity DC gain)
    ///
    /// A windowed response that sums to exactly zero is left unnormalized
    /// (the guard divides by 1): the result is a defined all-zero filter,
    /// not an error.
    pub fn lowpass(bandwidth_hz: f64, sample_rate_hz: f64, num_taps: usize) -> Self {
        let fc = bandwidth_hz / sample_rate_hz;
        let center = (num_taps as f64 - 1.0) / 2.0;
        let window = generate_window(WindowType::Hamming, num_taps);

        let mut taps: Vec<f64> = (0..num_taps)
            .map(|n| {
                let offset = n as f64 - center;
                2.0 * fc * sinc(2.0 * fc * offset) * window[n]
            })
            .collect();

        let sum: f64 = taps.iter().sum();
        let norm = if sum == 0.0 { 1.0 } else { sum };
        for tap in taps.iter_mut() {
            *tap /= norm;
        }

        tracing::debug!(
            "designed {num_taps}-tap low-pass, fc = {fc:.6} cycles/sample"
        );
        Self { taps }
    }

    /// Filter coefficients h[n].
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Filter length.
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// Group delay of the symmetric (linear-phase) response, in samples.
    pub fn group_delay_samples(&self) -> f64 {
        self.taps.len().saturating_sub(1) as f64 / 2.0
    }

    /// Same-length single-pass filtering.
    pub fn filter(&self, x: &[f64]) -> Vec<f64> {
        convolve_same(x, &self.taps)
    }

    /// Zero-phase forward-backward filtering (magnitude response squared,
    /// no net delay).
    pub fn filtfilt(&self, x: &[f64]) -> Vec<f64> {
        zero_phase(&self.taps, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowpass_unit_dc_gain() {
        let filter = FirFilter::lowpass(700.0, 200_000.0, 1024);
        let sum: f64 = filter.taps().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "tap sum {}", sum);
    }

    #[test]
    fn test_lowpass_symmetry() {
        for taps in [63, 64, 1024, 1025] {
            let filter = FirFilter::lowpass(700.0, 200_000.0, taps);
            let h = filter.taps();
            for i in 0..h.len() / 2 {
                assert!(
                    (h[i] - h[h.len() - 1 - i]).abs() < 1e-12,
                    "not symmetric at {} for {} taps",
                    i,
                    taps
                );
            }
        }
    }

    #[test]
    fn test_lowpass_center_tap_dominates() {
        let filter = FirFilter::lowpass(700.0, 200_000.0, 1025);
        let h = filter.taps();
        let center = h.len() / 2;
        for (i, &tap) in h.iter().enumerate() {
            assert!(tap.abs() <= h[center] + 1e-15, "tap {} above center", i);
        }
    }

    #[test]
    fn test_zero_bandwidth_hits_the_sum_guard() {
        // fc = 0 makes every windowed tap zero; the guard divides by 1 and
        // hands back the all-zero filter instead of NaN.
        let filter = FirFilter::lowpass(0.0, 200_000.0, 64);
        assert!(filter.taps().iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_group_delay() {
        let filter = FirFilter::lowpass(700.0, 200_000.0, 101);
        assert_eq!(filter.group_delay_samples(), 50.0);
    }

    #[test]
    fn test_filter_passes_dc() {
        // Unity DC gain: a constant comes through unchanged away from the
        // cropped edges.
        let filter = FirFilter::lowpass(700.0, 200_000.0, 101);
        let x = vec![1.0; 500];
        let y = filter.filter(&x);
        assert_eq!(y.len(), x.len());
        for &v in &y[150..350] {
            assert!((v - 1.0).abs() < 1e-9);
        }
    }
}
