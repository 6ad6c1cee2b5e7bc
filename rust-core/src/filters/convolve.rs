//! Linear convolution and zero-phase filtering.

/// Full linear convolution, length `x.len() + h.len() - 1`.
pub fn convolve_full(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }
    let mut y = vec![0.0; x.len() + h.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (k, &hk) in h.iter().enumerate() {
            y[i + k] += xi * hk;
        }
    }
    y
}

/// Linear convolution cropped back to `x.len()`, starting at the filter
/// center offset `⌊(|h|-1)/2⌋`.
///
/// This is a same-length *linear* convolution, not a circular one: samples
/// near both ends see the implicit zero padding, so edge artifacts there
/// are expected.
pub fn convolve_same(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return vec![0.0; x.len()];
    }
    let full = convolve_full(x, h);
    let start = (h.len() - 1) / 2;
    full[start..start + x.len()].to_vec()
}

/// Forward-backward filtering: filter, reverse, filter again, reverse again.
///
/// The net phase response is zero (no time shift), at the cost of applying
/// the filter's magnitude response twice.
pub fn zero_phase(h: &[f64], x: &[f64]) -> Vec<f64> {
    let mut forward = convolve_same(x, h);
    forward.reverse();
    let mut backward = convolve_same(&forward, h);
    backward.reverse();
    backward
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_convolve_full_impulse() {
        // Convolving with a delta function returns the input.
        let x = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(convolve_full(&x, &[1.0]), x);
    }

    #[test]
    fn test_convolve_full_shift() {
        let x = vec![1.0, 2.0, 3.0];
        assert_eq!(convolve_full(&x, &[0.0, 1.0]), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_convolve_same_length() {
        let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
        for taps in [1, 3, 5, 31, 101, 257] {
            let h = vec![1.0 / taps as f64; taps];
            assert_eq!(convolve_same(&x, &h).len(), x.len());
        }
    }

    #[test]
    fn test_convolve_same_centered_impulse_is_identity() {
        let x = vec![1.0, -2.0, 3.0, 0.5];
        // Delta at the center of an odd-length kernel.
        let h = vec![0.0, 1.0, 0.0];
        assert_eq!(convolve_same(&x, &h), x);
    }

    #[test]
    fn test_convolve_same_off_center_delta_delays() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        // Delta one position past the center: unit delay after the crop.
        let h = vec![0.0, 0.0, 1.0];
        assert_eq!(convolve_same(&x, &h), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zero_phase_preserves_peak_timing() {
        // A slow sinusoid well inside the passband of a wide moving
        // average keeps its peak position under forward-backward
        // filtering; a single pass would shift it by the group delay.
        let n = 400;
        let x: Vec<f64> = (0..n).map(|i| (2.0 * PI * i as f64 / 200.0).sin()).collect();
        let h = vec![1.0 / 9.0; 9];
        let y = zero_phase(&h, &x);
        // One period away from the edges holds a single peak (i = 250).
        let peak_in = argmax(&x[150..350]) + 150;
        let peak_out = argmax(&y[150..350]) + 150;
        assert!(
            (peak_in as i64 - peak_out as i64).abs() <= 1,
            "peak moved from {} to {}",
            peak_in,
            peak_out
        );
    }

    #[test]
    fn test_zero_phase_empty_input() {
        assert!(zero_phase(&[1.0, 2.0], &[]).is_empty());
    }

    fn argmax(x: &[f64]) -> usize {
        let mut best = 0;
        for (i, &v) in x.iter().enumerate() {
            if v > x[best] {
                best = i;
            }
        }
        best
    }
}
