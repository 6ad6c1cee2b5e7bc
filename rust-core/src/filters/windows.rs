//! Window functions for FIR design.

use std::f64::consts::PI;

/// Window function families used by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(N-1))
    /// Mainlobe width: 8π/N, sidelobe attenuation: ~44 dB
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(N-1))
    /// Mainlobe width: 8π/N, sidelobe attenuation: ~53 dB
    Hamming,
}

/// Generate window coefficients w[n] for n = 0..length-1.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.0; length];
    }
    let denom = (length - 1) as f64;
    (0..length)
        .map(|n| {
            let angle = 2.0 * PI * n as f64 / denom;
            match window_type {
                WindowType::Hann => 0.5 - 0.5 * angle.cos(),
                WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_symmetry() {
        for window_type in [WindowType::Hann, WindowType::Hamming] {
            let w = generate_window(window_type, 161);
            for i in 0..w.len() / 2 {
                assert!((w[i] - w[w.len() - 1 - i]).abs() < 1e-12);
            }
            // Odd length puts the unity peak at the center.
            assert!((w[80] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_endpoints() {
        let hann = generate_window(WindowType::Hann, 101);
        assert!(hann[0].abs() < 1e-12);
        assert!(hann[100].abs() < 1e-12);

        // Hamming keeps nonzero endpoints (0.08).
        let hamming = generate_window(WindowType::Hamming, 101);
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_window(WindowType::Hamming, 0).is_empty());
        assert_eq!(generate_window(WindowType::Hamming, 1), vec![1.0]);
    }
}
