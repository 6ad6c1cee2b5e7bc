//! Real-input FFT engine built on realfft.

use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Forward real-to-complex FFT of a fixed size with reusable buffers.
pub struct FftEngine {
    /// FFT size (number of samples).
    fft_size: usize,

    /// Real FFT processor.
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer.
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum).
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Plan a forward FFT of `fft_size` points.
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = vec![0.0; fft_size];
        let output_buffer = vec![num_complex::Complex::new(0.0, 0.0); fft_size / 2 + 1];

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Magnitude `|X[k]|` for the non-negative bins `k = 0..=fft_size/2`.
    ///
    /// The signal is zero-padded up to the FFT size, or truncated if it is
    /// longer; the remaining bins of a real input follow from conjugate
    /// symmetry.
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        self.output_buffer.iter().map(|c| c.norm()).collect()
    }

    /// Get FFT size.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of non-negative-frequency bins (`fft_size/2 + 1`).
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}
