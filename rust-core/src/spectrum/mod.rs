//! Spectral analysis with FFT.

pub mod analysis;
pub mod fft;

pub use analysis::{magnitude_spectrum, magnitude_spectrum_sized, Spectrum, MAG_FLOOR};
pub use fft::FftEngine;
