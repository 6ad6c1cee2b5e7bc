//! Reconstruction of the fine-grid waveform from its critical-rate
//! samples: low-pass restoration of the zero-padded series and direct
//! sinc-sum interpolation.

pub mod sinc_interp;
pub mod zero_pad;

pub use sinc_interp::{reconstruct_sinc, SincReconstruction};
pub use zero_pad::{restore_zero_padded, Restoration};
