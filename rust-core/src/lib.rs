//! Sampling Workbench - sampling-theorem experiment kernel
//!
//! Pure numeric core for critical-sampling experiments: time-base
//! construction, reference-signal synthesis, windowed-sinc FIR low-pass
//! design, zero-phase filtering, zero-pad and sinc reconstruction, and
//! shifted FFT magnitude spectra. Parameter entry, persistence and
//! rendering are external collaborators: configuration comes in as a
//! [`Params`] value, plotted series go out as plain `Vec<f64>` data.

pub mod error;
pub mod experiment;
pub mod filters;
pub mod numerics;
pub mod params;
pub mod reconstruct;
pub mod signal;
pub mod spectrum;
pub mod timebase;

pub use error::{SamplingError, SamplingResult};
pub use experiment::SamplingExperiment;
pub use filters::{FirFilter, WindowType};
pub use params::{Params, SignalKind};
pub use reconstruct::{Restoration, SincReconstruction};
pub use signal::SignalModel;
pub use spectrum::{magnitude_spectrum, Spectrum};
pub use timebase::TimeBase;
