//! FIR low-pass design and batch filtering.

pub mod convolve;
pub mod design;
pub mod windows;

pub use convolve::{convolve_full, convolve_same, zero_phase};
pub use design::FirFilter;
pub use windows::{generate_window, WindowType};
