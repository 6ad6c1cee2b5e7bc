//! The end-to-end sampling experiment: parameters in, named series out.

use crate::error::SamplingResult;
use crate::filters::FirFilter;
use crate::params::Params;
use crate::reconstruct::{
    reconstruct_sinc, restore_zero_padded, Restoration, SincReconstruction,
};
use crate::signal::{synthesize, SignalModel};
use crate::spectrum::{magnitude_spectrum, Spectrum};
use crate::timebase::TimeBase;

/// One fully computed experiment.
///
/// Everything is derived from the input parameters in a single forward
/// pass: time base → synthesis → filter design → zero-pad restoration →
/// sinc reconstruction. No field is mutated after construction; two runs
/// with equal parameters produce identical output.
#[derive(Debug, Clone)]
pub struct SamplingExperiment {
    pub params: Params,
    pub time_base: TimeBase,
    pub filter: FirFilter,
    pub signal: SignalModel,
    pub restoration: Restoration,
    pub reconstruction: SincReconstruction,
}

impl SamplingExperiment {
    /// Validate the parameters and run the whole pipeline.
    pub fn run(params: Params) -> SamplingResult<Self> {
        params.validate()?;
        let time_base = TimeBase::from_params(&params);
        tracing::debug!(
            "running experiment: {} fine samples, {} critical-rate samples",
            time_base.fine_len(),
            time_base.sample_count()
        );

        let filter =
            FirFilter::lowpass(params.bandwidth_hz, params.fine_rate_hz, params.num_taps);
        let signal = synthesize(&params, &time_base);
        let restoration = restore_zero_padded(&filter, &signal);
        let reconstruction = reconstruct_sinc(&time_base, &signal, params.sinc_half_width);

        Ok(Self {
            params,
            time_base,
            filter,
            signal,
            restoration,
            reconstruction,
        })
    }

    /// Spectrum of the fine-grid reference, against the fine rate.
    pub fn fine_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.signal.fine, self.params.fine_rate_hz)
    }

    /// Spectrum of the sampled sequence, against the critical rate.
    pub fn sampled_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.signal.sampled, self.time_base.sample_rate)
    }

    /// Spectrum of the zero-padded series, against the fine rate.
    pub fn zero_padded_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.signal.zero_padded, self.params.fine_rate_hz)
    }

    /// Spectrum of the low-pass restored waveform.
    pub fn restored_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.restoration.restored, self.params.fine_rate_hz)
    }

    /// Spectrum of the ideal-sinc reconstruction.
    pub fn ideal_reconstruction_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.reconstruction.ideal, self.params.fine_rate_hz)
    }

    /// Spectrum of the windowed-sinc reconstruction.
    pub fn windowed_reconstruction_spectrum(&self) -> Spectrum {
        magnitude_spectrum(&self.reconstruction.windowed, self.params.fine_rate_hz)
    }
}
