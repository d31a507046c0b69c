//! Stereo effects and the output VCA.
//!
//! All effects process one [`crate::Block`] per channel in place, except the
//! VCA which also spreads a mono voice to stereo.

pub mod amp;
pub mod bitcrusher;
pub mod chorus;
pub mod delay;
pub mod distortion;
pub mod formant;
pub mod tone;

pub use amp::AmpParams;
pub use bitcrusher::{BitcrusherParams, BitcrusherState};
pub use chorus::{ChorusParams, ChorusState};
pub use delay::{StereoDelayParams, StereoDelayState};
pub use distortion::DistortionParams;
pub use formant::{FormantParams, FormantState};
pub use tone::{ToneParams, ToneState};
