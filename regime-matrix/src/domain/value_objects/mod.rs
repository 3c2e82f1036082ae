mod regime_label;
mod sample;

pub use regime_label::{MAX_LABEL_LEN, RegimeLabel};
pub use sample::Sample;
