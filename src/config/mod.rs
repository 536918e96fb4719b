//! Configuration: environment-driven settings and fixed constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
