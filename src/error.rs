use std::io;
use std::result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The loudest possible mixer output would exceed full scale.
    #[error(
        "[Tables] Mixer output out of range: max pulse {pulse_max} + max tnd {tnd_max} = {sum} > 1."
    )]
    RangeViolation {
        pulse_max: f32,
        tnd_max: f32,
        sum: f32,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = result::Result<T, Error>;
