//! Lookup tables for the NES APU mixer.
//!
//! The APU sums its five channels through a non-linear resistor network. Rather than evaluate
//! that curve per sample, the output level is precomputed for every reachable combination of the
//! two pulse channels (`PulseTable`) and of the triangle, noise and DMC channels (`TndTable`).
//!
//! ```
//! let tables = neso_mixer::generate().unwrap();
//! assert_eq!(tables.pulse().len(), 31);
//! assert_eq!(tables.tnd().len(), 203);
//!
//! let mixer = neso_mixer::Mixer::from_tables(tables);
//! assert_eq!(mixer.sample(0, 0, 0, 0, 0), 0.0);
//! ```

#[macro_use]
extern crate cfg_if;
#[macro_use]
extern crate log;
#[cfg(not(target_arch = "wasm32"))]
#[macro_use]
extern crate serde_derive;

pub mod apu;
pub mod emit;
mod error;
mod utils;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod wasm;
        pub use self::wasm::WasmMixer;
    }
}

pub use self::apu::{
    build_pulse_table, build_tnd_table, validate, Mixer, MixerTables, PulseTable, TndTable,
};
pub use self::emit::{emit, Format};
#[cfg(not(target_arch = "wasm32"))]
pub use self::emit::load;
pub use self::error::{Error, Result};
pub use self::utils::set_panic_hook;

/// Builds both tables and checks them against the output range.
///
/// # Errors
///
/// Returns `Error::RangeViolation` if the loudest channel combination exceeds full scale.
pub fn generate() -> Result<MixerTables> {
    let tables = MixerTables::from_tables(build_pulse_table(), build_tnd_table())?;
    info!(
        "[Mixer] Generated tables: pulse max {}, tnd max {}.",
        tables.pulse().max(),
        tables.tnd().max()
    );
    Ok(tables)
}
