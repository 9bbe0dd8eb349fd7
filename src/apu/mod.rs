mod mixer;
pub mod tables;

pub use self::mixer::Mixer;
pub use self::tables::{build_pulse_table, build_tnd_table, validate, PulseTable, TndTable};
use crate::error::{Error, Result};
use std::convert::TryFrom;

/// A pulse and tnd table pair that has passed range validation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Deserialize, Serialize))]
#[cfg_attr(not(target_arch = "wasm32"), serde(try_from = "UncheckedTables"))]
pub struct MixerTables {
    pulse: PulseTable,
    tnd: TndTable,
}

// Wire form of `MixerTables` before the range check.
#[cfg_attr(not(target_arch = "wasm32"), derive(Deserialize))]
pub(crate) struct UncheckedTables {
    pub(crate) pulse: PulseTable,
    pub(crate) tnd: TndTable,
}

impl TryFrom<UncheckedTables> for MixerTables {
    type Error = Error;

    fn try_from(tables: UncheckedTables) -> Result<Self> {
        MixerTables::from_tables(tables.pulse, tables.tnd)
    }
}

impl MixerTables {
    /// # Errors
    ///
    /// Returns `Error::RangeViolation` if the pair could drive the mixer past full scale.
    pub fn from_tables(pulse: PulseTable, tnd: TndTable) -> Result<Self> {
        validate(&pulse, &tnd)?;
        Ok(MixerTables { pulse, tnd })
    }

    pub fn pulse(&self) -> &PulseTable {
        &self.pulse
    }

    pub fn tnd(&self) -> &TndTable {
        &self.tnd
    }

    /// Loudest output any combination of channel levels can produce.
    pub fn max_output(&self) -> f32 {
        self.pulse.max() + self.tnd.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tables() {
        let tables = MixerTables::from_tables(build_pulse_table(), build_tnd_table()).unwrap();
        assert!(tables.max_output() <= 1.0);
        assert!(tables.max_output() > 0.99);
        assert_eq!(tables.pulse(), &build_pulse_table());
        assert_eq!(tables.tnd(), &build_tnd_table());
    }

    #[test]
    fn test_from_tables_rejects_violation() {
        let tnd = TndTable::from_values([0.9; tables::TND_TABLE_LEN]);
        let result = MixerTables::from_tables(build_pulse_table(), tnd);
        assert!(matches!(result, Err(Error::RangeViolation { .. })));
    }

    #[test]
    fn test_deserialize_validates() {
        let generated = MixerTables::from_tables(build_pulse_table(), build_tnd_table()).unwrap();
        let buffer = bincode::serialize(&generated).unwrap();
        assert_eq!(bincode::deserialize::<MixerTables>(&buffer).unwrap(), generated);

        let mut values = [0.0; tables::TND_TABLE_LEN];
        values[202] = 5.0;
        let loud = (build_pulse_table(), TndTable::from_values(values));
        let buffer = bincode::serialize(&loud).unwrap();
        assert!(bincode::deserialize::<MixerTables>(&buffer).is_err());
    }
}
