use crate::error::{Error, Result};
#[cfg(not(target_arch = "wasm32"))]
use serde_big_array::BigArray;
use std::ops::Index;
use std::slice;

pub const PULSE_TABLE_LEN: usize = 31;
pub const TND_TABLE_LEN: usize = 203;

pub const PULSE_MAX: u8 = 0x0F;
pub const TRIANGLE_MAX: u8 = 0x0F;
pub const NOISE_MAX: u8 = 0x0F;
pub const DMC_MAX: u8 = 0x7F;

// https://wiki.nesdev.com/w/index.php/APU_Mixer#Lookup_Table
// Evaluated in f64 and rounded once, so each entry is the nearest f32 to the formula.
pub fn pulse_level(index: usize) -> f32 {
    if index == 0 {
        return 0.0;
    }
    (95.52 / (8128.0 / index as f64 + 100.0)) as f32
}

pub fn tnd_level(index: usize) -> f32 {
    if index == 0 {
        return 0.0;
    }
    (163.67 / (24329.0 / index as f64 + 100.0)) as f32
}

pub fn pulse_index(pulse_1: u8, pulse_2: u8) -> usize {
    usize::from(pulse_1) + usize::from(pulse_2)
}

pub fn tnd_index(triangle: u8, noise: u8, dmc: u8) -> usize {
    3 * usize::from(triangle) + 2 * usize::from(noise) + usize::from(dmc)
}

// Largest entry. A NaN entry poisons the result so that validation rejects it.
fn table_max(values: &[f32]) -> f32 {
    values.iter().fold(0.0, |max, &val| {
        if max.is_nan() || (val <= max) {
            max
        } else {
            val
        }
    })
}

macro_rules! impl_table {
    ($table:ident, $len:expr) => {
        impl $table {
            /// Wraps precomputed values without validating them.
            pub fn from_values(values: [f32; $len]) -> Self {
                $table { values }
            }

            pub fn get(&self, index: usize) -> Option<f32> {
                self.values.get(index).copied()
            }

            pub fn values(&self) -> &[f32] {
                &self.values
            }

            pub fn len(&self) -> usize {
                $len
            }

            pub fn is_empty(&self) -> bool {
                false
            }

            pub fn max(&self) -> f32 {
                table_max(&self.values)
            }

            pub fn iter(&self) -> slice::Iter<'_, f32> {
                self.values.iter()
            }
        }

        impl Index<usize> for $table {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &self.values[index]
            }
        }

        impl<'a> IntoIterator for &'a $table {
            type IntoIter = slice::Iter<'a, f32>;
            type Item = &'a f32;

            fn into_iter(self) -> Self::IntoIter {
                self.values.iter()
            }
        }
    };
}

/// Output levels for the sum of both pulse channels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Deserialize, Serialize))]
pub struct PulseTable {
    values: [f32; PULSE_TABLE_LEN],
}

impl PulseTable {
    pub fn build() -> Self {
        let mut values = [0.0; PULSE_TABLE_LEN];
        for pulse_1 in 0..=PULSE_MAX {
            for pulse_2 in 0..=PULSE_MAX {
                let index = pulse_index(pulse_1, pulse_2);
                if index > 0 {
                    values[index] = pulse_level(index);
                }
            }
        }

        let table = PulseTable { values };
        debug!("[Tables] Built pulse table: max {}.", table.max());
        table
    }
}

impl_table!(PulseTable, PULSE_TABLE_LEN);

/// Output levels for the weighted sum `3 * triangle + 2 * noise + dmc`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Deserialize, Serialize))]
pub struct TndTable {
    #[cfg_attr(not(target_arch = "wasm32"), serde(with = "BigArray"))]
    values: [f32; TND_TABLE_LEN],
}

impl TndTable {
    pub fn build() -> Self {
        let mut values = [0.0; TND_TABLE_LEN];
        for triangle in 0..=TRIANGLE_MAX {
            for noise in 0..=NOISE_MAX {
                for dmc in 0..=DMC_MAX {
                    let index = tnd_index(triangle, noise, dmc);
                    if index > 0 {
                        values[index] = tnd_level(index);
                    }
                }
            }
        }

        let table = TndTable { values };
        debug!("[Tables] Built tnd table: max {}.", table.max());
        table
    }
}

impl_table!(TndTable, TND_TABLE_LEN);

pub fn build_pulse_table() -> PulseTable {
    PulseTable::build()
}

pub fn build_tnd_table() -> TndTable {
    TndTable::build()
}

/// Checks that the loudest combination of channels stays within full scale.
///
/// # Errors
///
/// Returns `Error::RangeViolation` if `max(pulse) + max(tnd)` is greater than 1 or is NaN.
pub fn validate(pulse_table: &PulseTable, tnd_table: &TndTable) -> Result<()> {
    let pulse_max = pulse_table.max();
    let tnd_max = tnd_table.max();
    let sum = pulse_max + tnd_max;

    if sum.is_nan() || sum > 1.0 {
        return Err(Error::RangeViolation {
            pulse_max,
            tnd_max,
            sum,
        });
    }

    debug!("[Tables] Validated tables: max output {}.", sum);
    Ok(())
}
