use crate::apu::tables::{
    self, PulseTable, TndTable, DMC_MAX, NOISE_MAX, PULSE_MAX, TRIANGLE_MAX,
};
use crate::apu::MixerTables;
use crate::error::Result;

// https://wiki.nesdev.com/w/index.php/APU_Mixer#Emulation
#[derive(Clone, Debug)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Deserialize, Serialize))]
pub struct Mixer {
    tables: MixerTables,
}

impl Mixer {
    pub fn new() -> Result<Self> {
        Ok(Mixer::from_tables(crate::generate()?))
    }

    pub fn from_tables(tables: MixerTables) -> Self {
        Mixer { tables }
    }

    pub fn tables(&self) -> &MixerTables {
        &self.tables
    }

    pub fn pulse_table(&self) -> &PulseTable {
        self.tables.pulse()
    }

    pub fn tnd_table(&self) -> &TndTable {
        self.tables.tnd()
    }

    pub fn pulse_out(&self, pulse_1_output: u8, pulse_2_output: u8) -> f32 {
        let index = tables::pulse_index(pulse_1_output & PULSE_MAX, pulse_2_output & PULSE_MAX);
        self.tables.pulse()[index]
    }

    pub fn tnd_out(&self, triangle_output: u8, noise_output: u8, dmc_output: u8) -> f32 {
        let index = tables::tnd_index(
            triangle_output & TRIANGLE_MAX,
            noise_output & NOISE_MAX,
            dmc_output & DMC_MAX,
        );
        self.tables.tnd()[index]
    }

    pub fn sample(
        &self,
        pulse_1_output: u8,
        pulse_2_output: u8,
        triangle_output: u8,
        noise_output: u8,
        dmc_output: u8,
    ) -> f32 {
        let pulse_out = self.pulse_out(pulse_1_output, pulse_2_output);
        let tnd_out = self.tnd_out(triangle_output, noise_output, dmc_output);
        pulse_out + tnd_out
    }
}

#[cfg(test)]
mod tests {
    use super::Mixer;
    use crate::apu::tables::{pulse_level, tnd_level};

    #[test]
    fn test_silence() {
        let mixer = Mixer::new().unwrap();
        assert_eq!(mixer.sample(0, 0, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_full_scale() {
        let mixer = Mixer::new().unwrap();
        let sample = mixer.sample(15, 15, 15, 15, 127);
        assert_eq!(sample, pulse_level(30) + tnd_level(202));
        assert!(sample <= 1.0);
    }

    #[test]
    fn test_channel_weights() {
        let mixer = Mixer::new().unwrap();
        assert_eq!(mixer.pulse_out(4, 7), pulse_level(11));
        assert_eq!(mixer.tnd_out(1, 0, 0), tnd_level(3));
        assert_eq!(mixer.tnd_out(0, 1, 0), tnd_level(2));
        assert_eq!(mixer.tnd_out(0, 0, 1), tnd_level(1));
        assert_eq!(mixer.sample(1, 2, 3, 4, 5), pulse_level(3) + tnd_level(22));
    }

    #[test]
    fn test_deserialize_rejects_loud_tables() {
        let mixer = Mixer::new().unwrap();
        let mut buffer = bincode::serialize(&mixer).unwrap();
        // Last tnd entry is the final four bytes of the encoding.
        let len = buffer.len();
        buffer[len - 4..].copy_from_slice(&5.0f32.to_le_bytes());
        assert!(bincode::deserialize::<Mixer>(&buffer).is_err());
    }

    #[test]
    fn test_outputs_are_masked() {
        let mixer = Mixer::new().unwrap();
        assert_eq!(mixer.pulse_out(0x1F, 0x10), mixer.pulse_out(0x0F, 0x00));
        assert_eq!(mixer.tnd_out(0xFF, 0xFF, 0xFF), mixer.tnd_out(15, 15, 127));
    }
}
