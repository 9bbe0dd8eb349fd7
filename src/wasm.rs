use crate::apu::Mixer;
use crate::utils::set_panic_hook;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMixer {
    mixer: Mixer,
}

#[wasm_bindgen]
impl WasmMixer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmMixer, JsValue> {
        set_panic_hook();
        let mixer = Mixer::new().map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(WasmMixer { mixer })
    }

    pub fn sample(
        &self,
        pulse_1_output: u8,
        pulse_2_output: u8,
        triangle_output: u8,
        noise_output: u8,
        dmc_output: u8,
    ) -> f32 {
        self.mixer.sample(
            pulse_1_output,
            pulse_2_output,
            triangle_output,
            noise_output,
            dmc_output,
        )
    }

    pub fn pulse_table(&self) -> Vec<f32> {
        self.mixer.pulse_table().values().to_vec()
    }

    pub fn tnd_table(&self) -> Vec<f32> {
        self.mixer.tnd_table().values().to_vec()
    }
}
