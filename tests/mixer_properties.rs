//! Property-based tests for the mixer lookup tables.
//!
//! Every reachable channel combination must land on the entry the mixing formula gives for its
//! weighted index, and the mixed output must stay within full scale.

use neso_mixer::{build_pulse_table, build_tnd_table, generate, Mixer};
use proptest::prelude::*;

proptest! {
    /// pulse[p1 + p2] = 95.52 / (8128 / (p1 + p2) + 100)
    #[test]
    fn prop_pulse_formula(pulse_1 in 0u8..=15, pulse_2 in 0u8..=15) {
        let table = build_pulse_table();
        let n = usize::from(pulse_1 + pulse_2);
        let expected = if n == 0 { 0.0 } else { (95.52 / (8128.0 / n as f64 + 100.0)) as f32 };
        prop_assert_eq!(table[n], expected);
    }

    /// tnd[3t + 2n + d] = 163.67 / (24329 / (3t + 2n + d) + 100)
    #[test]
    fn prop_tnd_formula(triangle in 0u8..=15, noise in 0u8..=15, dmc in 0u8..=127) {
        let table = build_tnd_table();
        let n = 3 * usize::from(triangle) + 2 * usize::from(noise) + usize::from(dmc);
        let expected = if n == 0 { 0.0 } else { (163.67 / (24329.0 / n as f64 + 100.0)) as f32 };
        prop_assert_eq!(table[n], expected);
    }

    /// Mixed output is always in [0, 1], whatever the raw channel bytes.
    #[test]
    fn prop_sample_in_range(
        pulse_1: u8,
        pulse_2: u8,
        triangle: u8,
        noise: u8,
        dmc: u8,
    ) {
        let mixer = Mixer::new().unwrap();
        let sample = mixer.sample(pulse_1, pulse_2, triangle, noise, dmc);
        prop_assert!((0.0..=1.0).contains(&sample));
    }

    /// Raising any single channel never lowers the output.
    #[test]
    fn prop_sample_monotonic(triangle in 0u8..15, noise in 0u8..=15, dmc in 0u8..=127) {
        let mixer = Mixer::new().unwrap();
        let quiet = mixer.tnd_out(triangle, noise, dmc);
        let loud = mixer.tnd_out(triangle + 1, noise, dmc);
        prop_assert!(quiet <= loud);
    }
}

#[test]
fn test_every_index_is_reachable() {
    let mut pulse_seen = [false; 31];
    for pulse_1 in 0..=15usize {
        for pulse_2 in 0..=15usize {
            pulse_seen[pulse_1 + pulse_2] = true;
        }
    }
    assert!(pulse_seen.iter().all(|&seen| seen));

    let mut tnd_seen = [false; 203];
    for triangle in 0..=15usize {
        for noise in 0..=15usize {
            for dmc in 0..=127usize {
                tnd_seen[3 * triangle + 2 * noise + dmc] = true;
            }
        }
    }
    assert!(tnd_seen.iter().all(|&seen| seen));

    let tables = generate().unwrap();
    assert!(tables.pulse().iter().skip(1).all(|&val| val > 0.0));
    assert!(tables.tnd().iter().skip(1).all(|&val| val > 0.0));
}
