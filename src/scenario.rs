//! Scenario data model and expected-output derivation
//!
//! A scenario is one complete test case: the injected sample value, the
//! fixed converter configuration shared by every case, and the output-pin
//! bits the firmware is expected to produce for it.

use crate::config::Config;

/// One complete test case for a single input sample value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// The sample value fed to the converter, unique per scenario
    pub input_value: u32,
    /// ADC channel, shared by all scenarios
    pub channel: u32,
    /// Sample repeat count, shared by all scenarios
    pub repeat_count: u32,
    /// Expected bit per output line, lowest-order bit first
    pub expected_outputs: Vec<u8>,
}

impl Scenario {
    /// Build the scenario for `input_value` under the given configuration
    pub fn new(input_value: u32, config: &Config) -> Self {
        Self {
            input_value,
            channel: config.channel,
            repeat_count: config.repeat_count,
            expected_outputs: expected_outputs(input_value, config.scale, config.output_width),
        }
    }

    /// Stable identifier, a bijection over the input domain
    pub fn identifier(&self) -> String {
        self.input_value.to_string()
    }
}

/// Derive the expected output bits for sample value `v`.
///
/// The firmware scales the sample down by integer division, then drives one
/// GPIO pin per low-order bit of the quotient. Floor division happens before
/// the bit extraction; the truncation is exactly what the embedded scaling
/// logic under test must reproduce.
///
/// Returns `width` bits, little-endian (bit 0 first).
pub fn expected_outputs(v: u32, scale: u32, width: u32) -> Vec<u8> {
    let scaled = v / scale;
    (0..width).map(|i| ((scaled >> i) & 1) as u8).collect()
}

/// File name of the artifact for identifier `id`
pub fn artifact_file_name(id: &str, extension: &str) -> String {
    format!("test_{id}.{extension}")
}
