//! Configuration module for adc-matrix
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Config file (`adc-matrix.toml`)
//! 3. Built-in defaults (lowest priority)
//!
//! Defaults mirror the reference rig: a 12-bit converter (domain 4096)
//! driving four LED pins on port E, expected bits taken from the scaled
//! sample with a divisor of 256.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MatrixError, MatrixResult};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of distinct input sample values, `[0, domain_size)`
    #[serde(default = "default_domain_size")]
    pub domain_size: u32,

    /// How many scenarios to select for execution (default: all of them)
    #[serde(default)]
    pub sample_size: Option<u32>,

    /// Directory receiving one scenario file per input value
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File extension for scenario artifacts
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path of the selection manifest
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// ADC channel the sample is fed into
    #[serde(default = "default_channel")]
    pub channel: u32,

    /// How many times the backend repeats the fed sample
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,

    /// Overall timeout for the read-done poll loop
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Interval between read-done polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,

    /// Normalization divisor applied to the sample before bit extraction
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Number of output lines, one expected bit each
    #[serde(default = "default_output_width")]
    pub output_width: u32,

    /// Seed for the selector; omit for fresh entropy per run
    #[serde(default)]
    pub seed: Option<u64>,

    /// GPIO pin number per output line, lowest-order bit first
    #[serde(default = "default_led_pins")]
    pub led_pins: Vec<u32>,

    /// Backend handle of the GPIO port carrying the output pins
    #[serde(default = "default_gpio_port")]
    pub gpio_port: String,

    /// Backend handle of the converter under test
    #[serde(default = "default_adc")]
    pub adc: String,

    /// Platform description loaded into the emulated machine
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Firmware image loaded into the emulated machine
    #[serde(default = "default_elf")]
    pub elf: String,

    /// Symbol resolved for the CPU vector table offset
    #[serde(default = "default_vector_table_symbol")]
    pub vector_table_symbol: String,

    /// Name given to the emulated machine
    #[serde(default = "default_machine_name")]
    pub machine_name: String,
}

fn default_domain_size() -> u32 {
    4096
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated_tests")
}

fn default_extension() -> String {
    "robot".to_string()
}

fn default_manifest() -> PathBuf {
    PathBuf::from("adc_led_test.yaml")
}

fn default_channel() -> u32 {
    1
}

fn default_repeat_count() -> u32 {
    100
}

fn default_timeout() -> String {
    "10s".to_string()
}

fn default_poll_interval() -> String {
    "1ms".to_string()
}

fn default_scale() -> u32 {
    256
}

fn default_output_width() -> u32 {
    4
}

fn default_led_pins() -> Vec<u32> {
    vec![11, 12, 13, 14]
}

fn default_gpio_port() -> String {
    "sysbus.portE".to_string()
}

fn default_adc() -> String {
    "sysbus.adc0".to_string()
}

fn default_platform() -> String {
    "@platforms/s32k148.repl".to_string()
}

fn default_elf() -> String {
    "@firmware/adc_led.elf".to_string()
}

fn default_vector_table_symbol() -> String {
    "Os_ExceptionVectorTable".to_string()
}

fn default_machine_name() -> String {
    "adc_rig".to_string()
}

impl Default for Config {
    fn default() -> Self {
        // Round-trips through serde so the default fns stay the single
        // source of truth.
        toml::from_str("").unwrap_or_else(|_| unreachable!("empty config must deserialize"))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MatrixResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| MatrixError::ConfigParse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> MatrixResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Effective sample size: explicit value, or the whole domain
    pub fn effective_sample_size(&self) -> u32 {
        self.sample_size.unwrap_or(self.domain_size)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> MatrixResult<()> {
        if self.domain_size == 0 {
            return Err(MatrixError::InvalidConfig {
                message: "domain_size must be at least 1".to_string(),
            });
        }
        if self.scale == 0 {
            return Err(MatrixError::InvalidConfig {
                message: "scale must be at least 1".to_string(),
            });
        }
        if self.output_width == 0 || self.output_width > 32 {
            return Err(MatrixError::InvalidConfig {
                message: format!(
                    "output_width must be in 1..=32, got {}",
                    self.output_width
                ),
            });
        }
        if self.led_pins.len() != self.output_width as usize {
            return Err(MatrixError::InvalidConfig {
                message: format!(
                    "led_pins has {} entries but output_width is {}",
                    self.led_pins.len(),
                    self.output_width
                ),
            });
        }
        if self.effective_sample_size() > self.domain_size {
            return Err(MatrixError::SampleSize {
                sample_size: self.effective_sample_size(),
                domain_size: self.domain_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.domain_size, 4096);
        assert_eq!(config.sample_size, None);
        assert_eq!(config.effective_sample_size(), 4096);
        assert_eq!(config.output_dir, PathBuf::from("generated_tests"));
        assert_eq!(config.extension, "robot");
        assert_eq!(config.channel, 1);
        assert_eq!(config.repeat_count, 100);
        assert_eq!(config.scale, 256);
        assert_eq!(config.output_width, 4);
        assert_eq!(config.led_pins, vec![11, 12, 13, 14]);
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "domain_size = 8\nscale = 2\noutput_width = 3\nled_pins = [4, 5, 6]\nseed = 7"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.domain_size, 8);
        assert_eq!(config.scale, 2);
        assert_eq!(config.output_width, 3);
        assert_eq!(config.led_pins, vec![4, 5, 6]);
        assert_eq!(config.seed, Some(7));
        // Untouched fields keep their defaults
        assert_eq!(config.channel, 1);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "domian_size = 8").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, MatrixError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.domain_size, 4096);
    }

    #[test]
    fn test_validate_sample_size_exceeds_domain() {
        let config = Config {
            sample_size: Some(5000),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            MatrixError::SampleSize {
                sample_size: 5000,
                domain_size: 4096,
            }
        ));
    }

    #[test]
    fn test_validate_zero_scale() {
        let config = Config {
            scale: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_pin_width_mismatch() {
        let config = Config {
            led_pins: vec![11, 12],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("led_pins"));
    }
}
