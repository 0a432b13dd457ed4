//! adc-matrix - HIL test-matrix generator and sampler
//!
//! Generates an exhaustive suite of hardware-in-the-loop scenarios for an
//! ADC-to-GPIO verification rig (one Robot Framework file per input sample
//! value, expected pin bits derived from the scaled sample), then selects a
//! random execution subset without replacement and writes the manifest the
//! CI runner consumes.

pub mod config;
pub mod error;
pub mod generate;
pub mod scenario;
pub mod select;
pub mod template;
pub mod writer;

// Re-exports for convenience
pub use config::Config;
pub use error::{MatrixError, MatrixResult};
pub use generate::{generate, is_complete, COMPLETION_MARKER};
pub use scenario::{expected_outputs, Scenario};
pub use select::{select, write_manifest, RandomSource};
pub use template::ScenarioTemplate;
