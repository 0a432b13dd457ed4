//! Scenario generator
//!
//! Renders one scenario artifact per input value and writes it under the
//! output directory. Generation is a wholesale overwrite: colliding file
//! names are replaced, and a completion marker is written only after the
//! full domain has been rendered, so a directory without the marker is a
//! crashed partial run and must be regenerated.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MatrixError, MatrixResult};
use crate::scenario::{artifact_file_name, Scenario};
use crate::template::ScenarioTemplate;

/// Marker file written inside the output directory after a full run
pub const COMPLETION_MARKER: &str = ".complete";

/// Path of the artifact for identifier `id`
pub fn artifact_path(output_dir: &Path, id: &str, extension: &str) -> PathBuf {
    output_dir.join(artifact_file_name(id, extension))
}

/// Render and write one scenario artifact per value in `domain`.
///
/// The domain must start at 0; downstream identifier derivation assumes a
/// gap-free domain. Returns the number of artifacts written.
pub fn generate(
    domain: Range<u32>,
    template: &ScenarioTemplate,
    config: &Config,
) -> MatrixResult<usize> {
    if domain.start != 0 {
        return Err(MatrixError::DomainStart {
            start: domain.start,
        });
    }

    fs::create_dir_all(&config.output_dir)?;

    let mut written = 0;
    for input_value in domain {
        let scenario = Scenario::new(input_value, config);
        let path = artifact_path(&config.output_dir, &scenario.identifier(), &config.extension);
        fs::write(&path, template.render(&scenario))?;
        written += 1;
    }

    crate::writer::atomic_write(
        &config.output_dir.join(COMPLETION_MARKER),
        written.to_string().as_bytes(),
    )?;

    Ok(written)
}

/// Whether `output_dir` holds a completed generation run
pub fn is_complete(output_dir: &Path) -> bool {
    output_dir.join(COMPLETION_MARKER).exists()
}
