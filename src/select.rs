//! Sample selector
//!
//! Picks an execution subset of the generated scenarios uniformly at random
//! without replacement, then writes the ordered manifest. Randomness comes
//! from an explicit `RandomSource` rather than process-global state, so
//! reproducibility is a configuration choice: seeded runs repeat exactly,
//! unseeded runs draw fresh OS entropy.

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, MatrixResult};
use crate::generate::artifact_path;
use crate::writer::atomic_write;

/// Source of randomness for the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// Reproducible: same seed, same selection
    Seeded(u64),
    /// Fresh OS entropy per run
    OsEntropy,
}

impl RandomSource {
    /// Seeded if a seed was configured, OS entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(seed),
            None => Self::OsEntropy,
        }
    }

    /// Instantiate the RNG for one selection run
    pub fn rng(&self) -> StdRng {
        match self {
            Self::Seeded(seed) => StdRng::seed_from_u64(*seed),
            Self::OsEntropy => StdRng::from_os_rng(),
        }
    }
}

/// Select `sample_size` distinct identifiers uniformly from `[0, domain_size)`.
///
/// Sampling is without replacement; result order is the sampler's order, not
/// numeric order. `sample_size == domain_size` yields a full random
/// permutation of the domain.
pub fn select<R: Rng + ?Sized>(
    domain_size: u32,
    sample_size: u32,
    rng: &mut R,
) -> MatrixResult<Vec<u32>> {
    if sample_size > domain_size {
        return Err(MatrixError::SampleSize {
            sample_size,
            domain_size,
        });
    }

    Ok(index::sample(rng, domain_size as usize, sample_size as usize)
        .into_iter()
        .map(|i| i as u32)
        .collect())
}

/// Write the selection manifest, one artifact reference per line, in
/// selection order. Written atomically, only after sampling succeeded.
pub fn write_manifest(
    manifest: &Path,
    output_dir: &Path,
    extension: &str,
    selection: &[u32],
) -> MatrixResult<()> {
    let mut content = String::new();
    for id in selection {
        let path = artifact_path(output_dir, &id.to_string(), extension);
        content.push_str(&format!("- {}\n", path.display()));
    }
    atomic_write(manifest, content.as_bytes())
}
