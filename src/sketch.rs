use std::hash::{DefaultHasher, Hash, Hasher};

use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serialize")]
use crate::NoiseRampError;

/// Parameters for one sketch run.
///
/// The string seed drives both the uniform random stream and, unless a
/// noise seed is pinned, the noise field, so naming a seed reproduces a
/// sketch in full.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SketchParameters {
    pub name: String,
    pub seed: String,
    /// Overrides the seed derived from the string seed when set.
    pub noise_seed: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub duration_in_frames: u32,
    pub is_animated: bool,
    pub export_frames: bool,
}

impl Default for SketchParameters {
    fn default() -> Self {
        Self {
            name: "sketch".to_string(),
            seed: "hello world".to_string(),
            noise_seed: None,
            width: 540,
            height: 540,
            fps: 30,
            duration_in_frames: 300,
            is_animated: false,
            export_frames: false,
        }
    }
}

impl SketchParameters {
    fn seed_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        hasher.finish()
    }

    /// Seeded uniform stream for this parameter set. Every call starts a
    /// fresh stream from the same state; a sketch threads one stream
    /// through all of its randomness.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed_hash())
    }

    /// Seed for the noise field: the pinned value if set, otherwise
    /// derived from the string seed.
    pub fn resolve_noise_seed(&self) -> u32 {
        self.noise_seed.unwrap_or(self.seed_hash() as u32)
    }

    /// Filesystem-safe `{name}-{seed}` stem for exported artifacts.
    pub fn output_basename(&self) -> String {
        format!("{}-{}", sanitize(&self.name), sanitize(&self.seed))
    }

    pub fn frame_filename(&self, frame: u32, ext: &str) -> String {
        format!("{}_{:04}.{}", self.output_basename(), frame, ext)
    }

    /// Writes the parameter set as pretty JSON next to the exported
    /// frames, so a render can be reproduced later.
    #[cfg(feature = "serialize")]
    pub fn write_config(&self, path: impl AsRef<std::path::Path>) -> Result<(), NoiseRampError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
