use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// How division treats a zero divisor.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DivisionPolicy {
    /// Integer-only division by zero fails; real and complex operands
    /// follow IEEE 754 and produce infinities or NaN.
    #[default]
    Ieee,
    /// Any zero divisor fails with `DivisionByZero`.
    Strict,
}

impl FromStr for DivisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ieee" => Ok(DivisionPolicy::Ieee),
            "strict" => Ok(DivisionPolicy::Strict),
            _ => Err(format!(
                "Unknown division policy: {}. Expected one of `ieee` or `strict`",
                s
            )),
        }
    }
}

/// Central configuration for the matrix engines.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct LinalgConfig {
    #[serde(default)]
    pub division: DivisionPolicy,

    /// Seed for the random generators. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of decimals used when rendering real and complex elements.
    #[serde(default)]
    pub display_precision: Option<usize>,
}

impl LinalgConfig {
    pub fn new(
        division: DivisionPolicy,
        seed: Option<u64>,
        display_precision: Option<usize>,
    ) -> Self {
        Self {
            division,
            seed,
            display_precision,
        }
    }

    /// Build the random number generator used by `generators::rand_with`
    /// and `generators::randi_with`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse linalg configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded linalg config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
