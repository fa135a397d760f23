//! Workload configuration
//!
//! Describes a batch of keys to load: how many, in which order, and the
//! seed that makes shuffled orders reproducible.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::WorkloadError;

/// Seed used when none is given, so runs are reproducible by default
pub const DEFAULT_SEED: u64 = 0x5eed_a71;

/// Order in which keys `1..=count` are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// 1, 2, 3, ... (worst case for an unbalanced tree)
    #[default]
    Ascending,
    /// count, count - 1, ...
    Descending,
    /// Seeded random permutation
    Shuffled,
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyOrder::Ascending => "ascending",
            KeyOrder::Descending => "descending",
            KeyOrder::Shuffled => "shuffled",
        };
        f.write_str(name)
    }
}

impl FromStr for KeyOrder {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "sorted" => Ok(KeyOrder::Ascending),
            "descending" | "desc" | "reverse" => Ok(KeyOrder::Descending),
            "shuffled" | "random" => Ok(KeyOrder::Shuffled),
            _ => Err(WorkloadError::UnknownOrder(s.to_string())),
        }
    }
}

/// Parameters for a generated workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of distinct keys
    pub count: usize,

    /// Production order
    pub order: KeyOrder,

    /// RNG seed for [`KeyOrder::Shuffled`]
    pub seed: u64,
}

impl WorkloadConfig {
    /// Workload of `count` keys in `order`, with the default seed
    pub fn new(count: usize, order: KeyOrder) -> Self {
        Self {
            count,
            order,
            seed: DEFAULT_SEED,
        }
    }

    /// Override the shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject workloads that cannot be generated
    pub fn validate(&self) -> Result<(), WorkloadError> {
        if self.count == 0 {
            return Err(WorkloadError::EmptyWorkload);
        }
        if i64::try_from(self.count).is_err() {
            return Err(WorkloadError::TooLarge(self.count));
        }
        Ok(())
    }

    /// Keys `1..=count` in the configured order
    pub fn keys(&self) -> Result<Vec<i64>, WorkloadError> {
        self.validate()?;

        let count = self.count as i64;
        let keys = match self.order {
            KeyOrder::Ascending => (1..=count).collect(),
            KeyOrder::Descending => (1..=count).rev().collect(),
            KeyOrder::Shuffled => {
                let mut keys: Vec<i64> = (1..=count).collect();
                let mut rng = StdRng::seed_from_u64(self.seed);
                keys.shuffle(&mut rng);
                keys
            }
        };

        Ok(keys)
    }
}
