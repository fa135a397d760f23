//! Workloads for exercising the trees
//!
//! - Generated key sequences (ascending, descending, seeded shuffle)
//! - Height reports comparing the AVL tree with the unbalanced baseline
//! - Line-oriented operation scripts

mod config;
mod report;
pub mod script;

pub use config::{KeyOrder, WorkloadConfig, DEFAULT_SEED};
pub use report::HeightReport;
pub use script::{parse_script, run_script, Op};

use thiserror::Error;

use crate::TreeError;

/// Errors raised while building or running a workload
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// A workload needs at least one key
    #[error("workload must contain at least one key")]
    EmptyWorkload,

    /// Key count does not fit the `i64` key space
    #[error("workload of {0} keys exceeds the key space")]
    TooLarge(usize),

    /// Unrecognized key order name
    #[error("unknown key order '{0}' (expected ascending, descending or shuffled)")]
    UnknownOrder(String),

    /// Malformed script line
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Tree operation failure bubbling up from a load
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}
