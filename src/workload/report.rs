//! Height comparison between the balanced and the unbalanced tree

use std::fmt;

use tracing::info;

use super::{WorkloadConfig, WorkloadError};
use crate::avl::{height_bound, AvlTree};
use crate::bst::UnbalancedTree;
use crate::SearchTree;

/// Heights reached by both trees on the same workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightReport {
    /// Workload that produced the heights
    pub config: WorkloadConfig,

    /// Height of the AVL tree
    pub avl_height: i32,

    /// Height of the unbalanced tree
    pub bst_height: i32,

    /// Worst-case AVL height for this many keys
    pub height_bound: i32,
}

impl HeightReport {
    /// Load the workload into fresh trees and record their heights
    pub fn measure(config: &WorkloadConfig) -> Result<Self, WorkloadError> {
        let keys = config.keys()?;

        let mut avl = AvlTree::new();
        let mut bst = UnbalancedTree::new();
        load(&mut avl, &keys)?;
        load(&mut bst, &keys)?;

        let report = Self {
            config: config.clone(),
            avl_height: avl.height(),
            bst_height: bst.height(),
            height_bound: height_bound(keys.len()),
        };
        info!(
            count = config.count,
            order = %config.order,
            avl = report.avl_height,
            bst = report.bst_height,
            "measured heights"
        );

        Ok(report)
    }

    /// Check the AVL height against its theoretical bound
    pub fn within_bound(&self) -> bool {
        self.avl_height <= self.height_bound
    }
}

fn load<T: SearchTree<i64>>(tree: &mut T, keys: &[i64]) -> Result<(), WorkloadError> {
    for &key in keys {
        tree.insert(key)?;
    }
    Ok(())
}

impl fmt::Display for HeightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keys:        {} ({})", self.config.count, self.config.order)?;
        writeln!(f, "AVL height:  {}", self.avl_height)?;
        writeln!(f, "BST height:  {}", self.bst_height)?;
        write!(
            f,
            "AVL bound:   {} ({})",
            self.height_bound,
            if self.within_bound() { "ok" } else { "EXCEEDED" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyOrder;

    #[test]
    fn test_sorted_input_report() {
        let report = HeightReport::measure(&WorkloadConfig::new(1000, KeyOrder::Ascending)).unwrap();
        assert_eq!(report.bst_height, 999);
        assert!(report.within_bound());
        assert!(report.avl_height < report.bst_height);
    }

    #[test]
    fn test_report_display() {
        let report = HeightReport::measure(&WorkloadConfig::new(5, KeyOrder::Ascending)).unwrap();
        let rendered = report.to_string();
        assert!(rendered.contains("AVL height:  2"));
        assert!(rendered.contains("BST height:  4"));
        assert!(rendered.ends_with("(ok)"));
    }
}
