//! Scripted operations against a tree of `i64` keys
//!
//! One operation per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! insert 30
//! insert 20
//! insert 10   # triggers a right rotation
//! preorder
//! ```

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use tracing::warn;

use super::WorkloadError;
use crate::avl::AvlTree;
use crate::traversal::render_levels;

/// Single scripted operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Insert a key
    Insert(i64),
    /// Delete a key
    Delete(i64),
    /// Look up a key
    Search(i64),
    /// Report the smallest key
    Min,
    /// Report the largest key
    Max,
    /// Report the height
    Height,
    /// Ascending keys
    InOrder,
    /// Pre-order keys with balance factors
    PreOrder,
    /// Post-order keys
    PostOrder,
    /// Keys level by level
    BreadthFirst,
    /// Sideways drawing of the tree
    Print,
    /// Drop every key
    Clear,
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or("empty operation")?.to_ascii_lowercase();
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }

        let key = || -> Result<i64, String> {
            let raw = argument.ok_or_else(|| format!("'{command}' needs a key"))?;
            raw.parse().map_err(|_| format!("invalid key '{raw}'"))
        };
        let bare = |op: Op| -> Result<Op, String> {
            match argument {
                Some(arg) => Err(format!("'{command}' takes no argument, got '{arg}'")),
                None => Ok(op),
            }
        };

        match command.as_str() {
            "insert" => Ok(Op::Insert(key()?)),
            "delete" => Ok(Op::Delete(key()?)),
            "search" => Ok(Op::Search(key()?)),
            "min" => bare(Op::Min),
            "max" => bare(Op::Max),
            "height" => bare(Op::Height),
            "inorder" => bare(Op::InOrder),
            "preorder" => bare(Op::PreOrder),
            "postorder" => bare(Op::PostOrder),
            "bfs" => bare(Op::BreadthFirst),
            "print" => bare(Op::Print),
            "clear" => bare(Op::Clear),
            other => Err(format!("unknown operation '{other}'")),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Insert(key) => write!(f, "insert {key}"),
            Op::Delete(key) => write!(f, "delete {key}"),
            Op::Search(key) => write!(f, "search {key}"),
            Op::Min => f.write_str("min"),
            Op::Max => f.write_str("max"),
            Op::Height => f.write_str("height"),
            Op::InOrder => f.write_str("inorder"),
            Op::PreOrder => f.write_str("preorder"),
            Op::PostOrder => f.write_str("postorder"),
            Op::BreadthFirst => f.write_str("bfs"),
            Op::Print => f.write_str("print"),
            Op::Clear => f.write_str("clear"),
        }
    }
}

/// Parse a whole script, stopping at the first malformed line
pub fn parse_script(text: &str) -> Result<Vec<Op>, WorkloadError> {
    let mut ops = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let op = line.parse::<Op>().map_err(|message| WorkloadError::Parse {
            line: idx + 1,
            message,
        })?;
        ops.push(op);
    }

    Ok(ops)
}

/// Apply operations in order, writing one result line per operation
///
/// Rejected operations (duplicate insert, delete on an empty tree, missing
/// key) are reported inline and do not stop the script. Returns how many
/// were rejected.
pub fn run_script<W: Write>(tree: &mut AvlTree<i64>, ops: &[Op], writer: &mut W) -> Result<usize> {
    let mut rejected = 0;

    for op in ops {
        let outcome = match *op {
            Op::Insert(key) => tree.insert(key).map(|()| "ok".to_string()),
            Op::Delete(key) => tree.remove(&key).map(|removed| match removed {
                Some(_) => "ok".to_string(),
                None => "ok (absent)".to_string(),
            }),
            Op::Search(key) => tree.search(&key).map(|_| "found".to_string()),
            Op::Min => tree.find_min().map(|key| key.to_string()),
            Op::Max => tree.find_max().map(|key| key.to_string()),
            Op::Height => Ok(tree.height().to_string()),
            Op::InOrder => Ok(join(tree.in_order())),
            Op::PreOrder => Ok(tree.pre_order_annotated()),
            Op::PostOrder => Ok(join(tree.post_order())),
            Op::BreadthFirst => Ok(render_levels(&tree.breadth_first()).trim_end().to_string()),
            Op::Print => Ok(format!("\n{}", tree).trim_end().to_string()),
            Op::Clear => tree.clear().map(|()| "ok".to_string()),
        };

        match outcome {
            Ok(result) => writeln!(writer, "{op}: {result}")?,
            Err(err) => {
                rejected += 1;
                warn!(%op, %err, "operation rejected");
                writeln!(writer, "{op}: error: {err}")?;
            }
        }
    }

    writer.flush()?;
    Ok(rejected)
}

fn join(keys: Vec<&i64>) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
