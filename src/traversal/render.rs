//! Text rendering of tree shapes
//!
//! Sideways layout: right subtree above, left subtree below,
//! four spaces of indent per level.

use std::fmt::{self, Display, Write};

use super::BinaryNode;

const INDENT: &str = "    ";

/// Write the tree sideways, one key per line
///
/// Reading the output with the head tilted left shows the tree upright.
pub fn render_sideways<N, W>(root: Option<&N>, out: &mut W) -> fmt::Result
where
    N: BinaryNode,
    N::Key: Display,
    W: Write,
{
    // Reverse in-order walk with an explicit stack of (node, level) pairs,
    // so list-shaped trees render without deep recursion
    let mut stack: Vec<(&N, usize)> = Vec::new();
    let mut current = root.map(|node| (node, 0));
    let mut padding = String::new();

    loop {
        while let Some((node, level)) = current {
            stack.push((node, level));
            current = node.right().map(|right| (right, level + 1));
        }

        let Some((node, level)) = stack.pop() else {
            return Ok(());
        };

        let width = level * INDENT.len();
        while padding.len() < width {
            padding.push_str(INDENT);
        }
        out.write_str(&padding[..width])?;
        writeln!(out, "{}", node.key())?;

        current = node.left().map(|left| (left, level + 1));
    }
}

/// Render breadth-first levels as `a | b c | `
///
/// Every key is followed by a space and every level by a `| ` marker.
pub fn render_levels<K: Display>(levels: &[Vec<&K>]) -> String {
    let mut rendered = String::new();
    for level in levels {
        for key in level {
            // Writing into a String cannot fail
            let _ = write!(rendered, "{} ", key);
        }
        rendered.push_str("| ");
    }
    rendered
}
