use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One selectable level node.
///
/// Nodes have no identity beyond their position in the graph; two rows may
/// carry identical-looking specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub label: String,
    pub icon: String,
    pub unlocked: bool,
}

impl NodeSpec {
    pub fn new(label: impl Into<String>, icon: impl Into<String>, unlocked: bool) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            unlocked,
        }
    }
}

/// One horizontal tier of the map.
///
/// Connector routing is defined only for rows of one or two nodes; wider
/// rows are rejected by [`LevelGraph::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowSpec {
    pub nodes: Vec<NodeSpec>,
}

impl RowSpec {
    pub fn single(node: NodeSpec) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn pair(first: NodeSpec, second: NodeSpec) -> Self {
        Self {
            nodes: vec![first, second],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Ordered rows, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelGraph {
    pub rows: Vec<RowSpec>,
}

impl LevelGraph {
    pub fn new(rows: Vec<RowSpec>) -> Self {
        Self { rows }
    }

    /// Total node count across all rows.
    pub fn flat_len(&self) -> usize {
        self.rows.iter().map(RowSpec::len).sum()
    }

    /// Prefix sums of row lengths: `offsets[r]` is the flat index of row
    /// `r`'s first node, and the final entry equals [`Self::flat_len`].
    ///
    /// Rows of length 0 advance the offset by 0, so downstream bookkeeping
    /// stays aligned even for degenerate inputs.
    pub fn row_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.rows.len() + 1);
        let mut acc = 0usize;
        offsets.push(acc);
        for row in &self.rows {
            acc += row.len();
            offsets.push(acc);
        }
        offsets
    }

    /// Flat row-major index of the node at `(row, pos)`, if it exists.
    pub fn flat_index(&self, row: usize, pos: usize) -> Option<usize> {
        let r = self.rows.get(row)?;
        if pos >= r.len() {
            return None;
        }
        let before: usize = self.rows[..row].iter().map(RowSpec::len).sum();
        Some(before + pos)
    }

    /// Inverse of [`Self::flat_index`]: recovers `(row, pos)` from a flat
    /// row-major index.
    pub fn locate(&self, flat: usize) -> Option<(usize, usize)> {
        let mut start = 0usize;
        for (row, r) in self.rows.iter().enumerate() {
            let end = start + r.len();
            if flat < end {
                return Some((row, flat - start));
            }
            start = end;
        }
        None
    }

    /// Structural check: every row must hold exactly one or two nodes.
    ///
    /// Wider (or empty) rows are a documented restriction: the routing rule
    /// table is defined only for cardinalities 1 and 2, and letting other
    /// shapes fall through would produce visually wrong connectors rather
    /// than an error.
    pub fn validate(&self) -> Result<()> {
        for (row, r) in self.rows.iter().enumerate() {
            let len = r.len();
            if !(1..=2).contains(&len) {
                return Err(Error::RowCardinality { row, len });
            }
        }
        Ok(())
    }
}
