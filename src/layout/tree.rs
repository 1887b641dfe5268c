//! Layered layout for the campaign strategy tree
//! (persona → angle → trigger → format → placement → creative).
//!
//! Standard recursive tree layout: subtree extents accumulate bottom-up,
//! positions are assigned top-down. A collapsed node contributes only its
//! own height; its descendants are excluded from the output entirely.
//! Children sit one column to the right of their parent and the child stack
//! is vertically centered on the parent's midpoint.

use std::collections::HashMap;

use crate::foundation::core::Point;
use crate::layout::node::{Edge, Positioned};

/// Category of a strategy-tree node, with fixed per-category sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StrategyKind {
    /// The campaign DNA root.
    Root,
    /// A target persona.
    Persona,
    /// A strategic angle.
    Angle,
    /// A buying trigger.
    Trigger,
    /// A creative format.
    Format,
    /// A placement.
    Placement,
    /// A finished creative concept.
    Creative,
}

impl StrategyKind {
    /// Fixed node width for this category.
    pub fn width(self) -> f64 {
        match self {
            StrategyKind::Root => 260.0,
            StrategyKind::Persona => 220.0,
            StrategyKind::Angle | StrategyKind::Trigger => 220.0,
            StrategyKind::Format | StrategyKind::Placement => 200.0,
            StrategyKind::Creative => 240.0,
        }
    }

    /// Fixed node height for this category.
    pub fn height(self) -> f64 {
        match self {
            StrategyKind::Root => 120.0,
            StrategyKind::Persona => 100.0,
            StrategyKind::Angle | StrategyKind::Trigger => 90.0,
            StrategyKind::Format => 80.0,
            StrategyKind::Placement => 70.0,
            StrategyKind::Creative => 140.0,
        }
    }
}

/// One node of the strategy tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyNode {
    /// Stable node identifier.
    pub id: String,
    /// Category, fixing the node's size.
    pub kind: StrategyKind,
    /// Display label.
    pub label: String,
    /// Parent node, if any. A dangling parent makes this node a root.
    pub parent_id: Option<String>,
    /// Collapsed nodes hide their descendants from the layout.
    pub expanded: bool,
}

/// Spacing knobs for the layered layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeLayoutParams {
    /// Horizontal gap between a parent column and its child column.
    pub column_gap: f64,
    /// Vertical gap between stacked siblings.
    pub row_gap: f64,
}

impl Default for TreeLayoutParams {
    fn default() -> Self {
        Self {
            column_gap: 120.0,
            row_gap: 40.0,
        }
    }
}

/// Computed strategy-tree layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TreeLayout {
    /// Positioned visible nodes (descendants of collapsed nodes excluded).
    pub nodes: Vec<Positioned<String>>,
    /// Parent→child edges between visible nodes.
    pub edges: Vec<Edge<String>>,
}

struct TreeIndex<'a> {
    nodes: &'a [StrategyNode],
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> TreeIndex<'a> {
    fn build(nodes: &'a [StrategyNode]) -> Self {
        let ids: HashMap<&str, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id.as_str(), i)).collect();
        let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            match node.parent_id.as_deref().filter(|p| ids.contains_key(p)) {
                Some(parent) => children.entry(parent).or_default().push(i),
                None => roots.push(i),
            }
        }
        Self {
            nodes,
            children,
            roots,
        }
    }

    fn children_of(&self, idx: usize) -> &[usize] {
        self.children
            .get(self.nodes[idx].id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Total stacked height this subtree occupies. Collapsed nodes count only
    // themselves.
    fn subtree_height(&self, idx: usize, params: &TreeLayoutParams) -> f64 {
        let node = &self.nodes[idx];
        let own = node.kind.height();
        let kids = self.children_of(idx);
        if !node.expanded || kids.is_empty() {
            return own;
        }
        let stacked: f64 = kids
            .iter()
            .map(|&c| self.subtree_height(c, params))
            .sum::<f64>()
            + params.row_gap * ((kids.len() - 1) as f64);
        own.max(stacked)
    }
}

fn place(
    index: &TreeIndex<'_>,
    idx: usize,
    x: f64,
    y_center: f64,
    params: &TreeLayoutParams,
    out: &mut TreeLayout,
) {
    let node = &index.nodes[idx];
    out.nodes.push(Positioned {
        id: node.id.clone(),
        pos: Point::new(x, y_center),
    });

    if !node.expanded {
        return;
    }
    let kids = index.children_of(idx);
    if kids.is_empty() {
        return;
    }

    let child_x = x + node.kind.width() + params.column_gap;
    let total: f64 = kids
        .iter()
        .map(|&c| index.subtree_height(c, params))
        .sum::<f64>()
        + params.row_gap * ((kids.len() - 1) as f64);

    // Stack children within the band allocated to this subtree, centered on
    // the parent's midpoint.
    let mut cursor = y_center - total / 2.0;
    for &child in kids {
        let band = index.subtree_height(child, params);
        let child_center = cursor + band / 2.0;
        out.edges.push(Edge {
            from_id: node.id.clone(),
            to_id: index.nodes[child].id.clone(),
            from: Point::new(x, y_center),
            to: Point::new(child_x, child_center),
        });
        place(index, child, child_x, child_center, params, out);
        cursor += band + params.row_gap;
    }
}

/// Compute positions for the visible part of the strategy tree.
///
/// Multiple roots stack vertically around the origin the same way siblings
/// stack under a parent.
pub fn tree_layout(nodes: &[StrategyNode], params: &TreeLayoutParams) -> TreeLayout {
    let index = TreeIndex::build(nodes);
    let mut out = TreeLayout {
        nodes: Vec::new(),
        edges: Vec::new(),
    };

    let total: f64 = index
        .roots
        .iter()
        .map(|&r| index.subtree_height(r, params))
        .sum::<f64>()
        + params.row_gap * (index.roots.len().saturating_sub(1) as f64);

    let mut cursor = -total / 2.0;
    for &root in &index.roots {
        let band = index.subtree_height(root, params);
        place(&index, root, 0.0, cursor + band / 2.0, params, &mut out);
        cursor += band + params.row_gap;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tree.rs"]
mod tests;
