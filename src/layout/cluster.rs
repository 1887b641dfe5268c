//! Radial cluster layout for the free-form hypothesis canvas.
//!
//! Batch-mates group around a shared centroid, centroids distribute on a
//! ring around the origin anchor, and remix lineage is emitted as a separate
//! edge overlay. Pure function of the input forest: same input, same
//! positions. There is no stability guarantee across additions; adding a
//! cluster re-angles every existing one, which is acceptable for an
//! exploratory canvas.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::foundation::core::{BatchId, HypothesisId, Point};
use crate::hypothesis::model::Hypothesis;
use crate::layout::node::{Edge, Positioned};

/// Radius of the ring the cluster centroids sit on.
pub const CLUSTER_RING_RADIUS: f64 = 900.0;

/// Radius of the ring the members of one cluster sit on.
pub const ITEM_RING_RADIUS: f64 = 350.0;

/// Vertical offset used for a lone cluster so it does not sit on the anchor.
pub const SINGLE_CLUSTER_OFFSET_Y: f64 = 500.0;

/// Computed canvas layout: one positioned node per hypothesis plus the
/// lineage edge overlay.
///
/// Spokes from the origin anchor to every node are implicit; the renderer
/// draws origin→`pos` per node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ClusterLayout {
    /// Every input hypothesis, positioned. Exactly one entry per input.
    pub nodes: Vec<Positioned<HypothesisId>>,
    /// Parent→child edges for every hypothesis whose parent resolved.
    pub lineage: Vec<Edge<HypothesisId>>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum ClusterKey {
    Parent(HypothesisId),
    Batch(BatchId),
}

fn cluster_key(h: &Hypothesis) -> ClusterKey {
    match h.parent_id {
        Some(parent) => ClusterKey::Parent(parent),
        None => ClusterKey::Batch(h.batch_id.clone()),
    }
}

/// Compute positions for the whole hypothesis forest.
pub fn cluster_layout(hypotheses: &[Hypothesis]) -> ClusterLayout {
    // Partition into clusters, first-seen order.
    let mut clusters: Vec<(ClusterKey, Vec<&Hypothesis>)> = Vec::new();
    for h in hypotheses {
        let key = cluster_key(h);
        match clusters.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(h),
            None => clusters.push((key, vec![h])),
        }
    }

    let cluster_count = clusters.len();
    let mut nodes = Vec::with_capacity(hypotheses.len());

    for (c_index, (_, members)) in clusters.iter().enumerate() {
        let centroid = if cluster_count > 1 {
            let angle = TAU * (c_index as f64) / (cluster_count as f64);
            Point::new(
                angle.cos() * CLUSTER_RING_RADIUS,
                angle.sin() * CLUSTER_RING_RADIUS,
            )
        } else {
            Point::new(0.0, SINGLE_CLUSTER_OFFSET_Y)
        };

        let member_count = members.len();
        for (m_index, h) in members.iter().enumerate() {
            // member_count >= 1 always; a single member lands at angle 0.
            let angle = TAU * (m_index as f64) / (member_count as f64);
            nodes.push(Positioned {
                id: h.id,
                pos: Point::new(
                    centroid.x + angle.cos() * ITEM_RING_RADIUS,
                    centroid.y + angle.sin() * ITEM_RING_RADIUS,
                ),
            });
        }
    }

    // Lineage overlay: parent -> child where the parent still exists. A
    // dangling parent reference simply draws no edge.
    let positions: HashMap<HypothesisId, Point> =
        nodes.iter().map(|n| (n.id, n.pos)).collect();
    let mut lineage = Vec::new();
    for h in hypotheses {
        let Some(parent) = h.parent_id else { continue };
        let (Some(&from), Some(&to)) = (positions.get(&parent), positions.get(&h.id)) else {
            continue;
        };
        lineage.push(Edge {
            from_id: parent,
            to_id: h.id,
            from,
            to,
        });
    }

    ClusterLayout { nodes, lineage }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cluster.rs"]
mod tests;
