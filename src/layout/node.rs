use crate::foundation::core::Point;

/// A node annotated with its computed 2D position.
///
/// Shared output model for both layout variants; positions are derived on
/// every recomputation and never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Positioned<Id> {
    /// The laid-out node.
    pub id: Id,
    /// Computed position in canvas coordinates (origin = anchor).
    pub pos: Point,
}

/// A drawable straight edge between two computed positions.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Edge<Id> {
    /// Source node.
    pub from_id: Id,
    /// Target node.
    pub to_id: Id,
    /// Source position.
    pub from: Point,
    /// Target position.
    pub to: Point,
}
