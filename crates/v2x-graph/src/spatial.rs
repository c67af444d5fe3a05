//! R-tree index over node positions for fixed-radius neighbour queries.
//!
//! Proximity edges need every pair of nodes closer than a threshold.  Instead
//! of testing all `n²` pairs, each node queries the R-tree for candidates in
//! its radius.  Results are filtered with the exact plane distance and
//! returned in ascending row order, so the edges come out in the same order
//! as the nested `i < j` scan would produce them.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use v2x_core::Point2;

/// Slack added to the squared query radius so float rounding inside the
/// tree never drops a pair the exact check would keep.
const QUERY_SLACK: f64 = 1e-6;

/// Entry stored in the R-tree: a 2-D point and its node row.
#[derive(Clone)]
struct RowEntry {
    point: [f64; 2],
    row:   usize,
}

impl RTreeObject for RowEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for RowEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Static neighbour index, bulk-loaded once per snapshot.
pub struct NeighborIndex {
    positions: Vec<Point2>,
    tree:      RTree<RowEntry>,
}

impl NeighborIndex {
    /// Index `positions`; row `i` is `positions[i]`.  Non-finite positions
    /// are kept out of the tree and therefore never have neighbours.
    pub fn new(positions: Vec<Point2>) -> Self {
        let entries: Vec<RowEntry> = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(row, p)| RowEntry { point: p.as_array(), row })
            .collect();
        let tree = RTree::bulk_load(entries);
        Self { positions, tree }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rows whose plane distance to `row` is at most `radius`, excluding
    /// `row` itself, in ascending order.
    pub fn neighbors_of(&self, row: usize, radius: f64) -> Vec<usize> {
        let center = self.positions[row];
        if !center.is_finite() {
            return Vec::new();
        }
        let mut rows: Vec<usize> = self
            .tree
            .locate_within_distance(center.as_array(), radius * radius + QUERY_SLACK)
            .filter(|e| e.row != row && center.distance(self.positions[e.row]) <= radius)
            .map(|e| e.row)
            .collect();
        rows.sort_unstable();
        rows
    }
}
