//! Snapshot data model: nodes, edges, and the tensors built from them.
//!
//! # Row order
//!
//! Every tensor in a [`GraphSnapshot`] is indexed by node *row*:
//!
//! ```text
//! rows [0, R)      radio units, in input order
//! rows [R, R + V)  vehicles,    in input order
//! ```
//!
//! The feature matrix, the kind labels, and every edge index use this order,
//! so a downstream encoder can gather rows without any id lookup.

use std::fmt;

use v2x_core::{ChannelError, GraphConfig, Point2, RadioUnitId, VehicleId};

/// Fixed-width attribute vector carried by every edge.
pub type EdgeAttr = [f32; GraphConfig::EDGE_ATTR_DIM];

// ── Node ──────────────────────────────────────────────────────────────────────

/// The two node types of the heterogeneous graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    RadioUnit,
    Vehicle,
}

impl NodeKind {
    /// Integer label used by the encoder: 0 = radio unit, 1 = vehicle.
    #[inline]
    pub fn label(self) -> u8 {
        match self {
            NodeKind::RadioUnit => 0,
            NodeKind::Vehicle   => 1,
        }
    }

    /// Canonical feature width for this kind.
    #[inline]
    pub fn feature_dim(self) -> usize {
        match self {
            NodeKind::RadioUnit => GraphConfig::RADIO_UNIT_FEATURE_DIM,
            NodeKind::Vehicle   => GraphConfig::VEHICLE_FEATURE_DIM,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::RadioUnit => RadioUnitId::PREFIX,
            NodeKind::Vehicle   => VehicleId::PREFIX,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One graph node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Unique key within a snapshot, `"<kind>_<original_id>"`.
    pub id: String,
    pub kind: NodeKind,
    /// Simulator id of the radio unit or vehicle.
    pub original_id: u32,
    pub position: Point2,
    /// Heading; vehicles only.
    pub direction: Option<Point2>,
    /// Exactly `kind.feature_dim()` values.
    pub features: Vec<f32>,
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// The three edge relations of the schema.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// Radio unit → vehicle link that is feasible this epoch.
    Communication,
    /// Reserved.  No edges are produced for this relation yet.
    Interference,
    /// Any two nodes that are spatially close.
    Proximity,
}

impl Relation {
    /// All relations in schema order.
    pub const ALL: [Relation; 3] = [
        Relation::Communication,
        Relation::Interference,
        Relation::Proximity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Communication => "communication",
            Relation::Interference  => "interference",
            Relation::Proximity     => "proximity",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directed edge between two nodes of the same snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
    pub relation: Relation,
    pub distance: f64,
    pub attributes: EdgeAttr,
}

/// One value per relation.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerRelation<T> {
    pub communication: T,
    pub interference: T,
    pub proximity: T,
}

impl<T> PerRelation<T> {
    /// Build by calling `f` once per relation, in schema order.
    pub fn try_from_fn<E>(mut f: impl FnMut(Relation) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            communication: f(Relation::Communication)?,
            interference:  f(Relation::Interference)?,
            proximity:     f(Relation::Proximity)?,
        })
    }

    #[inline]
    pub fn get(&self, relation: Relation) -> &T {
        match relation {
            Relation::Communication => &self.communication,
            Relation::Interference  => &self.interference,
            Relation::Proximity     => &self.proximity,
        }
    }
}

// ── Tensors ───────────────────────────────────────────────────────────────────

/// Row-major `rows × cols` matrix of node features.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl FeatureMatrix {
    /// Feature row of node `row`.
    ///
    /// # Panics
    /// Panics if `row >= self.rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        // `chunks_exact(0)` panics; a zero-width matrix has no data anyway.
        self.data.chunks_exact(self.cols.max(1))
    }
}

/// COO edge index: parallel source-row and target-row arrays.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeIndex {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
}

impl EdgeIndex {
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// `(source_row, target_row)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.source.iter().copied().zip(self.target.iter().copied())
    }
}

/// Index and attribute tensors of one non-empty relation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeTensors {
    pub edge_index: EdgeIndex,
    /// One attribute row per edge, aligned with `edge_index`.
    pub edge_attr: Vec<EdgeAttr>,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// A radio-unit/vehicle pair left out of the communication relation because
/// the channel model failed for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedPair {
    pub radio_unit: RadioUnitId,
    pub vehicle: VehicleId,
    pub reason: ChannelError,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotMetadata {
    pub epoch: u64,
    pub num_radio_units: usize,
}

/// The heterogeneous graph of one epoch.
///
/// Built by [`GraphBuilder`](crate::GraphBuilder); immutable afterwards and
/// owned by the caller.  Construct only through the builder so the tensors
/// stay consistent with the node list.  Serialisation is one-way for the
/// same reason.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphSnapshot {
    pub(crate) metadata: SnapshotMetadata,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: PerRelation<Vec<Edge>>,
    pub(crate) node_features: FeatureMatrix,
    pub(crate) node_kinds: Vec<u8>,
    pub(crate) edge_tensors: PerRelation<Option<EdgeTensors>>,
    pub(crate) skipped_pairs: Vec<SkippedPair>,
}

impl GraphSnapshot {
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.metadata.epoch
    }

    #[inline]
    pub fn metadata(&self) -> SnapshotMetadata {
        self.metadata
    }

    /// Nodes in row order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_radio_units(&self) -> usize {
        self.metadata.num_radio_units
    }

    /// Edges of `relation`, in emission order.
    #[inline]
    pub fn edges(&self, relation: Relation) -> &[Edge] {
        self.edges.get(relation)
    }

    #[inline]
    pub fn num_edges(&self, relation: Relation) -> usize {
        self.edges.get(relation).len()
    }

    /// Zero-padded node feature matrix, one row per node.
    #[inline]
    pub fn node_features(&self) -> &FeatureMatrix {
        &self.node_features
    }

    #[inline]
    pub fn feature_row(&self, row: usize) -> &[f32] {
        self.node_features.row(row)
    }

    /// Kind label per row (0 = radio unit, 1 = vehicle).
    #[inline]
    pub fn node_kinds(&self) -> &[u8] {
        &self.node_kinds
    }

    /// Tensors of `relation`, or `None` when the relation has no edges.
    #[inline]
    pub fn edge_tensors(&self, relation: Relation) -> Option<&EdgeTensors> {
        self.edge_tensors.get(relation).as_ref()
    }

    /// Pairs dropped from the communication relation by channel failures.
    #[inline]
    pub fn skipped_pairs(&self) -> &[SkippedPair] {
        &self.skipped_pairs
    }

    /// Row index of the node with key `id`.
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// The node with key `id`.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
