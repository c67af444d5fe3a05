//! The graph assembler: entity lists → one [`GraphSnapshot`].

use tracing::{debug, error, warn};

use v2x_core::{ChannelModel, GraphConfig, RadioUnitState, VehicleState};

use crate::edges::EdgeCalculator;
use crate::features::{radio_unit_features, vehicle_features};
use crate::{
    Edge, EdgeIndex, EdgeTensors, FeatureMatrix, GraphError, GraphResult, GraphSnapshot, Node,
    NodeKind, PerRelation, Relation, SnapshotMetadata,
};

#[cfg(feature = "fx-hash")]
pub(crate) type RowMap<'a> = rustc_hash::FxHashMap<&'a str, usize>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type RowMap<'a> = std::collections::HashMap<&'a str, usize>;

/// Builds per-epoch graph snapshots.
///
/// The builder holds only its validated configuration and the channel
/// model; it keeps no per-epoch state, so one value can serve every epoch
/// and, when `C: Sync`, several threads at once.
///
/// # Example
///
/// ```rust,ignore
/// let builder = GraphBuilder::new(GraphConfig::default(), channel)?;
/// let snapshot = builder.build(&radio_units, &vehicles, epoch)?;
/// let comm = snapshot.edge_tensors(Relation::Communication);
/// ```
pub struct GraphBuilder<C: ChannelModel> {
    config:  GraphConfig,
    channel: C,
}

impl<C: ChannelModel> GraphBuilder<C> {
    /// Validate `config` and create a builder.
    pub fn new(config: GraphConfig, channel: C) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self { config, channel })
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[inline]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Build the full-scene snapshot for `epoch`.
    ///
    /// Radio units take rows `[0, R)` and vehicles rows `[R, R + V)`, both in
    /// input order.  Any error aborts the whole snapshot.
    pub fn build(
        &self,
        radio_units: &[RadioUnitState],
        vehicles:    &[VehicleState],
        epoch:       u64,
    ) -> GraphResult<GraphSnapshot> {
        let radio_units: Vec<&RadioUnitState> = radio_units.iter().collect();
        let vehicles: Vec<&VehicleState> = vehicles.iter().collect();
        self.build_from_refs(&radio_units, &vehicles, epoch)
    }

    /// [`build`](Self::build) over borrowed, possibly filtered, entity lists.
    pub(crate) fn build_from_refs(
        &self,
        radio_units: &[&RadioUnitState],
        vehicles:    &[&VehicleState],
        epoch:       u64,
    ) -> GraphResult<GraphSnapshot> {
        self.assemble(radio_units, vehicles, epoch).inspect_err(|e| {
            error!(epoch, error = %e, "graph build failed");
        })
    }

    fn assemble(
        &self,
        radio_units: &[&RadioUnitState],
        vehicles:    &[&VehicleState],
        epoch:       u64,
    ) -> GraphResult<GraphSnapshot> {
        // ── Nodes ─────────────────────────────────────────────────────────
        let mut nodes = Vec::with_capacity(radio_units.len() + vehicles.len());
        nodes.extend(radio_units.iter().map(|ru| self.radio_unit_node(ru)));
        nodes.extend(vehicles.iter().map(|v| self.vehicle_node(v)));
        let rows = row_map(&nodes)?;

        // ── Edges ─────────────────────────────────────────────────────────
        let calc = EdgeCalculator::new(&self.config, &self.channel);
        let comm = calc.communication_edges(radio_units, vehicles);
        let edges = PerRelation {
            communication: comm.edges,
            interference:  calc.interference_edges(&nodes),
            proximity:     calc.proximity_edges(&nodes),
        };

        // ── Tensors ───────────────────────────────────────────────────────
        let node_features = feature_matrix(&nodes)?;
        let node_kinds = nodes.iter().map(|n| n.kind.label()).collect();
        let edge_tensors =
            PerRelation::try_from_fn(|relation| edge_tensors(relation, edges.get(relation), &rows))?;

        if !comm.skipped.is_empty() {
            warn!(epoch, skipped = comm.skipped.len(), "channel failures dropped communication pairs");
        }
        debug!(
            epoch,
            nodes = nodes.len(),
            communication = edges.communication.len(),
            proximity = edges.proximity.len(),
            "graph snapshot built"
        );

        Ok(GraphSnapshot {
            metadata: SnapshotMetadata { epoch, num_radio_units: radio_units.len() },
            nodes,
            edges,
            node_features,
            node_kinds,
            edge_tensors,
            skipped_pairs: comm.skipped,
        })
    }

    fn radio_unit_node(&self, ru: &RadioUnitState) -> Node {
        Node {
            id:          ru.id.node_key(),
            kind:        NodeKind::RadioUnit,
            original_id: ru.id.0,
            position:    ru.position,
            direction:   None,
            features:    radio_unit_features(ru, &self.config),
        }
    }

    fn vehicle_node(&self, v: &VehicleState) -> Node {
        Node {
            id:          v.id.node_key(),
            kind:        NodeKind::Vehicle,
            original_id: v.id.0,
            position:    v.position,
            direction:   Some(v.direction),
            features:    vehicle_features(v, &self.config),
        }
    }
}

// ── Tensor assembly ───────────────────────────────────────────────────────────

/// Map node keys to rows; a repeated key is fatal.
pub(crate) fn row_map(nodes: &[Node]) -> GraphResult<RowMap<'_>> {
    let mut rows = RowMap::default();
    rows.reserve(nodes.len());
    for (row, node) in nodes.iter().enumerate() {
        if rows.insert(node.id.as_str(), row).is_some() {
            return Err(GraphError::DuplicateNode(node.id.clone()));
        }
    }
    Ok(rows)
}

/// Stack node features into one matrix as wide as the widest kind present.
///
/// Each row must already have its kind's canonical width; the only padding
/// here is the shared matrix width (vehicle rows padded up to radio-unit
/// width when both kinds are present).
pub(crate) fn feature_matrix(nodes: &[Node]) -> GraphResult<FeatureMatrix> {
    for node in nodes {
        let expected = node.kind.feature_dim();
        if node.features.len() != expected {
            return Err(GraphError::FeatureWidth {
                node: node.id.clone(),
                expected,
                got: node.features.len(),
            });
        }
    }

    let cols = nodes.iter().map(|n| n.features.len()).max().unwrap_or(0);
    let mut data = Vec::with_capacity(nodes.len() * cols);
    for node in nodes {
        data.extend_from_slice(&node.features);
        data.resize(data.len() + cols - node.features.len(), 0.0);
    }
    Ok(FeatureMatrix { rows: nodes.len(), cols, data })
}

/// Index and attribute tensors of one relation; `None` for no edges.
pub(crate) fn edge_tensors(
    relation: Relation,
    edges:    &[Edge],
    rows:     &RowMap<'_>,
) -> GraphResult<Option<EdgeTensors>> {
    if edges.is_empty() {
        return Ok(None);
    }

    let lookup = |id: &str| {
        rows.get(id).copied().ok_or_else(|| GraphError::UnknownNode {
            relation,
            id: id.to_owned(),
        })
    };

    let mut edge_index = EdgeIndex {
        source: Vec::with_capacity(edges.len()),
        target: Vec::with_capacity(edges.len()),
    };
    let mut edge_attr = Vec::with_capacity(edges.len());
    for edge in edges {
        edge_index.source.push(lookup(&edge.source_id)?);
        edge_index.target.push(lookup(&edge.target_id)?);
        edge_attr.push(edge.attributes);
    }
    Ok(Some(EdgeTensors { edge_index, edge_attr }))
}
