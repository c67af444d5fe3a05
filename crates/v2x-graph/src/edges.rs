//! Edge relations between the nodes of one snapshot.
//!
//! | Relation        | Pairs                         | Attributes                               |
//! |-----------------|-------------------------------|------------------------------------------|
//! | `Communication` | radio unit → covered vehicle  | `[1 − d/T, d/1000, PL/100, SNR/20]`      |
//! | `Interference`  | none yet                      | —                                        |
//! | `Proximity`     | any two nodes within `T_prox` | `[1 − d/T_prox, 0, 0, 0]`                |

use tracing::debug;

use v2x_core::{
    ChannelError, ChannelModel, ChannelResult, GraphConfig, RadioUnitState, VehicleState,
};

use crate::spatial::NeighborIndex;
use crate::{Edge, EdgeAttr, Node, Relation, SkippedPair};

/// Communication edges plus the pairs the channel model could not evaluate.
#[derive(Debug, Default)]
pub struct CommunicationEdges {
    pub edges:   Vec<Edge>,
    pub skipped: Vec<SkippedPair>,
}

/// Computes the edge relations with a borrowed configuration and channel.
pub struct EdgeCalculator<'a, C: ChannelModel> {
    config:  &'a GraphConfig,
    channel: &'a C,
}

impl<'a, C: ChannelModel> EdgeCalculator<'a, C> {
    pub fn new(config: &'a GraphConfig, channel: &'a C) -> Self {
        Self { config, channel }
    }

    /// One edge per (radio unit, vehicle) pair with the vehicle inside the
    /// unit's coverage region and within the communication threshold.
    ///
    /// Pairs are visited radio unit by radio unit, vehicles in input order.
    /// A channel failure drops only that pair.
    pub fn communication_edges(
        &self,
        radio_units: &[&RadioUnitState],
        vehicles:    &[&VehicleState],
    ) -> CommunicationEdges {
        let mut out = CommunicationEdges::default();

        for ru in radio_units {
            for v in vehicles {
                if !ru.coverage_region.contains(v.position) {
                    continue;
                }
                match self.link(ru, v) {
                    Ok(Some(edge)) => out.edges.push(edge),
                    Ok(None) => {}
                    Err(reason) => {
                        debug!(radio_unit = %ru.id, vehicle = %v.id, %reason, "channel query failed; pair skipped");
                        out.skipped.push(SkippedPair { radio_unit: ru.id, vehicle: v.id, reason });
                    }
                }
            }
        }
        out
    }

    /// Always empty.  The relation is part of the schema so encoders can
    /// allocate for it, but there is no interference model to drive it.
    pub fn interference_edges(&self, _nodes: &[Node]) -> Vec<Edge> {
        Vec::new()
    }

    /// One edge per unordered node pair `(i, j)`, `i < j` in row order, with
    /// plane distance at most the proximity threshold.
    pub fn proximity_edges(&self, nodes: &[Node]) -> Vec<Edge> {
        let threshold = self.config.proximity_threshold;
        let index = NeighborIndex::new(nodes.iter().map(|n| n.position).collect());

        let mut edges = Vec::new();
        for (i, a) in nodes.iter().enumerate() {
            for j in index.neighbors_of(i, threshold) {
                if j <= i {
                    continue;
                }
                let b = &nodes[j];
                let distance = a.position.distance(b.position);
                let weight = 1.0 - distance / threshold;
                edges.push(Edge {
                    source_id:  a.id.clone(),
                    target_id:  b.id.clone(),
                    relation:   Relation::Proximity,
                    distance,
                    attributes: [weight as f32, 0.0, 0.0, 0.0],
                });
            }
        }
        edges
    }

    /// Evaluate one covered pair.  `Ok(None)` means out of range.
    fn link(&self, ru: &RadioUnitState, v: &VehicleState) -> ChannelResult<Option<Edge>> {
        let threshold = self.config.communication_threshold;

        let distance = self.channel.distance_3d(ru.position, v.position)?;
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(ChannelError::InvalidInput(format!("distance {distance}")));
        }
        if distance > threshold {
            return Ok(None);
        }

        let csi = self.channel.channel_state_info(
            ru.position,
            v.position,
            self.config.query_tx_power(),
            self.config.bandwidth_hz,
        )?;
        if !(csi.path_loss_db.is_finite() && csi.snr_db.is_finite()) {
            return Err(ChannelError::Model(format!(
                "non-finite CSI (path loss {}, snr {})",
                csi.path_loss_db, csi.snr_db
            )));
        }

        let attributes: EdgeAttr = [
            (1.0 - distance / threshold) as f32,
            (distance / 1_000.0) as f32,
            (csi.path_loss_db / 100.0) as f32,
            (csi.snr_db / 20.0) as f32,
        ];
        Ok(Some(Edge {
            source_id: ru.id.node_key(),
            target_id: v.id.node_key(),
            relation:  Relation::Communication,
            distance,
            attributes,
        }))
    }
}
