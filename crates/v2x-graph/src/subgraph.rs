//! Radius-bounded local views around one focal radio unit.
//!
//! A full-scene snapshot grows with the whole deployment; a subgraph only
//! with what one unit can see.  Filtering happens on the inputs, and the
//! filtered lists go through the normal assembler, so a subgraph has exactly
//! the same layout and invariants as a full snapshot.

use v2x_core::{ChannelModel, Point2, RadioUnitId, RadioUnitState, VehicleState};

use crate::{GraphBuilder, GraphError, GraphResult, GraphSnapshot};

impl<C: ChannelModel> GraphBuilder<C> {
    /// Snapshot of everything within `radius` of radio unit `focal`.
    ///
    /// Keeps the focal unit (for any radius, including 0 or a negative
    /// value), every other radio unit within `radius`, and every vehicle
    /// within `radius`, all measured from the focal unit's position.
    /// Relative input order is preserved.
    ///
    /// Returns [`GraphError::UnknownFocalUnit`] if `focal` is not in
    /// `radio_units`.
    pub fn build_subgraph(
        &self,
        focal:       RadioUnitId,
        radio_units: &[RadioUnitState],
        vehicles:    &[VehicleState],
        epoch:       u64,
        radius:      f64,
    ) -> GraphResult<GraphSnapshot> {
        let center = radio_units
            .iter()
            .find(|ru| ru.id == focal)
            .ok_or(GraphError::UnknownFocalUnit(focal))?
            .position;

        let within = |p: Point2| center.distance(p) <= radius;

        let local_units: Vec<&RadioUnitState> = radio_units
            .iter()
            .filter(|ru| ru.id == focal || within(ru.position))
            .collect();
        let local_vehicles: Vec<&VehicleState> =
            vehicles.iter().filter(|v| within(v.position)).collect();

        tracing::trace!(
            epoch,
            focal = %focal,
            radius,
            radio_units = local_units.len(),
            vehicles = local_vehicles.len(),
            "subgraph inputs filtered"
        );
        self.build_from_refs(&local_units, &local_vehicles, epoch)
    }

    /// [`build_subgraph`](Self::build_subgraph) with the configured
    /// inference radius.
    pub fn build_default_subgraph(
        &self,
        focal:       RadioUnitId,
        radio_units: &[RadioUnitState],
        vehicles:    &[VehicleState],
        epoch:       u64,
    ) -> GraphResult<GraphSnapshot> {
        let radius = self.config().inference_radius;
        self.build_subgraph(focal, radio_units, vehicles, epoch, radius)
    }

    /// One subgraph per radio unit, in radio-unit input order.
    ///
    /// With the `parallel` feature the builds run on Rayon's thread pool;
    /// the output order is the same either way.  A failed build does not
    /// affect the others.
    pub fn build_all_subgraphs(
        &self,
        radio_units: &[RadioUnitState],
        vehicles:    &[VehicleState],
        epoch:       u64,
        radius:      f64,
    ) -> Vec<GraphResult<GraphSnapshot>> {
        #[cfg(not(feature = "parallel"))]
        {
            radio_units
                .iter()
                .map(|ru| self.build_subgraph(ru.id, radio_units, vehicles, epoch, radius))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            radio_units
                .par_iter()
                .map(|ru| self.build_subgraph(ru.id, radio_units, vehicles, epoch, radius))
                .collect()
        }
    }
}
