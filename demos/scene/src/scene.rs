//! Synthetic highway scene: radio units along a straight road, vehicles
//! driving both ways and wrapping around at the ends.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use v2x_core::{
    ChannelModel, GraphConfig, Point2, RadioUnitId, RadioUnitState, Rect, VehicleId, VehicleState,
};

/// Road length in metres; x runs from 0 to this.
pub const ROAD_LENGTH_M: f64 = 1_500.0;

/// Half-width of the carriageway.
const ROAD_HALF_WIDTH_M: f64 = 10.0;

/// Seconds per epoch.
const EPOCH_SECS: f64 = 1.0;

pub struct Scene {
    pub radio_units: Vec<RadioUnitState>,
    pub vehicles:    Vec<VehicleState>,
    speeds:          Vec<f64>,
}

impl Scene {
    /// `units` radio units evenly spaced along the road, each covering its
    /// own stretch, and `vehicle_count` vehicles at random positions.
    pub fn highway(units: u32, vehicle_count: u32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let spacing = ROAD_LENGTH_M / units as f64;

        let radio_units = (0..units)
            .map(|i| {
                let x = spacing * (i as f64 + 0.5);
                let region = Rect::new(
                    Point2::new(x - spacing / 2.0, -100.0),
                    Point2::new(x + spacing / 2.0, 100.0),
                );
                RadioUnitState::new(RadioUnitId(i), Point2::new(x, 20.0), region)
            })
            .collect();

        let mut vehicles = Vec::with_capacity(vehicle_count as usize);
        let mut speeds = Vec::with_capacity(vehicle_count as usize);
        for i in 0..vehicle_count {
            let eastbound = rng.gen_bool(0.5);
            let y = if eastbound { -ROAD_HALF_WIDTH_M / 2.0 } else { ROAD_HALF_WIDTH_M / 2.0 };
            let heading = if eastbound { Point2::new(1.0, 0.0) } else { Point2::new(-1.0, 0.0) };
            let mut v = VehicleState::new(
                VehicleId(i),
                Point2::new(rng.gen_range(0.0..ROAD_LENGTH_M), y),
                heading,
            );
            v.is_first_epoch = true;
            vehicles.push(v);
            speeds.push(rng.gen_range(15.0..35.0));
        }

        Self { radio_units, vehicles, speeds }
    }

    /// Advance vehicles one epoch and refresh what each radio unit observes.
    pub fn step<C: ChannelModel>(&mut self, channel: &C, config: &GraphConfig) {
        for (v, &speed) in self.vehicles.iter_mut().zip(&self.speeds) {
            let x = v.position.x + v.direction.x * speed * EPOCH_SECS;
            v.position.x = x.rem_euclid(ROAD_LENGTH_M);
            v.is_first_epoch = false;
        }
        self.observe(channel, config);
    }

    /// Fill the per-unit measurements the graph builder reads.
    pub fn observe<C: ChannelModel>(&mut self, channel: &C, config: &GraphConfig) {
        for v in &mut self.vehicles {
            v.distance_to_radio_unit = self
                .radio_units
                .iter()
                .filter(|ru| ru.coverage_region.contains(v.position))
                .map(|ru| ru.position.distance(v.position))
                .min_by(f64::total_cmp);
        }

        for ru in &mut self.radio_units {
            let mut in_range: Vec<Point2> = self
                .vehicles
                .iter()
                .map(|v| v.position)
                .filter(|&p| ru.coverage_region.contains(p))
                .collect();
            in_range.sort_by(|a, b| ru.position.distance(*a).total_cmp(&ru.position.distance(*b)));

            ru.vehicle_present = !in_range.is_empty();
            ru.csi_state = None;
            ru.previous_snr = None;
            if let Some(&nearest) = in_range.first() {
                let distance = channel.distance_3d(ru.position, nearest).ok();
                let csi = channel
                    .channel_state_info(ru.position, nearest, config.nominal_tx_power, config.bandwidth_hz)
                    .ok();
                if let (Some(d), Some(csi)) = (distance, csi) {
                    ru.previous_snr = Some(csi.snr_db);
                    ru.csi_state = Some(vec![d, csi.path_loss_db, csi.rx_power_dbm.unwrap_or(0.0), csi.snr_db]);
                }
            }
            // Crude interference proxy: more vehicles in range, more V2V noise.
            ru.previous_v2v_interference = Some(in_range.len().saturating_sub(1) as f64 * 2e-10);
            ru.previous_v2i_interference = Some(in_range.len() as f64 * 1e-10);
            ru.vehicles_in_range = in_range;
        }
    }
}

#[cfg(test)]
mod tests {
    use v2x_core::{GraphConfig, Point2};

    use super::Scene;
    use crate::channel::LogDistanceChannel;

    #[test]
    fn emptied_unit_forgets_its_measurements() {
        let channel = LogDistanceChannel::default();
        let config = GraphConfig::default();
        let mut scene = Scene::highway(1, 1, 7);

        scene.observe(&channel, &config);
        assert!(scene.radio_units[0].previous_snr.is_some());
        assert!(scene.radio_units[0].csi_state.is_some());

        // Off the road and out of the unit's coverage.
        scene.vehicles[0].position = Point2::new(100.0, 500.0);
        scene.observe(&channel, &config);
        let ru = &scene.radio_units[0];
        assert!(!ru.vehicle_present);
        assert!(ru.previous_snr.is_none());
        assert!(ru.csi_state.is_none());
        assert!(scene.vehicles[0].distance_to_radio_unit.is_none());
    }
}
