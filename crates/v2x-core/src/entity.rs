//! Point-in-time entity state read by the graph builder.
//!
//! These are read-only views filled by the simulator once per epoch.  Every
//! attribute a simulator may not have yet is an `Option` with a documented
//! default, so the builder never has to guess whether a field exists.

use crate::{Point2, RadioUnitId, Rect, VehicleId};

/// State of one roadside radio unit at the current epoch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioUnitState {
    pub id: RadioUnitId,

    /// Antenna position.
    pub position: Point2,

    /// Rectangular service area.  Communication edges are only formed with
    /// vehicles inside it (bounds inclusive).
    pub coverage_region: Rect,

    /// Positions of the vehicles currently in range, nearest first.
    pub vehicles_in_range: Vec<Point2>,

    /// `true` if a vehicle is being served this epoch.
    pub vehicle_present: bool,

    /// SNR measured at the previous epoch, in dB.
    pub previous_snr: Option<f64>,

    /// V2I interference power measured at the previous epoch, in watts.
    pub previous_v2i_interference: Option<f64>,

    /// V2V interference power measured at the previous epoch, in watts.
    pub previous_v2v_interference: Option<f64>,

    /// Current channel-state vector.  Element 0 is the link distance and
    /// element 3 the SNR; the other slots are not read.
    pub csi_state: Option<Vec<f64>>,
}

impl RadioUnitState {
    /// A radio unit with no measurements yet and nothing in range.
    pub fn new(id: RadioUnitId, position: Point2, coverage_region: Rect) -> Self {
        Self {
            id,
            position,
            coverage_region,
            vehicles_in_range:         Vec::new(),
            vehicle_present:           false,
            previous_snr:              None,
            previous_v2i_interference: None,
            previous_v2v_interference: None,
            csi_state:                 None,
        }
    }

    /// Position the unit is currently steering towards: its nearest in-range
    /// vehicle, or the unit itself when nothing is in range.
    pub fn effective_position(&self) -> Point2 {
        self.vehicles_in_range.first().copied().unwrap_or(self.position)
    }
}

/// State of one vehicle at the current epoch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    pub id: VehicleId,
    pub position: Point2,

    /// Heading as a (roughly) unit vector, components in `[-1, 1]`.
    pub direction: Point2,

    /// `true` on the first epoch this vehicle is observed.
    pub is_first_epoch: bool,

    /// Distance to the associated radio unit, if one is associated.
    pub distance_to_radio_unit: Option<f64>,
}

impl VehicleState {
    pub fn new(id: VehicleId, position: Point2, direction: Point2) -> Self {
        Self {
            id,
            position,
            direction,
            is_first_epoch:         false,
            distance_to_radio_unit: None,
        }
    }
}
