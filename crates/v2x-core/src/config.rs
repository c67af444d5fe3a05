//! Builder configuration.
//!
//! Every threshold and scale the graph builder uses lives in one immutable
//! [`GraphConfig`] value handed to the builder at construction.  The feature
//! and attribute widths are part of the graph schema the downstream encoder
//! is compiled against, so they are associated constants rather than fields.

use crate::{CoreError, CoreResult, Point2};

/// Graph builder configuration.
///
/// Typically left at [`Default`] or loaded from JSON by the application
/// (with the `serde` feature; missing keys take their default).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Maximum 3-D distance for a communication edge.  Default: 500.0.
    pub communication_threshold: f64,

    /// Reserved for interference edges, which are not built yet.
    /// Default: 300.0.
    pub interference_threshold: f64,

    /// Maximum plane distance for a proximity edge.  Default: 200.0.
    pub proximity_threshold: f64,

    /// Scene width used to normalise x coordinates.
    pub scene_scale_x: f64,

    /// Scene height used to normalise y coordinates.
    pub scene_scale_y: f64,

    /// Receiver of the reference V2I downlink.  Radio-unit direction
    /// features are `(0, 0)` while this is `None`.
    pub downlink_target: Option<Point2>,

    /// Whether the NLOS channel model is active.  CSI features read as zero
    /// when it is not.
    pub nlos_model_enabled: bool,

    /// Nominal transmit power in watts.
    pub nominal_tx_power: f64,

    /// Share of the nominal power used for the per-pair CSI query.
    /// Default: 0.1.
    pub tx_power_fraction: f64,

    /// Link bandwidth in hertz passed to the CSI query.
    pub bandwidth_hz: f64,

    /// Default radius for subgraph extraction.  Default: 500.0.
    pub inference_radius: f64,
}

impl GraphConfig {
    /// Feature-vector width of a radio-unit node.
    pub const RADIO_UNIT_FEATURE_DIM: usize = 12;

    /// Feature-vector width of a vehicle node.
    pub const VEHICLE_FEATURE_DIM: usize = 6;

    /// Attribute width of every edge relation.
    pub const EDGE_ATTR_DIM: usize = 4;

    /// Transmit power used for the per-pair CSI query.
    #[inline]
    pub fn query_tx_power(&self) -> f64 {
        self.nominal_tx_power * self.tx_power_fraction
    }

    /// Check that every threshold and scale is usable.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("communication_threshold", self.communication_threshold),
            ("interference_threshold",  self.interference_threshold),
            ("proximity_threshold",     self.proximity_threshold),
            ("scene_scale_x",           self.scene_scale_x),
            ("scene_scale_y",           self.scene_scale_y),
            ("bandwidth_hz",            self.bandwidth_hz),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if !(self.nominal_tx_power.is_finite() && self.nominal_tx_power >= 0.0) {
            return Err(CoreError::Config(format!(
                "nominal_tx_power must be non-negative, got {}",
                self.nominal_tx_power
            )));
        }
        if !(self.tx_power_fraction > 0.0 && self.tx_power_fraction <= 1.0) {
            return Err(CoreError::Config(format!(
                "tx_power_fraction must lie in (0, 1], got {}",
                self.tx_power_fraction
            )));
        }
        if !(self.inference_radius.is_finite() && self.inference_radius >= 0.0) {
            return Err(CoreError::Config(format!(
                "inference_radius must be non-negative, got {}",
                self.inference_radius
            )));
        }
        if let Some(target) = self.downlink_target {
            if !target.is_finite() {
                return Err(CoreError::Config(format!(
                    "downlink_target must be finite, got {target}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            communication_threshold: 500.0,
            interference_threshold:  300.0,
            proximity_threshold:     200.0,
            scene_scale_x:           1_000.0,
            scene_scale_y:           1_000.0,
            downlink_target:         None,
            nlos_model_enabled:      true,
            nominal_tx_power:        0.2, // 23 dBm
            tx_power_fraction:       0.1,
            bandwidth_hz:            10e6,
            inference_radius:        500.0,
        }
    }
}
