//! Per-entity feature extraction.
//!
//! # Radio-unit layout (12)
//!
//! | Slot  | Value                                                      |
//! |-------|------------------------------------------------------------|
//! | 0–1   | position / scene scale                                     |
//! | 2     | vehicle-present flag                                       |
//! | 3     | vehicles in range / 10                                     |
//! | 4     | previous SNR / 50                                          |
//! | 5–6   | CSI distance / 1000, CSI SNR / 50 (0 without NLOS or CSI)  |
//! | 7–8   | previous V2I, V2V interference / 1e-9, clipped to [0, 1]   |
//! | 9–10  | unit direction, effective position → downlink target       |
//! | 11    | copy of slot 8 (placeholder, carries no extra signal)      |
//!
//! # Vehicle layout (6)
//!
//! | Slot  | Value                                        |
//! |-------|----------------------------------------------|
//! | 0–1   | position / scene scale                       |
//! | 2–3   | direction rescaled from [-1, 1] to [0, 1]    |
//! | 4     | first-epoch flag                             |
//! | 5     | distance to associated radio unit / 1000     |
//!
//! Extraction never fails: absent optional inputs and non-finite numbers
//! read as 0.0.

use v2x_core::{GraphConfig, Point2, RadioUnitState, VehicleState};

/// Reference power for interference normalisation, in watts.
const INTERFERENCE_SCALE: f64 = 1e-9;

/// Added to the direction norm so a zero-length vector stays finite.
const DIRECTION_EPS: f64 = 1e-9;

/// Number of in-range vehicles that maps to 1.0.
const VEHICLE_COUNT_SCALE: f64 = 10.0;
const SNR_SCALE: f64 = 50.0;
const DISTANCE_SCALE: f64 = 1_000.0;

/// CSI vector slots that carry distance and SNR.
const CSI_DISTANCE_SLOT: usize = 0;
const CSI_SNR_SLOT: usize = 3;

/// Feature vector of one radio unit; always
/// [`GraphConfig::RADIO_UNIT_FEATURE_DIM`] long.
pub fn radio_unit_features(ru: &RadioUnitState, config: &GraphConfig) -> Vec<f32> {
    let mut f = Vec::with_capacity(GraphConfig::RADIO_UNIT_FEATURE_DIM);

    let (px, py) = normalised_position(ru.position, config);
    f.push(px);
    f.push(py);
    f.push(flag(ru.vehicle_present));
    f.push(ru.vehicles_in_range.len() as f64 / VEHICLE_COUNT_SCALE);
    f.push(or_zero(ru.previous_snr) / SNR_SCALE);

    let (csi_distance, csi_snr) = match (&ru.csi_state, config.nlos_model_enabled) {
        (Some(csi), true) => (
            csi_slot(csi, CSI_DISTANCE_SLOT) / DISTANCE_SCALE,
            csi_slot(csi, CSI_SNR_SLOT) / SNR_SCALE,
        ),
        _ => (0.0, 0.0),
    };
    f.push(csi_distance);
    f.push(csi_snr);

    let v2i = interference(ru.previous_v2i_interference);
    let v2v = interference(ru.previous_v2v_interference);
    f.push(v2i);
    f.push(v2v);

    let (dir_x, dir_y) = downlink_direction(ru.effective_position(), config.downlink_target);
    f.push(dir_x);
    f.push(dir_y);

    f.push(v2v);

    fit_to_width(f, GraphConfig::RADIO_UNIT_FEATURE_DIM)
}

/// Feature vector of one vehicle; always
/// [`GraphConfig::VEHICLE_FEATURE_DIM`] long.
pub fn vehicle_features(v: &VehicleState, config: &GraphConfig) -> Vec<f32> {
    let mut f = Vec::with_capacity(GraphConfig::VEHICLE_FEATURE_DIM);

    let (px, py) = normalised_position(v.position, config);
    f.push(px);
    f.push(py);
    f.push((sanitize(v.direction.x) + 1.0) / 2.0);
    f.push((sanitize(v.direction.y) + 1.0) / 2.0);
    f.push(flag(v.is_first_epoch));
    f.push(or_zero(v.distance_to_radio_unit) / DISTANCE_SCALE);

    fit_to_width(f, GraphConfig::VEHICLE_FEATURE_DIM)
}

/// Zero-pad or truncate `values` to exactly `width`, converting to `f32`.
pub fn fit_to_width(mut values: Vec<f64>, width: usize) -> Vec<f32> {
    values.resize(width, 0.0);
    values.into_iter().map(|x| sanitize(x) as f32).collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn sanitize(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

#[inline]
fn or_zero(x: Option<f64>) -> f64 {
    x.map_or(0.0, sanitize)
}

#[inline]
fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn normalised_position(p: Point2, config: &GraphConfig) -> (f64, f64) {
    (
        sanitize(p.x) / config.scene_scale_x,
        sanitize(p.y) / config.scene_scale_y,
    )
}

fn csi_slot(csi: &[f64], slot: usize) -> f64 {
    csi.get(slot).copied().map_or(0.0, sanitize)
}

fn interference(power: Option<f64>) -> f64 {
    (or_zero(power) / INTERFERENCE_SCALE).clamp(0.0, 1.0)
}

/// Unit vector from `from` towards `target`, or `(0, 0)` without a target
/// or with a non-finite position.
fn downlink_direction(from: Point2, target: Option<Point2>) -> (f64, f64) {
    let Some(target) = target else {
        return (0.0, 0.0);
    };
    if !from.is_finite() || !target.is_finite() {
        return (0.0, 0.0);
    }
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let norm = (dx * dx + dy * dy).sqrt() + DIRECTION_EPS;
    (dx / norm, dy / norm)
}
