//! Unit tests for v2x-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RadioUnitId, VehicleId};

    #[test]
    fn node_keys() {
        assert_eq!(RadioUnitId(3).node_key(), "rsu_3");
        assert_eq!(VehicleId(17).node_key(), "vehicle_17");
    }

    #[test]
    fn ordering() {
        assert!(RadioUnitId(0) < RadioUnitId(1));
        assert!(VehicleId(100) > VehicleId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RadioUnitId(7).to_string(), "RadioUnitId(7)");
        assert_eq!(VehicleId::from(2).to_string(), "VehicleId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point2, Rect};

    #[test]
    fn zero_distance() {
        let p = Point2::new(12.5, -4.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let r = Rect::new(Point2::new(0.0, 0.0), Point2::new(500.0, 500.0));
        assert!(r.contains(Point2::new(0.0, 0.0)));
        assert!(r.contains(Point2::new(500.0, 500.0)));
        assert!(r.contains(Point2::new(500.0, 0.0)));
        assert!(!r.contains(Point2::new(500.1, 250.0)));
        assert!(!r.contains(Point2::new(250.0, -0.1)));
    }

    #[test]
    fn inverted_rect_is_empty() {
        let r = Rect::new(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert!(!r.contains(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn rect_around_center() {
        let r = Rect::around(Point2::new(100.0, 100.0), 50.0);
        assert_eq!(r.min, Point2::new(50.0, 50.0));
        assert_eq!(r.max, Point2::new(150.0, 150.0));
    }

    #[test]
    fn nan_is_not_contained() {
        let r = Rect::around(Point2::ORIGIN, 10.0);
        assert!(!r.contains(Point2::new(f64::NAN, 0.0)));
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
    }
}

#[cfg(test)]
mod entity {
    use crate::{Point2, RadioUnitId, RadioUnitState, Rect};

    #[test]
    fn effective_position_falls_back_to_unit() {
        let ru = RadioUnitState::new(
            RadioUnitId(0),
            Point2::new(10.0, 20.0),
            Rect::around(Point2::new(10.0, 20.0), 100.0),
        );
        assert_eq!(ru.effective_position(), Point2::new(10.0, 20.0));
    }

    #[test]
    fn effective_position_uses_nearest_vehicle() {
        let mut ru = RadioUnitState::new(
            RadioUnitId(0),
            Point2::ORIGIN,
            Rect::around(Point2::ORIGIN, 100.0),
        );
        ru.vehicles_in_range = vec![Point2::new(5.0, 5.0), Point2::new(50.0, 50.0)];
        assert_eq!(ru.effective_position(), Point2::new(5.0, 5.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{GraphConfig, Point2};

    #[test]
    fn defaults() {
        let cfg = GraphConfig::default();
        assert_eq!(cfg.communication_threshold, 500.0);
        assert_eq!(cfg.interference_threshold, 300.0);
        assert_eq!(cfg.proximity_threshold, 200.0);
        assert_eq!(cfg.inference_radius, 500.0);
        assert_eq!(GraphConfig::RADIO_UNIT_FEATURE_DIM, 12);
        assert_eq!(GraphConfig::VEHICLE_FEATURE_DIM, 6);
        assert_eq!(GraphConfig::EDGE_ATTR_DIM, 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn query_power_is_a_tenth_of_nominal() {
        let cfg = GraphConfig { nominal_tx_power: 2.0, ..GraphConfig::default() };
        assert!((cfg.query_tx_power() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let cfg = GraphConfig { proximity_threshold: 0.0, ..GraphConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = GraphConfig { communication_threshold: f64::NAN, ..GraphConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_fraction_and_radius() {
        let cfg = GraphConfig { tx_power_fraction: 1.5, ..GraphConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = GraphConfig { inference_radius: -1.0, ..GraphConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_target() {
        let cfg = GraphConfig {
            downlink_target: Some(Point2::new(f64::INFINITY, 0.0)),
            ..GraphConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_takes_defaults() {
        let cfg: GraphConfig =
            serde_json::from_str(r#"{ "proximity_threshold": 150.0 }"#).unwrap();
        assert_eq!(cfg.proximity_threshold, 150.0);
        assert_eq!(cfg.communication_threshold, 500.0);
    }
}
