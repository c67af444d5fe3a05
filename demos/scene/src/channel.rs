//! Log-distance channel model used by the demo.
//!
//! Deliberately simple: free-space loss at 1 m, a fixed path-loss exponent,
//! thermal noise plus a receiver noise figure.  Real runs plug in the
//! simulator's own propagation model.

use v2x_core::{ChannelError, ChannelModel, ChannelResult, ChannelStateInfo, Point2};

pub struct LogDistanceChannel {
    /// Height difference between radio-unit and vehicle antennas.
    pub antenna_offset_m: f64,
    pub carrier_ghz: f64,
    pub exponent: f64,
    pub noise_figure_db: f64,
    /// Links longer than this are reported as out of range.
    pub max_range_m: f64,
}

impl Default for LogDistanceChannel {
    fn default() -> Self {
        Self {
            antenna_offset_m: 8.5, // 10 m mast, 1.5 m vehicle antenna
            carrier_ghz:      5.9,
            exponent:         3.0,
            noise_figure_db:  9.0,
            max_range_m:      1_200.0,
        }
    }
}

impl ChannelModel for LogDistanceChannel {
    fn distance_3d(&self, a: Point2, b: Point2) -> ChannelResult<f64> {
        let d = (a.distance_2(b) + self.antenna_offset_m.powi(2)).sqrt();
        if d > self.max_range_m {
            return Err(ChannelError::OutOfRange(d));
        }
        Ok(d)
    }

    fn channel_state_info(
        &self,
        a:         Point2,
        b:         Point2,
        tx_power:  f64,
        bandwidth: f64,
    ) -> ChannelResult<ChannelStateInfo> {
        if tx_power <= 0.0 || bandwidth <= 0.0 {
            return Err(ChannelError::InvalidInput(format!(
                "tx_power {tx_power} W, bandwidth {bandwidth} Hz"
            )));
        }
        let d = self.distance_3d(a, b)?.max(1.0);

        let fspl_1m = 32.45 + 20.0 * self.carrier_ghz.log10();
        let path_loss_db = fspl_1m + 10.0 * self.exponent * d.log10();

        let tx_dbm = 10.0 * (tx_power * 1_000.0).log10();
        let rx_power_dbm = tx_dbm - path_loss_db;
        let noise_dbm = -174.0 + 10.0 * bandwidth.log10() + self.noise_figure_db;

        Ok(ChannelStateInfo {
            path_loss_db,
            snr_db: rx_power_dbm - noise_dbm,
            rx_power_dbm: Some(rx_power_dbm),
        })
    }
}
