//! Channel-model interface.
//!
//! Propagation (3-D geometry, path loss, fading, noise) lives outside the
//! graph builder.  The builder only needs the two queries below, and must be
//! able to survive a failure of either one for a single radio-unit/vehicle
//! pair.

use thiserror::Error;

use crate::Point2;

/// Channel-state information for one transmitter/receiver pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStateInfo {
    /// Total path loss in dB (including shadowing, if modelled).
    pub path_loss_db: f64,
    /// Received SNR in dB.
    pub snr_db: f64,
    /// Received power in dBm, if the model reports it.
    pub rx_power_dbm: Option<f64>,
}

/// Reasons a channel-model query can fail for one pair.
#[derive(Clone, Debug, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelError {
    #[error("pair is outside the model's valid range ({0:.1} m)")]
    OutOfRange(f64),

    #[error("invalid channel input: {0}")]
    InvalidInput(String),

    #[error("channel model failure: {0}")]
    Model(String),
}

pub type ChannelResult<T> = Result<T, ChannelError>;

/// Pluggable propagation model.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one builder can serve parallel
/// subgraph builds.
pub trait ChannelModel: Send + Sync {
    /// 3-D distance between a radio unit at `a` and a vehicle at `b`.
    fn distance_3d(&self, a: Point2, b: Point2) -> ChannelResult<f64>;

    /// Channel state for a link from `a` to `b` at `tx_power` watts over
    /// `bandwidth` hertz.
    fn channel_state_info(
        &self,
        a:         Point2,
        b:         Point2,
        tx_power:  f64,
        bandwidth: f64,
    ) -> ChannelResult<ChannelStateInfo>;
}

impl<C: ChannelModel + ?Sized> ChannelModel for &C {
    fn distance_3d(&self, a: Point2, b: Point2) -> ChannelResult<f64> {
        (**self).distance_3d(a, b)
    }

    fn channel_state_info(
        &self,
        a:         Point2,
        b:         Point2,
        tx_power:  f64,
        bandwidth: f64,
    ) -> ChannelResult<ChannelStateInfo> {
        (**self).channel_state_info(a, b, tx_power, bandwidth)
    }
}
