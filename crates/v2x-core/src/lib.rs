//! `v2x-core` — foundational types for the V2X heterogeneous graph builder.
//!
//! This crate has no workspace dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `RadioUnitId`, `VehicleId`                               |
//! | [`geo`]     | `Point2`, `Rect`                                         |
//! | [`entity`]  | `RadioUnitState`, `VehicleState`                         |
//! | [`channel`] | `ChannelModel` trait, `ChannelStateInfo`, `ChannelError` |
//! | [`config`]  | `GraphConfig`                                            |
//! | [`error`]   | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod channel;
pub mod config;
pub mod entity;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use channel::{ChannelError, ChannelModel, ChannelResult, ChannelStateInfo};
pub use config::GraphConfig;
pub use entity::{RadioUnitState, VehicleState};
pub use error::{CoreError, CoreResult};
pub use geo::{Point2, Rect};
pub use ids::{RadioUnitId, VehicleId};
