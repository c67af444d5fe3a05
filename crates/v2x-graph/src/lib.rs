//! `v2x-graph` — per-epoch heterogeneous graph snapshots of a V2X scene.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`features`] | Fixed-width radio-unit and vehicle feature vectors        |
//! | [`edges`]    | `EdgeCalculator` — communication / interference / proximity |
//! | [`spatial`]  | `NeighborIndex` (R-tree) for proximity candidates         |
//! | [`builder`]  | `GraphBuilder` — assembles nodes, edges, and tensors      |
//! | [`subgraph`] | Radius-bounded subgraphs around a focal radio unit        |
//! | [`snapshot`] | `GraphSnapshot`, `Node`, `Edge`, tensor types             |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |
//!
//! # Pipeline
//!
//! ```text
//! radio units ─┐                ┌─ features (per node)
//!              ├─ GraphBuilder ─┼─ edges    (per relation)
//! vehicles ────┘                └─ tensors  (row-indexed) ─→ GraphSnapshot
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `build_all_subgraphs` runs on Rayon's thread pool.        |
//! | `fx-hash`  | FxHash for the node id → row map.                         |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod builder;
pub mod edges;
pub mod error;
pub mod features;
pub mod snapshot;
pub mod spatial;
pub mod subgraph;


pub use builder::GraphBuilder;
pub use edges::{CommunicationEdges, EdgeCalculator};
pub use error::{GraphError, GraphResult};
pub use snapshot::{
    Edge, EdgeAttr, EdgeIndex, EdgeTensors, FeatureMatrix, GraphSnapshot, Node, NodeKind,
    PerRelation, Relation, SkippedPair, SnapshotMetadata,
};
pub use spatial::NeighborIndex;
