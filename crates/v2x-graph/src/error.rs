//! Graph-builder error type.
//!
//! Every variant is fatal for the snapshot being built.  Per-pair channel
//! failures are not errors; they end up in
//! [`GraphSnapshot::skipped_pairs`](crate::GraphSnapshot::skipped_pairs).

use thiserror::Error;

use v2x_core::{CoreError, RadioUnitId};

use crate::Relation;

/// Errors produced by `v2x-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("node id {0} appears more than once")]
    DuplicateNode(String),

    #[error("{relation} edge references unknown node {id}")]
    UnknownNode { relation: Relation, id: String },

    #[error("node {node} has {got} features, expected {expected}")]
    FeatureWidth {
        node:     String,
        expected: usize,
        got:      usize,
    },

    #[error("focal radio unit {0} is not in the radio-unit list")]
    UnknownFocalUnit(RadioUnitId),
}

pub type GraphResult<T> = Result<T, GraphError>;
