//! Error types for polygon description.
//!
//! Only `MalformedRecord` is retryable: it signals an upstream record that is
//! missing a required zonal statistic or carries a label with no prose entry.
//! A polygon that is too small to describe is an outcome, not an error
//! (see [`crate::narrative::Description::TooSmall`]).

use thiserror::Error;

use crate::types::Layer;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DescribeError {
    /// A layer's class distribution sums to zero cells.
    #[error("{layer} distribution has no cells")]
    EmptyDistribution { layer: Layer },

    /// A class record lacks a field its layer requires, or its label is unknown.
    #[error("malformed {layer} record '{label}': {reason}")]
    MalformedRecord {
        layer: Layer,
        label: String,
        reason: String,
    },

    /// A layer produced no classes at all.
    #[error("{layer} has no significant class")]
    NoSignificantClass { layer: Layer },

    /// Polygon-level input that cannot be interpreted.
    #[error("invalid polygon input: {0}")]
    InvalidInput(String),
}

impl DescribeError {
    pub fn malformed(layer: Layer, label: impl Into<String>, reason: impl Into<String>) -> Self {
        DescribeError::MalformedRecord {
            layer,
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Whether the pipeline should re-fetch the polygon and try again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DescribeError::MalformedRecord { .. })
    }
}

pub type Result<T> = std::result::Result<T, DescribeError>;
