// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: error type for the loader

use thiserror::Error;

/// Errors raised while reading path or animation documents.
///
/// Geometry operations never fail; only decoding external data does.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("record {index} ({kind}) is missing a control point")]
    MissingControlPoint { index: usize, kind: &'static str },

    #[error("unknown easing `{0}`")]
    UnknownEasing(String),

    #[error("morph animation has no target path")]
    MissingMorphTarget,
}

/// Result alias used by the loader.
pub type Result<T> = std::result::Result<T, Error>;
