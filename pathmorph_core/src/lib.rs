// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: pathmorph core library
//!
//! Vector paths for animation: length and sampling queries over a lazily
//! cached length table, cubic normalisation, topology matching for morphs,
//! and prefix extraction for progressive reveals.

pub mod animation;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod timeline;
pub mod types;

pub use error::{Error, Result};
pub use geometry::{partial_path, Path, PathCommand};
pub use types::Point;
