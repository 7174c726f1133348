// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: geometry primitives

mod command;
pub mod consts;
pub mod curve;
mod morph;
mod normalize;
mod partial;
mod path;

pub use command::PathCommand;
pub use morph::subdivide_path;
pub use partial::{partial_path, trim};
pub use path::Path;
