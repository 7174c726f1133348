// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: serialization of paths and animations

pub mod easing;
pub mod json;

pub use easing::EasingRegistry;
pub use json::{LoadOptions, PathRecord, RecordKind};
