// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: fixed numeric constants for the path engine

use crate::types::Point;

/// Chords used to approximate the length of a quadratic segment.
pub const QUADRATIC_LENGTH_STEPS: usize = 10;

/// Chords used to approximate the length of a cubic segment.
pub const CUBIC_LENGTH_STEPS: usize = 20;

/// Direction reported when a path has no meaningful tangent.
pub const DEFAULT_TANGENT: Point = Point { x: 1.0, y: 0.0 };

/// Derivatives shorter than this are treated as vanishing.
pub const TANGENT_EPSILON: f64 = 1e-12;
