// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path command model

use super::curve;
use crate::timeline::Lerp;
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Basic path drawing commands.
///
/// Every drawable command is interpreted relative to the cursor left by the
/// command before it. The cursor after a command is always its `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new sub-path at `end`.
    Move {
        /// Sub-path start
        end: Point,
    },
    /// Straight line to `end`.
    Line {
        /// End point
        end: Point,
    },
    /// Quadratic Bézier with one control point.
    Quadratic {
        /// Control point
        control1: Point,
        /// End point
        end: Point,
    },
    /// Cubic Bézier with two control points.
    Cubic {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// End point
        end: Point,
    },
    /// Straight line back to the start of the current sub-path.
    Close {
        /// Start of the sub-path being closed
        end: Point,
    },
}

impl PathCommand {
    /// End point of the command, which is also the cursor after it.
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::Move { end }
            | PathCommand::Line { end }
            | PathCommand::Quadratic { end, .. }
            | PathCommand::Cubic { end, .. }
            | PathCommand::Close { end } => end,
        }
    }

    /// `true` for [`PathCommand::Move`].
    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::Move { .. })
    }

    /// `true` for [`PathCommand::Cubic`].
    pub fn is_cubic(&self) -> bool {
        matches!(self, PathCommand::Cubic { .. })
    }

    /// Length of the segment drawn from `start`. Moves contribute nothing.
    pub fn length_from(&self, start: Point) -> f64 {
        match *self {
            PathCommand::Move { .. } => 0.0,
            PathCommand::Line { end } | PathCommand::Close { end } => start.distance(end),
            PathCommand::Quadratic { control1, end } => curve::quadratic_length(start, control1, end),
            PathCommand::Cubic {
                control1,
                control2,
                end,
            } => curve::cubic_length(start, control1, control2, end),
        }
    }

    /// Position at parameter `t` of the segment drawn from `start`.
    pub fn point_from(&self, start: Point, t: f64) -> Point {
        match *self {
            PathCommand::Move { end } => end,
            PathCommand::Line { end } | PathCommand::Close { end } => start.lerp(end, t),
            PathCommand::Quadratic { control1, end } => {
                curve::eval_quadratic(start, control1, end, t)
            }
            PathCommand::Cubic {
                control1,
                control2,
                end,
            } => curve::eval_cubic(start, control1, control2, end, t),
        }
    }

    /// Unnormalised derivative at parameter `t` of the segment drawn from `start`.
    pub fn derivative_from(&self, start: Point, t: f64) -> Point {
        match *self {
            PathCommand::Move { .. } => Point::ORIGIN,
            PathCommand::Line { end } | PathCommand::Close { end } => end - start,
            PathCommand::Quadratic { control1, end } => {
                curve::deriv_quadratic(start, control1, end, t)
            }
            PathCommand::Cubic {
                control1,
                control2,
                end,
            } => curve::deriv_cubic(start, control1, control2, end, t),
        }
    }

    /// Equivalent command using only `Move` or `Cubic`.
    pub fn to_cubic_from(&self, start: Point) -> PathCommand {
        match *self {
            PathCommand::Move { end } => PathCommand::Move { end },
            PathCommand::Line { end } | PathCommand::Close { end } => {
                let (control1, control2) = curve::elevate_line(start, end);
                PathCommand::Cubic {
                    control1,
                    control2,
                    end,
                }
            }
            PathCommand::Quadratic { control1: q, end } => {
                let (control1, control2) = curve::elevate_quadratic(start, q, end);
                PathCommand::Cubic {
                    control1,
                    control2,
                    end,
                }
            }
            cubic @ PathCommand::Cubic { .. } => cubic,
        }
    }

    /// Control points of the command as a cubic drawn from `start`.
    ///
    /// A move degenerates to a zero-length cubic sitting on its own point.
    pub(crate) fn cubic_points_from(&self, start: Point) -> [Point; 4] {
        match self.to_cubic_from(start) {
            PathCommand::Cubic {
                control1,
                control2,
                end,
            } => [start, control1, control2, end],
            other => {
                let p = other.end();
                [p, p, p, p]
            }
        }
    }
}
