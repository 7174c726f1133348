// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: vector path representation, length cache and sampling

use super::command::PathCommand;
use super::consts::{DEFAULT_TANGENT, TANGENT_EPSILON};
use super::curve;
use crate::types::Point;
use std::cell::OnceCell;

/// Memoised per-command lengths. Derived entirely from the command list.
#[derive(Debug, Clone, Default)]
struct LengthCache {
    total: f64,
    lengths: Vec<f64>,
    cumulative: Vec<f64>,
}

/// An ordered sequence of [`PathCommand`] items forming a vector path.
///
/// Length queries build a cache on first use; any append drops it. The
/// cache lives in a [`OnceCell`], so a `Path` is meant to be owned by one
/// thread at a time.
#[derive(Debug, Default, Clone)]
pub struct Path {
    commands: Vec<PathCommand>,
    subpath_start: Point,
    cache: OnceCell<LengthCache>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path by appending each command in order.
    pub fn from_commands<I: IntoIterator<Item = PathCommand>>(commands: I) -> Self {
        commands.into_iter().collect()
    }

    /// Append a move command, starting a new sub-path.
    pub fn move_to(&mut self, p: Point) {
        self.push(PathCommand::Move { end: p });
    }

    /// Append a line command.
    pub fn line_to(&mut self, p: Point) {
        self.push(PathCommand::Line { end: p });
    }

    /// Append a quadratic Bézier curve command.
    pub fn quadratic_to(&mut self, c: Point, p: Point) {
        self.push(PathCommand::Quadratic {
            control1: c,
            end: p,
        });
    }

    /// Append a cubic Bézier curve command.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.push(PathCommand::Cubic {
            control1: c1,
            control2: c2,
            end: p,
        });
    }

    /// Close the current sub-path back to its start, or to the origin when
    /// no move has been issued.
    pub fn close_path(&mut self) {
        self.push(PathCommand::Close {
            end: self.subpath_start,
        });
    }

    /// Append an arbitrary command.
    ///
    /// A `Close` always targets the current sub-path start, whatever `end` it
    /// carries.
    pub fn push(&mut self, cmd: PathCommand) {
        let cmd = match cmd {
            PathCommand::Move { end } => {
                self.subpath_start = end;
                cmd
            }
            PathCommand::Close { end } => {
                if end != self.subpath_start {
                    log::warn!(
                        "close targets {:?} but sub-path starts at {:?}; using sub-path start",
                        end,
                        self.subpath_start
                    );
                }
                PathCommand::Close {
                    end: self.subpath_start,
                }
            }
            other => other,
        };
        self.commands.push(cmd);
        self.cache.take();
    }

    /// Borrow the command list.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Snapshot copy of the command list.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        self.commands.clone()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` when the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Cursor after the last command, or the origin for an empty path.
    pub fn last_point(&self) -> Point {
        self.commands
            .last()
            .map(PathCommand::end)
            .unwrap_or(Point::ORIGIN)
    }

    /// Cursor in effect before the command at `index`.
    pub(crate) fn cursor_before(&self, index: usize) -> Point {
        match index {
            0 => Point::ORIGIN,
            i => self.commands[i - 1].end(),
        }
    }

    fn cache(&self) -> &LengthCache {
        self.cache.get_or_init(|| self.build_cache())
    }

    fn build_cache(&self) -> LengthCache {
        let mut lengths = Vec::with_capacity(self.commands.len());
        let mut cumulative = Vec::with_capacity(self.commands.len());
        let mut cursor = Point::ORIGIN;
        let mut total = 0.0;
        for cmd in &self.commands {
            let len = cmd.length_from(cursor);
            let len = if len.is_finite() { len } else { 0.0 };
            total += len;
            lengths.push(len);
            cumulative.push(total);
            cursor = cmd.end();
        }
        log::debug!(
            "built length cache: {} commands, total length {}",
            self.commands.len(),
            total
        );
        LengthCache {
            total,
            lengths,
            cumulative,
        }
    }

    /// Total length of all drawable segments.
    pub fn length(&self) -> f64 {
        self.cache().total
    }

    /// Length of each command, in command order.
    pub fn segment_lengths(&self) -> &[f64] {
        &self.cache().lengths
    }

    /// Find the command containing the point at fraction `t` of the length,
    /// together with the local parameter inside it.
    ///
    /// Returns `None` for paths of zero length.
    pub(crate) fn locate(&self, t: f64) -> Option<(usize, f64)> {
        let cache = self.cache();
        if cache.total <= 0.0 {
            return None;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let target = t * cache.total;
        let index = cache
            .cumulative
            .partition_point(|&c| c < target)
            .min(cache.cumulative.len() - 1);
        let seg_len = cache.lengths[index];
        let before = if index == 0 {
            0.0
        } else {
            cache.cumulative[index - 1]
        };
        let local_t = if seg_len > 0.0 {
            ((target - before) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some((index, local_t))
    }

    /// Point at fraction `t` of the total length. `t` is clamped to `0..=1`.
    pub fn point_at(&self, t: f64) -> Point {
        match self.locate(t) {
            Some((index, local_t)) => {
                self.commands[index].point_from(self.cursor_before(index), local_t)
            }
            None => self.last_point(),
        }
    }

    /// Unit tangent at fraction `t` of the total length.
    pub fn tangent_at(&self, t: f64) -> Point {
        let Some((mut index, mut local_t)) = self.locate(t) else {
            return DEFAULT_TANGENT;
        };
        let lengths = self.segment_lengths();
        if lengths[index] == 0.0 {
            if let Some(next) = (index + 1..lengths.len()).find(|&i| lengths[i] > 0.0) {
                index = next;
                local_t = 0.0;
            }
        }
        let cmd = &self.commands[index];
        let start = self.cursor_before(index);
        let mut d = cmd.derivative_from(start, local_t);
        if d.length() < TANGENT_EPSILON {
            d = cmd.end() - start;
        }
        if d.length() < TANGENT_EPSILON {
            return DEFAULT_TANGENT;
        }
        d.normalize()
    }

    /// `n` points at evenly spaced fractions from 0 to 1 inclusive.
    pub fn points(&self, n: usize) -> Vec<Point> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => (0..n)
                .map(|i| self.point_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.commands == other.commands
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        let mut path = Path::new();
        path.extend(iter);
        path
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        for cmd in iter {
            self.push(cmd);
        }
    }
}
