// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: topology matching and shape interpolation

use super::command::PathCommand;
use super::curve::split_cubic_at;
use super::path::Path;
use crate::timeline::Lerp;
use crate::types::Point;
use std::cmp::Ordering;

/// Split cubic segments of `commands` in half until there are `target_count`
/// commands.
///
/// Each pass walks the list once and halves cubics from the front until
/// enough new commands exist; passes repeat while the count is short. A list
/// without cubics is padded with zero-length cubics at its last point.
/// Lists already at or above `target_count` are returned unchanged.
pub fn subdivide_path(commands: &[PathCommand], target_count: usize) -> Vec<PathCommand> {
    let mut result = commands.to_vec();
    let mut pass = 0usize;
    while result.len() < target_count {
        let needed = target_count - result.len();
        let cubics = result.iter().filter(|cmd| cmd.is_cubic()).count();
        if cubics == 0 {
            let p = result.last().map(PathCommand::end).unwrap_or(Point::ORIGIN);
            let degenerate = PathCommand::Cubic {
                control1: p,
                control2: p,
                end: p,
            };
            result.extend(std::iter::repeat(degenerate).take(needed));
            break;
        }

        let mut remaining = needed;
        let mut next = Vec::with_capacity(result.len() + needed.min(cubics));
        let mut cursor = Point::ORIGIN;
        for cmd in &result {
            match *cmd {
                PathCommand::Cubic {
                    control1,
                    control2,
                    end,
                } if remaining > 0 => {
                    let (a, b) = split_cubic_at(cursor, control1, control2, end, 0.5);
                    next.push(PathCommand::Cubic {
                        control1: a[1],
                        control2: a[2],
                        end: a[3],
                    });
                    next.push(PathCommand::Cubic {
                        control1: b[1],
                        control2: b[2],
                        end: b[3],
                    });
                    remaining -= 1;
                }
                other => next.push(other),
            }
            cursor = cmd.end();
        }
        result = next;
        pass += 1;
        log::trace!(
            "subdivision pass {}: {} of {} commands",
            pass,
            result.len(),
            target_count
        );
    }
    result
}

impl Path {
    /// Normalise both paths to cubics and subdivide the shorter one so both
    /// have the same number of commands.
    pub fn match_points(a: &Path, b: &Path) -> (Path, Path) {
        let a = a.to_cubic();
        let b = b.to_cubic();
        match a.len().cmp(&b.len()) {
            Ordering::Equal => (a, b),
            Ordering::Less => {
                log::debug!("matching paths: subdividing {} -> {} commands", a.len(), b.len());
                let a = Path::from_commands(subdivide_path(a.commands(), b.len()));
                (a, b)
            }
            Ordering::Greater => {
                log::debug!("matching paths: subdividing {} -> {} commands", b.len(), a.len());
                let b = Path::from_commands(subdivide_path(b.commands(), a.len()));
                (a, b)
            }
        }
    }

    /// Interpolate between two arbitrary paths after matching their topology.
    ///
    /// `t = 0` reproduces the normalised `a`, `t = 1` the normalised `b`.
    pub fn interpolate(a: &Path, b: &Path, t: f64) -> Path {
        let (a, b) = Path::match_points(a, b);
        Path::interpolate_matched(&a, &b, t)
    }

    /// Component-wise interpolation of two paths whose commands already line
    /// up index by index.
    ///
    /// Move pairs interpolate their point. Any other pair is treated as two
    /// cubics (a move becomes a zero-length cubic on its own point).
    pub(crate) fn interpolate_matched(a: &Path, b: &Path, t: f64) -> Path {
        debug_assert_eq!(a.len(), b.len());
        a.commands()
            .iter()
            .zip(b.commands())
            .enumerate()
            .map(|(i, (ca, cb))| match (*ca, *cb) {
                (PathCommand::Move { end: ea }, PathCommand::Move { end: eb }) => {
                    PathCommand::Move { end: ea.lerp(eb, t) }
                }
                _ => {
                    let pa = ca.cubic_points_from(a.cursor_before(i));
                    let pb = cb.cubic_points_from(b.cursor_before(i));
                    PathCommand::Cubic {
                        control1: pa[1].lerp(pb[1], t),
                        control2: pa[2].lerp(pb[2], t),
                        end: pa[3].lerp(pb[3], t),
                    }
                }
            })
            .collect()
    }
}
