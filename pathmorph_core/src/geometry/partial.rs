// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: progressive reveal and trim extraction

use super::command::PathCommand;
use super::curve::{split_cubic_at, split_cubic_range, split_quadratic_at};
use super::path::Path;
use crate::timeline::Lerp;
use crate::types::Point;

/// The first `t` fraction, by length, of `path`.
///
/// Whole commands are copied until the one that crosses the target length,
/// which is cut at the matching local parameter; nothing after it is kept.
pub fn partial_path(path: &Path, t: f64) -> Path {
    if t.is_nan() || t <= 0.0 {
        return Path::new();
    }
    let total = path.length();
    if t >= 1.0 || total == 0.0 {
        return path.clone();
    }

    let target = t * total;
    let lengths = path.segment_lengths();
    let mut out = Path::new();
    let mut acc = 0.0;
    for (i, cmd) in path.commands().iter().enumerate() {
        let len = lengths[i];
        if acc + len <= target {
            out.push(*cmd);
            acc += len;
            continue;
        }
        let local_t = if len > 0.0 {
            ((target - acc) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push(truncate(cmd, path.cursor_before(i), local_t));
        break;
    }
    out
}

/// Keep the part of `cmd`, drawn from `start`, up to parameter `t`.
fn truncate(cmd: &PathCommand, start: Point, t: f64) -> PathCommand {
    match *cmd {
        PathCommand::Move { end } => PathCommand::Move { end },
        PathCommand::Line { end } | PathCommand::Close { end } => PathCommand::Line {
            end: start.lerp(end, t),
        },
        PathCommand::Quadratic { control1, end } => {
            let (head, _) = split_quadratic_at(start, control1, end, t);
            PathCommand::Quadratic {
                control1: head[1],
                end: head[2],
            }
        }
        PathCommand::Cubic {
            control1,
            control2,
            end,
        } => {
            let (head, _) = split_cubic_at(start, control1, control2, end, t);
            PathCommand::Cubic {
                control1: head[1],
                control2: head[2],
                end: head[3],
            }
        }
    }
}

/// The part of `path` between fractions `start` and `end` of its length.
///
/// Works on the cubic form of the path. Every continuous run in the result
/// begins with a move to its first point, so closes come out open.
pub fn trim(path: &Path, start: f64, end: f64) -> Path {
    let start = if start.is_nan() { 0.0 } else { start.clamp(0.0, 1.0) };
    let end = if end.is_nan() { 0.0 } else { end.clamp(0.0, 1.0) };
    if start >= end {
        return Path::new();
    }
    if (start <= 0.0 && end >= 1.0) || path.length() == 0.0 {
        return path.clone();
    }

    let cubic = path.to_cubic();
    let total = cubic.length();
    let (from, to) = (start * total, end * total);
    let lengths = cubic.segment_lengths();
    let mut out = Path::new();
    let mut acc = 0.0;
    let mut pen_down = false;
    for (i, cmd) in cubic.commands().iter().enumerate() {
        let len = lengths[i];
        let seg_start = acc;
        acc += len;
        if seg_start >= to {
            break;
        }
        if cmd.is_move() {
            pen_down = false;
            continue;
        }
        if len == 0.0 || acc <= from {
            continue;
        }
        let t0 = ((from - seg_start) / len).max(0.0);
        let t1 = ((to - seg_start) / len).min(1.0);
        let piece = split_cubic_range(cmd.cubic_points_from(cubic.cursor_before(i)), t0, t1);
        if !pen_down {
            out.move_to(piece[0]);
            pen_down = true;
        }
        out.push(PathCommand::Cubic {
            control1: piece[1],
            control2: piece[2],
            end: piece[3],
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::curve::eval_quadratic;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn horizontal_line() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path
    }

    fn square() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path.line_to(Point::new(10.0, 10.0));
        path.line_to(Point::new(0.0, 10.0));
        path.close_path();
        path
    }

    #[test]
    fn bounds() {
        let path = square();
        assert!(partial_path(&path, 0.0).is_empty());
        assert!(partial_path(&path, -1.0).is_empty());
        assert_eq!(partial_path(&path, 1.0), path);
        assert_eq!(partial_path(&path, 3.0), path);
    }

    #[test]
    fn zero_length_is_cloned() {
        let mut path = Path::new();
        path.move_to(Point::new(4.0, 4.0));
        assert_eq!(partial_path(&path, 0.5), path);
    }

    #[test]
    fn line_prefix() {
        let part = partial_path(&horizontal_line(), 0.3);
        assert_eq!(part.len(), 2);
        assert!((part.length() - 3.0).abs() < EPS);
        assert!(close(part.last_point(), Point::new(3.0, 0.0)));
    }

    #[test]
    fn prefix_stops_after_cut() {
        let path = square();
        let part = partial_path(&path, 0.6);
        assert_eq!(part.len(), 4);
        assert_eq!(&part.commands()[..3], &path.commands()[..3]);
        assert!(close(part.last_point(), Point::new(6.0, 10.0)));
        assert!((part.length() - 24.0).abs() < EPS);
    }

    #[test]
    fn close_is_cut_into_line() {
        let part = partial_path(&square(), 0.9);
        let Some(&PathCommand::Line { end }) = part.commands().last() else {
            panic!("expected the close to become a line");
        };
        assert!(close(end, Point::new(0.0, 4.0)));
    }

    #[test]
    fn cubic_is_cut_exactly() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.cubic_to(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        let part = partial_path(&path, 0.5);
        assert_eq!(part.len(), 2);
        assert!(part.commands()[1].is_cubic());
        assert!((part.length() - path.length() / 2.0).abs() < 0.05);
        assert!((part.last_point().x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_is_cut_exactly() {
        let (p0, q, p1) = (Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        let mut path = Path::new();
        path.move_to(p0);
        path.quadratic_to(q, p1);
        let part = partial_path(&path, 0.5);
        let PathCommand::Quadratic { end, .. } = part.commands()[1] else {
            panic!("expected a quadratic");
        };
        assert!(close(end, eval_quadratic(p0, q, p1, 0.5)));
    }

    #[test]
    fn reveal_grows_monotonically() {
        let path = square();
        let mut last = 0.0;
        for i in 0..=20 {
            let len = partial_path(&path, i as f64 / 20.0).length();
            assert!(len + EPS >= last);
            last = len;
        }
        assert!((last - path.length()).abs() < EPS);
    }

    #[test]
    fn trim_middle_of_line() {
        let part = trim(&horizontal_line(), 0.2, 0.7);
        assert_eq!(part.len(), 2);
        assert!(part.commands()[0].is_move());
        assert!(close(part.point_at(0.0), Point::new(2.0, 0.0)));
        assert!(close(part.last_point(), Point::new(7.0, 0.0)));
        assert!((part.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn trim_across_corner() {
        let part = trim(&square(), 0.125, 0.375);
        assert_eq!(part.len(), 3);
        assert!(close(part.point_at(0.0), Point::new(5.0, 0.0)));
        assert!(close(part.last_point(), Point::new(10.0, 5.0)));
        assert!((part.length() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn trim_bounds() {
        let path = square();
        assert!(trim(&path, 0.5, 0.5).is_empty());
        assert!(trim(&path, 0.8, 0.2).is_empty());
        assert_eq!(trim(&path, 0.0, 1.0), path);
    }

    #[test]
    fn trim_restarts_after_move() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 0.0));
        path.move_to(Point::new(0.0, 5.0));
        path.line_to(Point::new(10.0, 5.0));
        let part = trim(&path, 0.25, 0.75);
        let moves = part.commands().iter().filter(|c| c.is_move()).count();
        assert_eq!(moves, 2);
        assert!((part.length() - 10.0).abs() < 1e-6);
        assert!(close(part.last_point(), Point::new(5.0, 5.0)));
    }
}
