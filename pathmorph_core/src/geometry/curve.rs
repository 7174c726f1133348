// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: Bézier evaluation, length estimation and splitting
//!
//! All functions are pure. Parameters are expected in `0..=1`; callers clamp.

use super::consts::{CUBIC_LENGTH_STEPS, QUADRATIC_LENGTH_STEPS};
use crate::timeline::Lerp;
use crate::types::Point;

/// Position on a quadratic Bézier at `t`.
///
/// Evaluated by repeated interpolation, so a curve whose points coincide
/// yields that point exactly.
pub fn eval_quadratic(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    p0.lerp(p1, t).lerp(p1.lerp(p2, t), t)
}

/// Position on a cubic Bézier at `t`.
pub fn eval_cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let m1 = p0.lerp(p1, t);
    let m2 = p1.lerp(p2, t);
    let m3 = p2.lerp(p3, t);
    m1.lerp(m2, t).lerp(m2.lerp(m3, t), t)
}

/// First derivative of a quadratic Bézier at `t`.
pub fn deriv_quadratic(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t)
}

/// First derivative of a cubic Bézier at `t`.
pub fn deriv_cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
}

fn polyline_length(steps: usize, eval: impl Fn(f64) -> Point) -> f64 {
    let mut length = 0.0;
    let mut prev = eval(0.0);
    for i in 1..=steps {
        let next = eval(i as f64 / steps as f64);
        length += prev.distance(next);
        prev = next;
    }
    length
}

/// Approximate arc length of a quadratic Bézier using fixed chords.
pub fn quadratic_length(p0: Point, p1: Point, p2: Point) -> f64 {
    polyline_length(QUADRATIC_LENGTH_STEPS, |t| eval_quadratic(p0, p1, p2, t))
}

/// Approximate arc length of a cubic Bézier using fixed chords.
pub fn cubic_length(p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    polyline_length(CUBIC_LENGTH_STEPS, |t| eval_cubic(p0, p1, p2, p3, t))
}

/// Split a cubic Bézier at `t` using De Casteljau's construction.
///
/// Returns the control polygons of the two halves; the first ends and the
/// second starts at the same on-curve point.
pub fn split_cubic_at(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    t: f64,
) -> ([Point; 4], [Point; 4]) {
    let m1 = p0.lerp(p1, t);
    let m2 = p1.lerp(p2, t);
    let m3 = p2.lerp(p3, t);
    let m4 = m1.lerp(m2, t);
    let m5 = m2.lerp(m3, t);
    let m6 = m4.lerp(m5, t);
    ([p0, m1, m4, m6], [m6, m5, m3, p3])
}

/// Control polygon of the part of a cubic between parameters `t0` and `t1`.
pub fn split_cubic_range(p: [Point; 4], t0: f64, t1: f64) -> [Point; 4] {
    let head = if t1 >= 1.0 {
        p
    } else {
        split_cubic_at(p[0], p[1], p[2], p[3], t1).0
    };
    if t0 <= 0.0 || t1 <= 0.0 {
        return head;
    }
    let local = (t0 / t1).min(1.0);
    split_cubic_at(head[0], head[1], head[2], head[3], local).1
}

/// Split a quadratic Bézier at `t` using De Casteljau's construction.
pub fn split_quadratic_at(p0: Point, p1: Point, p2: Point, t: f64) -> ([Point; 3], [Point; 3]) {
    let m1 = p0.lerp(p1, t);
    let m2 = p1.lerp(p2, t);
    let m3 = m1.lerp(m2, t);
    ([p0, m1, m3], [m3, m2, p2])
}

/// Cubic control points that trace the straight line `p0 -> p1`.
pub fn elevate_line(p0: Point, p1: Point) -> (Point, Point) {
    let third = (p1 - p0) / 3.0;
    (p0 + third, p1 - third)
}

/// Cubic control points that trace the quadratic `p0, q, p1` exactly.
pub fn elevate_quadratic(p0: Point, q: Point, p1: Point) -> (Point, Point) {
    (p0 + (q - p0) * (2.0 / 3.0), p1 + (q - p1) * (2.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn endpoints() {
        let (p0, p1, p2, p3) = (
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert!(close(eval_cubic(p0, p1, p2, p3, 0.0), p0));
        assert!(close(eval_cubic(p0, p1, p2, p3, 1.0), p3));
        assert!(close(eval_quadratic(p0, p1, p3, 0.0), p0));
        assert!(close(eval_quadratic(p0, p1, p3, 1.0), p3));
        assert!(close(eval_cubic(p0, p1, p2, p3, 0.5), Point::new(5.0, 7.5)));
    }

    #[test]
    fn derivatives_at_ends() {
        let (p0, p1, p2, p3) = (
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert!(close(deriv_cubic(p0, p1, p2, p3, 0.0), Point::new(0.0, 30.0)));
        assert!(close(deriv_cubic(p0, p1, p2, p3, 1.0), Point::new(0.0, -30.0)));
        assert!(close(deriv_quadratic(p0, p1, p3, 0.0), Point::new(0.0, 20.0)));
    }

    #[test]
    fn straight_curve_lengths_are_exact() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(10.0, 0.0);
        let (c1, c2) = elevate_line(p0, p1);
        assert!((cubic_length(p0, c1, c2, p1) - 10.0).abs() < EPS);
        assert!((quadratic_length(p0, Point::new(5.0, 0.0), p1) - 10.0).abs() < EPS);
    }

    #[test]
    fn coincident_points_have_zero_length() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(cubic_length(p, p, p, p), 0.0);
        assert_eq!(quadratic_length(p, p, p), 0.0);
        let q = Point::new(0.1, -7.3);
        assert_eq!(eval_cubic(q, q, q, q, 0.37), q);
        assert_eq!(eval_quadratic(q, q, q, 0.81), q);
    }

    #[test]
    fn curved_length_is_between_chord_and_polygon() {
        let (p0, p1, p2, p3) = (
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        let len = cubic_length(p0, p1, p2, p3);
        assert!(len > p0.distance(p3));
        assert!(len < p0.distance(p1) + p1.distance(p2) + p2.distance(p3));
    }

    #[test]
    fn cubic_split_reproduces_curve() {
        let (p0, p1, p2, p3) = (
            Point::new(0.0, 0.0),
            Point::new(2.0, 8.0),
            Point::new(7.0, -3.0),
            Point::new(10.0, 4.0),
        );
        for &t in &[0.0, 0.25, 0.5, 0.8, 1.0] {
            let (a, b) = split_cubic_at(p0, p1, p2, p3, t);
            assert!(close(a[3], eval_cubic(p0, p1, p2, p3, t)));
            assert!(close(a[3], b[0]));
            for i in 0..=4 {
                let u = i as f64 / 4.0;
                assert!(close(
                    eval_cubic(a[0], a[1], a[2], a[3], u),
                    eval_cubic(p0, p1, p2, p3, u * t)
                ));
                assert!(close(
                    eval_cubic(b[0], b[1], b[2], b[3], u),
                    eval_cubic(p0, p1, p2, p3, t + u * (1.0 - t))
                ));
            }
        }
    }

    #[test]
    fn cubic_range_matches_curve() {
        let p = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 8.0),
            Point::new(7.0, -3.0),
            Point::new(10.0, 4.0),
        ];
        let (t0, t1) = (0.2, 0.7);
        let r = split_cubic_range(p, t0, t1);
        for i in 0..=4 {
            let u = i as f64 / 4.0;
            assert!(close(
                eval_cubic(r[0], r[1], r[2], r[3], u),
                eval_cubic(p[0], p[1], p[2], p[3], t0 + u * (t1 - t0))
            ));
        }
        assert_eq!(split_cubic_range(p, 0.0, 1.0), p);
    }

    #[test]
    fn quadratic_split_reproduces_curve() {
        let (p0, p1, p2) = (Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        let (a, b) = split_quadratic_at(p0, p1, p2, 0.3);
        for i in 0..=4 {
            let u = i as f64 / 4.0;
            assert!(close(
                eval_quadratic(a[0], a[1], a[2], u),
                eval_quadratic(p0, p1, p2, u * 0.3)
            ));
            assert!(close(
                eval_quadratic(b[0], b[1], b[2], u),
                eval_quadratic(p0, p1, p2, 0.3 + u * 0.7)
            ));
        }
    }

    #[test]
    fn quadratic_elevation_is_exact() {
        let (p0, q, p1) = (Point::new(0.0, 0.0), Point::new(5.0, 10.0), Point::new(10.0, 0.0));
        let (c1, c2) = elevate_quadratic(p0, q, p1);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!(close(eval_quadratic(p0, q, p1, t), eval_cubic(p0, c1, c2, p1, t)));
        }
    }
}
