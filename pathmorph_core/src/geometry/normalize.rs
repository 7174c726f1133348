// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: cubic normalisation

use super::path::Path;

impl Path {
    /// Rewrite the path using only `Move` and `Cubic` commands.
    ///
    /// Lines, quadratics and closes are degree-elevated exactly, so the
    /// shape is unchanged. A close becomes a cubic back to its sub-path start.
    pub fn to_cubic(&self) -> Path {
        self.commands()
            .iter()
            .enumerate()
            .map(|(i, cmd)| cmd.to_cubic_from(self.cursor_before(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::PathCommand;
    use crate::types::Point;

    use super::*;

    const EPS: f64 = 1e-9;

    fn mixed_path() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 1.0));
        path.line_to(Point::new(7.0, 1.0));
        path.quadratic_to(Point::new(9.0, 5.0), Point::new(7.0, 9.0));
        path.cubic_to(
            Point::new(5.0, 12.0),
            Point::new(2.0, 12.0),
            Point::new(1.0, 9.0),
        );
        path.close_path();
        path
    }

    #[test]
    fn only_moves_and_cubics_remain() {
        let cubic = mixed_path().to_cubic();
        assert_eq!(cubic.len(), 5);
        assert!(cubic.commands()[0].is_move());
        assert!(cubic.commands()[1..].iter().all(PathCommand::is_cubic));
    }

    #[test]
    fn shape_is_preserved() {
        let path = mixed_path();
        let cubic = path.to_cubic();
        assert_eq!(cubic.last_point(), Point::new(1.0, 1.0));
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            for index in 1..path.len() {
                let a = path.commands()[index].point_from(path.cursor_before(index), t);
                let b = cubic.commands()[index].point_from(cubic.cursor_before(index), t);
                assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS);
            }
        }
    }

    #[test]
    fn cubic_passes_through() {
        let mut path = Path::new();
        path.cubic_to(
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        );
        assert_eq!(path.to_cubic(), path);
    }

    #[test]
    fn empty_stays_empty() {
        assert!(Path::new().to_cubic().is_empty());
    }
}
