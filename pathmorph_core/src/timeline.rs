// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: easing and interpolation primitives

use crate::types::Point;

const LUT_SIZE: usize = 256;
const SAMPLE_STEP: f64 = 1.0 / (LUT_SIZE as f64 - 1.0);
const NEWTON_ITERATIONS: usize = 4;
const NEWTON_MIN_SLOPE: f64 = 0.02;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// Cubic Bézier easing curve defined by two control points, CSS style.
///
/// The curve runs from `(0, 0)` to `(1, 1)`; `c1` and `c2` shape it.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    /// First control point
    pub c1: Point,
    /// Second control point
    pub c2: Point,
    samples: [f64; LUT_SIZE],
}

impl CubicBezier {
    /// Create a new cubic Bézier and precompute a lookup table.
    pub fn new(c1: Point, c2: Point) -> Self {
        let mut bez = Self {
            c1,
            c2,
            samples: [0.0; LUT_SIZE],
        };
        bez.calc_samples();
        bez
    }

    /// The identity easing.
    pub fn linear() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
    }

    fn calc_samples(&mut self) {
        for i in 0..LUT_SIZE {
            let t = i as f64 * SAMPLE_STEP;
            self.samples[i] = Self::calc_bezier(t, self.c1.x, self.c2.x);
        }
    }

    fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
        ((Self::coeff_a(a1, a2) * t + Self::coeff_b(a1, a2)) * t + Self::coeff_c(a1)) * t
    }

    fn get_slope(t: f64, a1: f64, a2: f64) -> f64 {
        3.0 * Self::coeff_a(a1, a2) * t * t + 2.0 * Self::coeff_b(a1, a2) * t + Self::coeff_c(a1)
    }

    const fn coeff_a(a1: f64, a2: f64) -> f64 {
        1.0 - 3.0 * a2 + 3.0 * a1
    }
    const fn coeff_b(a1: f64, a2: f64) -> f64 {
        3.0 * a2 - 6.0 * a1
    }
    const fn coeff_c(a1: f64) -> f64 {
        3.0 * a1
    }

    fn binary_subdivide(&self, x: f64, mut a: f64, mut b: f64) -> f64 {
        let mut current_t = 0.0;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            current_t = a + (b - a) / 2.0;
            let current_x = Self::calc_bezier(current_t, self.c1.x, self.c2.x) - x;
            if current_x.abs() <= SUBDIVISION_PRECISION {
                break;
            }
            if current_x > 0.0 {
                b = current_t;
            } else {
                a = current_t;
            }
        }
        current_t
    }

    fn get_t_for_x(&self, x: f64) -> f64 {
        let mut interval_start = 0.0;
        let mut current_sample = 1;
        while current_sample < LUT_SIZE - 1 && self.samples[current_sample] <= x {
            current_sample += 1;
            interval_start += SAMPLE_STEP;
        }
        current_sample -= 1;
        let span = self.samples[current_sample + 1] - self.samples[current_sample];
        let dist = if span == 0.0 {
            0.0
        } else {
            (x - self.samples[current_sample]) / span
        };
        let mut guess_t = interval_start + dist * SAMPLE_STEP;
        let initial_slope = Self::get_slope(guess_t, self.c1.x, self.c2.x);
        if initial_slope >= NEWTON_MIN_SLOPE {
            for _ in 0..NEWTON_ITERATIONS {
                let current_x = Self::calc_bezier(guess_t, self.c1.x, self.c2.x) - x;
                let current_slope = Self::get_slope(guess_t, self.c1.x, self.c2.x);
                if current_slope == 0.0 {
                    return guess_t;
                }
                guess_t -= current_x / current_slope;
            }
            guess_t
        } else if initial_slope == 0.0 {
            guess_t
        } else {
            self.binary_subdivide(x, interval_start, interval_start + SAMPLE_STEP)
        }
    }

    /// Evaluate the easing curve at position `x`, clamped to `0..=1`.
    pub fn value(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if (self.c1.x - self.c1.y).abs() < f64::EPSILON
            && (self.c2.x - self.c2.y).abs() < f64::EPSILON
        {
            return x;
        }
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.get_t_for_x(x);
        Self::calc_bezier(t, self.c1.y, self.c2.y)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::linear()
    }
}

/// Trait for values that can be linearly interpolated.
pub trait Lerp: Sized + Copy {
    /// Interpolate between `self` and `other` with factor `t`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}
