// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Drives the path engine through a reveal and a morph and logs each frame.
//!
//! Run with `RUST_LOG=debug` to see cache and matching activity.

use pathmorph_core::animation::{MorphAnimation, RevealAnimation, Shape};
use pathmorph_core::loader::{json, EasingRegistry};
use pathmorph_core::{Path, Point};

const FRAMES: u32 = 10;

fn star(cx: f64, cy: f64, outer: f64, inner: f64) -> Path {
    let mut path = Path::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = std::f64::consts::PI * i as f64 / 5.0 - std::f64::consts::FRAC_PI_2;
        let p = Point::new(cx + r * a.cos(), cy + r * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

fn circle(cx: f64, cy: f64, r: f64) -> Path {
    // quarter arcs with the usual 0.5523 handle ratio
    let k = 0.552_284_749_8 * r;
    let mut path = Path::new();
    path.move_to(Point::new(cx + r, cy));
    path.cubic_to(
        Point::new(cx + r, cy + k),
        Point::new(cx + k, cy + r),
        Point::new(cx, cy + r),
    );
    path.cubic_to(
        Point::new(cx - k, cy + r),
        Point::new(cx - r, cy + k),
        Point::new(cx - r, cy),
    );
    path.cubic_to(
        Point::new(cx - r, cy - k),
        Point::new(cx - k, cy - r),
        Point::new(cx, cy - r),
    );
    path.cubic_to(
        Point::new(cx + k, cy - r),
        Point::new(cx + r, cy - k),
        Point::new(cx + r, cy),
    );
    path.close_path();
    path
}

fn main() -> pathmorph_core::Result<()> {
    env_logger::init();
    let easings = EasingRegistry::with_defaults();

    let ring = circle(0.0, 0.0, 50.0);
    let spikes = star(0.0, 0.0, 60.0, 25.0);
    log::info!(
        "circle length {:.3}, star length {:.3}",
        ring.length(),
        spikes.length()
    );

    let reveal = RevealAnimation::new(
        Shape::Group(vec![Shape::Leaf(ring.clone()), Shape::Leaf(spikes.clone())]),
        easings.resolve("ease_in_out")?,
    );
    for frame in 0..=FRAMES {
        let progress = frame as f64 / FRAMES as f64;
        let shape = reveal.frame(progress);
        log::info!("reveal {:>4.2}: drawn length {:.3}", progress, shape.length());
    }

    let morph = MorphAnimation::new(&ring, &spikes, easings.resolve("ease")?);
    for frame in 0..=FRAMES {
        let progress = frame as f64 / FRAMES as f64;
        let path = morph.frame(progress);
        let head = path.point_at(0.0);
        let tangent = path.tangent_at(0.25);
        log::info!(
            "morph {:>4.2}: start ({:.2}, {:.2}), tangent at quarter ({:.3}, {:.3})",
            progress,
            head.x,
            head.y,
            tangent.x,
            tangent.y
        );
    }

    let (_, target) = morph.endpoints();
    println!("{}", json::to_string(target)?);
    Ok(())
}
