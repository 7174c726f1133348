// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: reveal and morph animations built on the path engine

use crate::geometry::{partial_path, Path};
use crate::timeline::CubicBezier;

/// A drawable shape: a single path or an ordered group of shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single path
    Leaf(Path),
    /// Child shapes, drawn in order
    Group(Vec<Shape>),
}

impl Shape {
    /// All leaf paths, depth first.
    pub fn leaves(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(shape) = stack.pop() {
            match shape {
                Shape::Leaf(path) => out.push(path),
                Shape::Group(children) => stack.extend(children.iter().rev()),
            }
        }
        out
    }

    /// Sum of the lengths of all leaves.
    pub fn length(&self) -> f64 {
        self.leaves().iter().map(|p| p.length()).sum()
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Shape::Leaf(path)
    }
}

/// Progressive reveal of a shape, as in a "draw" or "write" animation.
#[derive(Debug, Clone)]
pub struct RevealAnimation {
    shape: Shape,
    ease: CubicBezier,
}

impl RevealAnimation {
    /// Create a reveal of `shape` driven through `ease`.
    pub fn new(shape: impl Into<Shape>, ease: CubicBezier) -> Self {
        Self {
            shape: shape.into(),
            ease,
        }
    }

    /// The fully revealed shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Shape visible at `progress` in `0..=1`.
    ///
    /// Leaves are cut with [`partial_path`]. Group children are revealed one
    /// after another, each over an equal slice of the parent's progress.
    pub fn frame(&self, progress: f64) -> Shape {
        reveal(&self.shape, self.ease.value(progress))
    }
}

fn reveal(shape: &Shape, progress: f64) -> Shape {
    match shape {
        Shape::Leaf(path) => Shape::Leaf(partial_path(path, progress)),
        Shape::Group(children) => {
            let n = children.len() as f64;
            Shape::Group(
                children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| reveal(child, (progress * n - i as f64).clamp(0.0, 1.0)))
                    .collect(),
            )
        }
    }
}

/// Morph between two paths of arbitrary topology.
///
/// Topology is matched once here; frames only interpolate.
#[derive(Debug, Clone)]
pub struct MorphAnimation {
    from: Path,
    to: Path,
    ease: CubicBezier,
}

impl MorphAnimation {
    /// Match `from` and `to` and prepare the morph.
    pub fn new(from: &Path, to: &Path, ease: CubicBezier) -> Self {
        let (from, to) = Path::match_points(from, to);
        log::debug!("morph prepared with {} matched commands", from.len());
        Self { from, to, ease }
    }

    /// The matched start and end paths.
    pub fn endpoints(&self) -> (&Path, &Path) {
        (&self.from, &self.to)
    }

    /// Path at `progress` in `0..=1`.
    pub fn frame(&self, progress: f64) -> Path {
        Path::interpolate_matched(&self.from, &self.to, self.ease.value(progress))
    }
}

/// Any animation the loader can produce.
#[derive(Debug, Clone)]
pub enum Animation {
    /// Progressive reveal
    Reveal(RevealAnimation),
    /// Shape morph
    Morph(MorphAnimation),
}

impl Animation {
    /// Shape at `progress` in `0..=1`.
    pub fn frame(&self, progress: f64) -> Shape {
        match self {
            Animation::Reveal(reveal) => reveal.frame(progress),
            Animation::Morph(morph) => Shape::Leaf(morph.frame(progress)),
        }
    }
}
