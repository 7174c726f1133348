// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON path and animation loader

use crate::animation::{Animation, MorphAnimation, RevealAnimation, Shape};
use crate::error::{Error, Result};
use crate::geometry::{Path, PathCommand};
use crate::loader::easing::EasingRegistry;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Command tag of a [`PathRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "M")]
    Move,
    #[serde(rename = "L")]
    Line,
    #[serde(rename = "Q")]
    Quadratic,
    #[serde(rename = "C")]
    Cubic,
    #[serde(rename = "Z")]
    Close,
}

impl RecordKind {
    fn name(self) -> &'static str {
        match self {
            RecordKind::Move => "move",
            RecordKind::Line => "line",
            RecordKind::Quadratic => "quadratic",
            RecordKind::Cubic => "cubic",
            RecordKind::Close => "close",
        }
    }
}

/// One path command in flat form.
///
/// `x`/`y` hold the end point; `x1`/`y1` and `x2`/`y2` the control points
/// for curves. A missing end coordinate reads as 0, except on a close record
/// without coordinates, which targets the current sub-path start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Command tag
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// End point x
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// End point y
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// First control point x
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    /// First control point y
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
    /// Second control point x
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    /// Second control point y
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
}

impl PathRecord {
    fn new(kind: RecordKind, end: Point) -> Self {
        Self {
            kind,
            x: Some(end.x),
            y: Some(end.y),
            x1: None,
            y1: None,
            x2: None,
            y2: None,
        }
    }

    fn with_control1(mut self, c: Point) -> Self {
        self.x1 = Some(c.x);
        self.y1 = Some(c.y);
        self
    }

    fn with_control2(mut self, c: Point) -> Self {
        self.x2 = Some(c.x);
        self.y2 = Some(c.y);
        self
    }

    fn control1(&self) -> Option<Point> {
        Some(Point::new(self.x1?, self.y1?))
    }

    fn control2(&self) -> Option<Point> {
        Some(Point::new(self.x2?, self.y2?))
    }

    fn end(&self) -> Point {
        Point::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }

    fn has_end(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    fn to_command(self) -> Option<PathCommand> {
        let end = self.end();
        Some(match self.kind {
            RecordKind::Move => PathCommand::Move { end },
            RecordKind::Line => PathCommand::Line { end },
            RecordKind::Quadratic => PathCommand::Quadratic {
                control1: self.control1()?,
                end,
            },
            RecordKind::Cubic => PathCommand::Cubic {
                control1: self.control1()?,
                control2: self.control2()?,
                end,
            },
            RecordKind::Close => PathCommand::Close { end },
        })
    }
}

impl From<&PathCommand> for PathRecord {
    fn from(cmd: &PathCommand) -> Self {
        match *cmd {
            PathCommand::Move { end } => PathRecord::new(RecordKind::Move, end),
            PathCommand::Line { end } => PathRecord::new(RecordKind::Line, end),
            PathCommand::Quadratic { control1, end } => {
                PathRecord::new(RecordKind::Quadratic, end).with_control1(control1)
            }
            PathCommand::Cubic {
                control1,
                control2,
                end,
            } => PathRecord::new(RecordKind::Cubic, end)
                .with_control1(control1)
                .with_control2(control2),
            PathCommand::Close { end } => PathRecord::new(RecordKind::Close, end),
        }
    }
}

/// Loader settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Fail on records that lack a control point instead of skipping them.
    pub strict: bool,
}

/// Flatten a path into records.
pub fn to_records(path: &Path) -> Vec<PathRecord> {
    path.commands().iter().map(PathRecord::from).collect()
}

/// Rebuild a path from records.
///
/// Records missing a control point are skipped with a warning, or rejected
/// when `options.strict` is set.
pub fn from_records(records: &[PathRecord], options: LoadOptions) -> Result<Path> {
    let mut path = Path::new();
    for (index, record) in records.iter().enumerate() {
        if record.kind == RecordKind::Close && !record.has_end() {
            path.close_path();
            continue;
        }
        match record.to_command() {
            Some(cmd) => path.push(cmd),
            None if options.strict => {
                return Err(Error::MissingControlPoint {
                    index,
                    kind: record.kind.name(),
                })
            }
            None => log::warn!(
                "skipping {} record {}: missing control point",
                record.kind.name(),
                index
            ),
        }
    }
    Ok(path)
}

/// Serialize a path as a JSON array of records.
pub fn to_string(path: &Path) -> Result<String> {
    Ok(serde_json::to_string(&to_records(path))?)
}

/// Load a path from a reader containing a JSON array of records.
pub fn from_reader<R: Read>(reader: R) -> Result<Path> {
    from_reader_with(reader, LoadOptions::default())
}

/// Load a path from a reader with explicit options.
pub fn from_reader_with<R: Read>(mut reader: R, options: LoadOptions) -> Result<Path> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let records: Vec<PathRecord> = serde_json::from_str(&s)?;
    from_records(&records, options)
}

/// Load a path directly from a byte slice containing JSON.
pub fn from_slice(data: &[u8]) -> Result<Path> {
    from_reader(std::io::Cursor::new(data))
}

/// A shape in an animation document: a record list or a nested group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeDocument {
    /// A single path
    Path(Vec<PathRecord>),
    /// Ordered children
    Group(Vec<ShapeDocument>),
}

fn default_easing() -> String {
    "linear".to_string()
}

/// Serialized form of an [`Animation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnimationDocument {
    /// Progressive reveal of a shape
    Reveal {
        #[serde(default = "default_easing")]
        easing: String,
        shape: ShapeDocument,
    },
    /// Morph between two paths
    Morph {
        #[serde(default = "default_easing")]
        easing: String,
        from: Vec<PathRecord>,
        #[serde(default)]
        to: Option<Vec<PathRecord>>,
    },
}

fn build_shape(doc: &ShapeDocument, options: LoadOptions) -> Result<Shape> {
    Ok(match doc {
        ShapeDocument::Path(records) => Shape::Leaf(from_records(records, options)?),
        ShapeDocument::Group(children) => Shape::Group(
            children
                .iter()
                .map(|child| build_shape(child, options))
                .collect::<Result<Vec<_>>>()?,
        ),
    })
}

/// Build an [`Animation`] from its document, resolving easing names.
pub fn build_animation(
    doc: &AnimationDocument,
    registry: &EasingRegistry,
    options: LoadOptions,
) -> Result<Animation> {
    match doc {
        AnimationDocument::Reveal { easing, shape } => {
            let ease = registry.resolve(easing)?;
            Ok(Animation::Reveal(RevealAnimation::new(
                build_shape(shape, options)?,
                ease,
            )))
        }
        AnimationDocument::Morph { easing, from, to } => {
            let ease = registry.resolve(easing)?;
            let to = to.as_ref().ok_or(Error::MissingMorphTarget)?;
            let from = from_records(from, options)?;
            let to = from_records(to, options)?;
            Ok(Animation::Morph(MorphAnimation::new(&from, &to, ease)))
        }
    }
}

/// Load an animation document from JSON bytes.
pub fn load_animation(
    data: &[u8],
    registry: &EasingRegistry,
    options: LoadOptions,
) -> Result<Animation> {
    let doc: AnimationDocument = serde_json::from_slice(data)?;
    build_animation(&doc, registry, options)
}
