use serde::{Deserialize, Serialize};

use crate::geometry::tolerance::EPS_DENOM;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// One named map region as extracted from the source document.
/// Identity is `id`; the struct is never mutated after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
    pub path_data: String,
}

/// A single path-drawing command with all coordinates already absolute.
/// Produced by the parser as an intermediate value only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    CubicCurveTo { x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32 },
    QuadraticCurveTo { x1: f32, y1: f32, x: f32, y: f32 },
    HorizontalLineTo { x: f32 },
    VerticalLineTo { y: f32 },
    ClosePath,
}

/// Flattened outline of one region: an ordered vertex list split into
/// closed subpaths. `subpaths` holds half-open `[start, end)` ranges into
/// `points`, in drawing order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub subpaths: Vec<(usize, usize)>,
}

impl Polygon {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rings(&self) -> impl Iterator<Item = &[Vec2]> {
        self.subpaths.iter().map(move |&(s, e)| &self.points[s..e])
    }

    /// Min/max per axis in a single scan over all subpaths.
    pub fn bounds(&self) -> BoundingBox {
        let mut b = BoundingBox::EMPTY;
        for p in &self.points {
            b.include(p.x, p.y);
        }
        b
    }
}

/// Axis-aligned box in source coordinate space. An empty polygon yields
/// the inverted `EMPTY` marker, which aggregation must skip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox {
        min_x: f32::INFINITY,
        min_y: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        max_y: f32::NEG_INFINITY,
    };

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => BoundingBox {
                min_x: self.min_x.min(other.min_x),
                min_y: self.min_y.min(other.min_y),
                max_x: self.max_x.max(other.max_x),
                max_y: self.max_y.max(other.max_y),
            },
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox::EMPTY
    }
}

/// Cached unit of work: a region's flattened outline plus its bounds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryEntry {
    pub polygon: Polygon,
    pub bounds: BoundingBox,
}

/// Uniform scale plus translation mapping source coordinates to viewport
/// coordinates. Recomputed from scratch whenever its inputs change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x * self.scale + self.translate_x,
            y: p.y * self.scale + self.translate_y,
        }
    }

    /// Map a viewport-space point back into source space.
    pub fn invert(&self, p: Vec2) -> Vec2 {
        let s = if self.scale.abs() <= EPS_DENOM { 1.0 } else { self.scale };
        Vec2 {
            x: (p.x - self.translate_x) / s,
            y: (p.y - self.translate_y) / s,
        }
    }
}

/// Per-region processing notice, exposed to the caller as data rather
/// than surfaced as a fault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    #[serde(rename = "parse_failure")]
    ParseFailure { id: u32, message: String },
    #[serde(rename = "empty_geometry")]
    EmptyGeometry { id: u32 },
}
