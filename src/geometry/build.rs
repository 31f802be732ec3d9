//! Polygon building: flattens a command sequence into closed subpaths.

use crate::geometry::limits;
use crate::geometry::math;
use crate::geometry::tolerance::CURVE_SEGMENTS;
use crate::model::{Command, Polygon, Vec2};

/// Flatten a command sequence into a polygon. Curves are sampled with a
/// fixed number of uniform parameter steps so output depends only on the
/// input commands. A zero-point result is a valid empty polygon.
pub fn build(commands: &[Command]) -> Polygon {
    let mut builder = Builder::default();
    for cmd in commands {
        if builder.points.len() > limits::MAX_POLYGON_POINTS {
            break;
        }
        match *cmd {
            Command::MoveTo { x, y } => builder.begin_subpath(x, y),
            Command::LineTo { x, y } => builder.push_line(x, y),
            Command::HorizontalLineTo { x } => {
                let y = builder.cur.y;
                builder.push_line(x, y);
            }
            Command::VerticalLineTo { y } => {
                let x = builder.cur.x;
                builder.push_line(x, y);
            }
            Command::CubicCurveTo { x1, y1, x2, y2, x, y } => {
                builder.ensure_open();
                let p0 = builder.cur;
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let (px, py) = math::cubic_point(t, p0.x, p0.y, x1, y1, x2, y2, x, y);
                    builder.points.push(Vec2 { x: px, y: py });
                }
                builder.cur = Vec2 { x, y };
            }
            Command::QuadraticCurveTo { x1, y1, x, y } => {
                builder.ensure_open();
                let p0 = builder.cur;
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let (px, py) = math::quad_point(t, p0.x, p0.y, x1, y1, x, y);
                    builder.points.push(Vec2 { x: px, y: py });
                }
                builder.cur = Vec2 { x, y };
            }
            Command::ClosePath => builder.close_subpath(),
        }
    }
    builder.finish()
}

#[derive(Default)]
struct Builder {
    points: Vec<Vec2>,
    subpaths: Vec<(usize, usize)>,
    sub_start: usize,
    start: Vec2,
    cur: Vec2,
    open: bool,
}

impl Builder {
    fn begin_subpath(&mut self, x: f32, y: f32) {
        self.end_subpath();
        self.sub_start = self.points.len();
        self.start = Vec2 { x, y };
        self.cur = self.start;
        self.points.push(self.start);
        self.open = true;
    }

    // A drawing command with no open subpath starts one at the current
    // point, matching how renderers treat a path without a leading moveto.
    fn ensure_open(&mut self) {
        if !self.open {
            let Vec2 { x, y } = self.cur;
            self.begin_subpath(x, y);
        }
    }

    fn push_line(&mut self, x: f32, y: f32) {
        self.ensure_open();
        self.points.push(Vec2 { x, y });
        self.cur = Vec2 { x, y };
    }

    fn close_subpath(&mut self) {
        if self.open {
            if self.points.last() != Some(&self.start) {
                self.points.push(self.start);
            }
            self.cur = self.start;
            self.end_subpath();
        }
    }

    fn end_subpath(&mut self) {
        if self.open && self.points.len() > self.sub_start {
            self.subpaths.push((self.sub_start, self.points.len()));
        }
        self.open = false;
    }

    fn finish(mut self) -> Polygon {
        self.end_subpath();
        Polygon {
            points: self.points,
            subpaths: self.subpaths,
        }
    }
}
