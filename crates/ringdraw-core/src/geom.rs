#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

/// Distance tolerance for collinearity and degenerate-segment checks.
pub const GEOM_EPSILON: f64 = 1e-6;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Drawing surface bounds, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        point(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Unit vector pointing along `angle` (radians, screen space: +y is down).
pub fn unit(angle: f64) -> Vector {
    vector(angle.cos(), angle.sin())
}

pub fn angle_between(from: Point, to: Point) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// `check` lies within the closed interval spanned by `a` and `b`.
pub fn is_between(a: f64, b: f64, check: f64) -> bool {
    a.min(b) <= check && check <= a.max(b)
}

pub fn is_degenerate_segment(p1: Point, p2: Point) -> bool {
    (p2 - p1).length() < GEOM_EPSILON
}

/// Collinearity-within-segment test.
///
/// `check` must sit inside the bounding box of `p1`/`p2` and on the line through them. The line
/// test uses the cross product, so axis-aligned segments need no special casing. The tolerance is a
/// distance: the cross product is compared against `GEOM_EPSILON * |p2 - p1|`.
pub fn is_point_between(p1: Point, p2: Point, check: Point) -> bool {
    if !in_box_with_slack(p1, p2, check, GEOM_EPSILON) {
        return false;
    }

    let seg = p2 - p1;
    let len = seg.length();
    if len < GEOM_EPSILON {
        return (check - p1).length() < GEOM_EPSILON;
    }
    let cross = (check.x - p1.x) * seg.y - (check.y - p1.y) * seg.x;
    cross.abs() <= GEOM_EPSILON * len
}

fn in_box_with_slack(p1: Point, p2: Point, check: Point, slack: f64) -> bool {
    let (min_x, max_x) = (p1.x.min(p2.x) - slack, p1.x.max(p2.x) + slack);
    let (min_y, max_y) = (p1.y.min(p2.y) - slack, p1.y.max(p2.y) + slack);
    is_between(min_x, max_x, check.x) && is_between(min_y, max_y, check.y)
}

/// Arc that rounds the corner `p0 -> p1 -> p2` with the given radius, the way a 2D canvas
/// `arcTo(p1, p2, radius)` does after a `moveTo(p0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentArc {
    /// Where the arc leaves the `p0 -> p1` line.
    pub from: Point,
    /// Where the arc meets the `p1 -> p2` line.
    pub to: Point,
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

/// Returns `None` for degenerate corners (coincident or collinear points, non-positive radius).
pub fn tangent_arc(p0: Point, p1: Point, p2: Point, radius: f64) -> Option<TangentArc> {
    if !(radius.is_finite() && radius > 0.0) {
        return None;
    }
    let a = p0 - p1;
    let b = p2 - p1;
    if a.length() < GEOM_EPSILON || b.length() < GEOM_EPSILON {
        return None;
    }
    let ua = a.normalize();
    let ub = b.normalize();
    let turn = (p1 - p0).cross(p2 - p1);
    if turn.abs() <= GEOM_EPSILON * a.length() * b.length() {
        return None;
    }

    let corner = ua.dot(ub).clamp(-1.0, 1.0).acos();
    let half = corner / 2.0;
    let tangent_dist = radius / half.tan();
    let from = p1 + ua * tangent_dist;
    let to = p1 + ub * tangent_dist;
    let bisector = (ua + ub).normalize();
    let center = p1 + bisector * (radius / half.sin());

    Some(TangentArc {
        from,
        to,
        center,
        radius,
        start_angle: angle_between(center, from),
        end_angle: angle_between(center, to),
        anticlockwise: turn < 0.0,
    })
}
