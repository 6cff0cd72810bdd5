//! Edge routing: picks a drawing strategy for one edge and computes its geometry.

pub mod self_loop;

use crate::geom::{Point, angle_between, is_degenerate_segment, is_point_between, unit};
use crate::layout::Vertex;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

pub use self_loop::{SELF_LOOP_DEFAULT_ANGLE, route_self_loop};

/// Entry/exit skew of the two edges of a bidirectional pair (11.25 degrees).
pub const PAIR_SKEW: f64 = PI / 16.0;
/// Arrowhead rotation on curved edges, so it follows the curve's exit tangent.
pub const CURVE_ARROW_TILT: f64 = FRAC_PI_6;
/// Half-angle between an arrowhead's two barbs.
pub const ARROW_SPREAD: f64 = FRAC_PI_4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteStrategy {
    Straight,
    /// Bulges around a vertex lying on the straight segment.
    Curved,
    /// One half of a bidirectional pair, skewed so the two edges do not overlap.
    OffsetPair,
    SelfLoop,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EdgePath {
    Line {
        start: Point,
        end: Point,
    },
    /// `moveTo(start)`, `arcTo(control, end, radius)`, `lineTo(end)`.
    Curve {
        start: Point,
        control: Point,
        end: Point,
        radius: f64,
    },
    /// Clockwise (in screen space) arc from `start_angle` to `end_angle`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrowhead {
    pub tip: Point,
    /// Direction the arrow points in.
    pub angle: f64,
    pub length: f64,
}

impl Arrowhead {
    /// End points of the two strokes drawn from the tip.
    pub fn barbs(&self) -> [Point; 2] {
        [
            self.tip - unit(self.angle - ARROW_SPREAD) * self.length,
            self.tip - unit(self.angle + ARROW_SPREAD) * self.length,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeGeometry {
    pub strategy: RouteStrategy,
    pub path: EdgePath,
    pub arrow: Option<Arrowhead>,
}

/// Everything the router needs to know about one edge.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub from: &'a Vertex,
    pub to: &'a Vertex,
    /// All laid-out vertices, scanned for obstructions.
    pub vertices: &'a [Vertex],
    pub directed: bool,
    /// The reverse edge `to -> from` also exists in a directed graph.
    pub bidirectional: bool,
    pub radius: f64,
}

/// Some vertex other than the two endpoints lies on the straight segment between them.
///
/// Zero-length segments are never obstructed.
pub fn has_obstruction(from: &Vertex, to: &Vertex, vertices: &[Vertex]) -> bool {
    let (a, b) = (from.position, to.position);
    if is_degenerate_segment(a, b) {
        return false;
    }
    vertices.iter().any(|v| {
        v.index != from.index
            && v.index != to.index
            && !is_degenerate_segment(v.position, a)
            && !is_degenerate_segment(v.position, b)
            && is_point_between(a, b, v.position)
    })
}

pub fn route_edge(req: &RouteRequest<'_>) -> EdgeGeometry {
    let (center_a, center_b) = (req.from.position, req.to.position);
    let r = req.radius;
    let arrow_len = r / 2.0;

    if is_degenerate_segment(center_a, center_b) {
        tracing::warn!(
            from = req.from.index,
            to = req.to.index,
            "edge endpoints coincide; drawing a straight fallback"
        );
    }

    let theta = angle_between(center_a, center_b);
    let shrink = unit(theta) * r;
    let start = center_a + shrink;
    let end = center_b - shrink;

    let arrow = |angle: f64, tip: Point| {
        req.directed.then_some(Arrowhead {
            tip,
            angle,
            length: arrow_len,
        })
    };

    let geometry = if has_obstruction(req.from, req.to, req.vertices) {
        let length = (end - start).length();
        let middle = start.lerp(end, 0.5);
        let control = middle + unit(theta + FRAC_PI_2) * (length / 4.0);
        EdgeGeometry {
            strategy: RouteStrategy::Curved,
            path: EdgePath::Curve {
                start,
                control,
                end,
                radius: length,
            },
            arrow: arrow(theta - CURVE_ARROW_TILT, end),
        }
    } else if req.directed && req.bidirectional {
        let start = center_a + unit(theta + PAIR_SKEW) * r;
        let end = center_b - unit(theta - PAIR_SKEW) * r;
        EdgeGeometry {
            strategy: RouteStrategy::OffsetPair,
            path: EdgePath::Line { start, end },
            arrow: arrow(theta, end),
        }
    } else {
        EdgeGeometry {
            strategy: RouteStrategy::Straight,
            path: EdgePath::Line { start, end },
            arrow: arrow(theta, end),
        }
    };

    tracing::debug!(
        from = req.from.index,
        to = req.to.index,
        strategy = ?geometry.strategy,
        "routed edge"
    );
    geometry
}
