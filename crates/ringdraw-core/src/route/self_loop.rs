use super::{Arrowhead, CURVE_ARROW_TILT, EdgeGeometry, EdgePath, RouteStrategy};
use crate::geom::{Canvas, Point, angle_between, is_degenerate_segment, unit};
use std::f64::consts::{FRAC_PI_2, PI};

/// Outward direction used for a vertex sitting exactly on the canvas centre (straight up).
pub const SELF_LOOP_DEFAULT_ANGLE: f64 = -FRAC_PI_2;

/// Half of the loop's angular span (9pi/16 on either side of the outward direction).
pub const SELF_LOOP_HALF_SPAN: f64 = PI * 9.0 / 16.0;

/// Self-loop arc placed just outside the vertex, facing away from the canvas centre.
pub fn route_self_loop(
    position: Point,
    canvas: &Canvas,
    radius: f64,
    directed: bool,
) -> EdgeGeometry {
    let center = canvas.center();
    let theta = if is_degenerate_segment(center, position) {
        SELF_LOOP_DEFAULT_ANGLE
    } else {
        angle_between(center, position)
    };

    let arc_center = position + unit(theta) * radius;
    let arrow = directed.then(|| Arrowhead {
        tip: position + unit(theta - CURVE_ARROW_TILT) * radius,
        angle: theta + PI,
        length: radius / 2.0,
    });

    EdgeGeometry {
        strategy: RouteStrategy::SelfLoop,
        path: EdgePath::Arc {
            center: arc_center,
            radius: radius / 2.0,
            start_angle: theta - SELF_LOOP_HALF_SPAN,
            end_angle: theta + SELF_LOOP_HALF_SPAN,
        },
        arrow,
    }
}
