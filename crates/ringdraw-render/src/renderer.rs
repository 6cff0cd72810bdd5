use ringdraw_core::geom::tangent_arc;
use ringdraw_core::route::{EdgeGeometry, EdgePath};
use ringdraw_core::{LabelStyle, Point};
use std::f64::consts::TAU;

/// Passive drawing surface, modelled on a 2D canvas context.
///
/// Calls are applied immediately; the orchestrator always opens a fresh path with
/// [`Renderer::begin_path`] before building a shape and strokes it once done.
pub trait Renderer {
    fn begin_path(&mut self);
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    /// Circular arc around `center`. When the path already has a current point, a straight line
    /// joins it to the arc's start. Angles are radians in screen space; `anticlockwise == false`
    /// sweeps towards increasing angles.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    fn stroke(&mut self);
    /// Draws `text` centred on `at`.
    fn fill_text(&mut self, text: &str, at: Point, style: &LabelStyle);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        (**self).arc(center, radius, start_angle, end_angle, anticlockwise);
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &LabelStyle) {
        (**self).fill_text(text, at, style);
    }
}

/// Vertex outline plus its centred label.
pub fn trace_node<R: Renderer + ?Sized>(
    renderer: &mut R,
    center: Point,
    radius: f64,
    label: &str,
    style: &LabelStyle,
) {
    renderer.begin_path();
    renderer.arc(center, radius, 0.0, TAU, false);
    if !label.is_empty() {
        renderer.fill_text(label, center, style);
    }
    renderer.stroke();
}

/// Strokes an edge and, when present, its arrowhead as one path.
pub fn trace_edge<R: Renderer + ?Sized>(renderer: &mut R, geometry: &EdgeGeometry) {
    renderer.begin_path();
    match geometry.path {
        EdgePath::Line { start, end } => {
            renderer.move_to(start);
            renderer.line_to(end);
        }
        EdgePath::Curve {
            start,
            control,
            end,
            radius,
        } => {
            renderer.move_to(start);
            match tangent_arc(start, control, end, radius) {
                Some(arc) => renderer.arc(
                    arc.center,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle,
                    arc.anticlockwise,
                ),
                None => renderer.line_to(control),
            }
            renderer.line_to(end);
        }
        EdgePath::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            renderer.arc(center, radius, start_angle, end_angle, false);
        }
    }
    if let Some(arrow) = geometry.arrow {
        for barb in arrow.barbs() {
            renderer.move_to(arrow.tip);
            renderer.line_to(barb);
        }
    }
    renderer.stroke();
}
