#![forbid(unsafe_code)]

//! Draws ring-laid-out graphs through a passive [`Renderer`].
//!
//! [`GraphDrawing`] runs the layout once per [`GraphDrawing::draw_graph`] call, strokes every
//! vertex and edge, and keeps the vertex positions so single edges can be redrawn later with
//! [`GraphDrawing::draw_step`]. Two backends ship with the crate: [`SvgRenderer`] and
//! [`Recorder`].

pub mod drawing;
pub mod record;
pub mod renderer;
pub mod svg;

pub use drawing::{
    DrawSummary, DrawingPlan, GraphDrawing, PlannedEdge, edge_geometry, plan_drawing,
};
pub use record::{DrawOp, Recorder};
pub use renderer::{Renderer, trace_edge, trace_node};
pub use ringdraw_core::{Error, Result};
pub use svg::SvgRenderer;

/// Renders the first `vertex_count` vertices of `graph` to a standalone SVG document.
pub fn render_svg(
    graph: &ringdraw_core::Graph,
    config: &ringdraw_core::DrawConfig,
    vertex_count: usize,
) -> Result<String> {
    let mut drawing = GraphDrawing::new(SvgRenderer::new(config), graph, config.clone())?;
    drawing.draw_graph(vertex_count)?;
    Ok(drawing.into_renderer().finish())
}
