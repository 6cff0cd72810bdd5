//! Draw orchestration: layout once, then route and stroke every edge of the adjacency relation.

use crate::renderer::{Renderer, trace_edge, trace_node};
use ringdraw_core::route::{RouteRequest, route_edge, route_self_loop};
use ringdraw_core::{DrawConfig, EdgeGeometry, Error, Graph, Point, Result, Vertex, ring_layout};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub vertices: usize,
    /// Pairwise edges handed to the router.
    pub edges: usize,
    pub self_loops: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedEdge {
    pub from: usize,
    pub to: usize,
    pub geometry: EdgeGeometry,
}

/// Complete geometry of one drawing, before anything is stroked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawingPlan {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<PlannedEdge>,
}

impl DrawingPlan {
    pub fn summary(&self) -> DrawSummary {
        let self_loops = self.edges.iter().filter(|e| e.from == e.to).count();
        DrawSummary {
            vertices: self.vertices.len(),
            edges: self.edges.len() - self_loops,
            self_loops,
        }
    }
}

/// Lays out the first `vertex_count` vertices of `graph` and routes every edge between them.
pub fn plan_drawing(
    graph: &Graph,
    config: &DrawConfig,
    vertex_count: usize,
) -> Result<DrawingPlan> {
    config.validate()?;
    if vertex_count > graph.vertex_count() {
        return Err(Error::VertexCountMismatch {
            requested: vertex_count,
            available: graph.vertex_count(),
        });
    }

    let vertices = ring_layout(vertex_count, &config.canvas)?;
    let edges = graph
        .draw_order(vertex_count)
        .into_iter()
        .map(|(from, to)| {
            edge_geometry(graph, config, &vertices, from, to).map(|geometry| PlannedEdge {
                from,
                to,
                geometry,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DrawingPlan { vertices, edges })
}

/// Geometry of the edge `from -> to` over an existing layout.
///
/// The adjacency entries only decide whether the pair is bidirectional; an edge absent from the
/// graph still gets geometry, which is what single-step redraws rely on.
pub fn edge_geometry(
    graph: &Graph,
    config: &DrawConfig,
    vertices: &[Vertex],
    from: usize,
    to: usize,
) -> Result<EdgeGeometry> {
    let lookup = |index: usize| {
        vertices.get(index).ok_or(Error::VertexOutOfRange {
            index,
            len: vertices.len(),
        })
    };
    let a = lookup(from)?;
    let b = lookup(to)?;

    if from == to {
        return Ok(route_self_loop(
            a.position,
            &config.canvas,
            config.vertex_radius,
            graph.is_directed(),
        ));
    }
    Ok(route_edge(&RouteRequest {
        from: a,
        to: b,
        vertices,
        directed: graph.is_directed(),
        bidirectional: graph.is_bidirectional(from, to),
        radius: config.vertex_radius,
    }))
}

/// Draws a graph onto a renderer and keeps the last layout for incremental [`draw_step`] calls.
///
/// [`draw_step`]: GraphDrawing::draw_step
pub struct GraphDrawing<'g, R> {
    renderer: R,
    graph: &'g Graph,
    config: DrawConfig,
    vertices: Vec<Vertex>,
}

impl<'g, R: Renderer> GraphDrawing<'g, R> {
    pub fn new(renderer: R, graph: &'g Graph, config: DrawConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            graph,
            config,
            vertices: Vec::new(),
        })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Positions from the last successful [`GraphDrawing::draw_graph`]; empty before the first.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Lays out `vertex_count` vertices, then draws every vertex and every edge among them.
    ///
    /// On error nothing is drawn and the previous layout is kept.
    pub fn draw_graph(&mut self, vertex_count: usize) -> Result<DrawSummary> {
        let plan = plan_drawing(self.graph, &self.config, vertex_count)?;
        let summary = plan.summary();
        tracing::debug!(
            vertices = summary.vertices,
            edges = summary.edges,
            self_loops = summary.self_loops,
            directed = self.graph.is_directed(),
            "drawing graph"
        );

        let DrawingPlan { vertices, edges } = plan;
        self.vertices = vertices;
        for v in &self.vertices {
            trace_node(
                &mut self.renderer,
                v.position,
                self.config.vertex_radius,
                &v.label.to_string(),
                &self.config.label,
            );
        }
        for edge in &edges {
            trace_edge(&mut self.renderer, &edge.geometry);
        }
        Ok(summary)
    }

    /// Redraws vertices `a` and `b` and the edge `a -> b` over the cached layout.
    pub fn draw_step(&mut self, a: usize, b: usize) -> Result<EdgeGeometry> {
        if self.vertices.is_empty() {
            return Err(Error::NoLayout);
        }
        let geometry = edge_geometry(self.graph, &self.config, &self.vertices, a, b)?;
        tracing::trace!(a, b, strategy = ?geometry.strategy, "draw step");

        let indices = if a == b { vec![a] } else { vec![a, b] };
        for index in indices {
            let v = self.vertices[index];
            self.draw_node(v.position, &v.label.to_string());
        }
        trace_edge(&mut self.renderer, &geometry);
        Ok(geometry)
    }

    /// Strokes one vertex outline with `label` centred inside; the layout cache is not touched.
    pub fn draw_node(&mut self, position: Point, label: &str) {
        trace_node(
            &mut self.renderer,
            position,
            self.config.vertex_radius,
            label,
            &self.config.label,
        );
    }
}
