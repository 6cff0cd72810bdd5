//! Square-ring vertex layout.
//!
//! `N - 1` vertices are spread around the perimeter of a square centred on the canvas, and the last
//! vertex (the hub) sits at the exact canvas centre. The ring is walked from its top-right corner:
//! leftwards along the top, down the left side, rightwards along the bottom, then up the right
//! side. The first `(N - 1) mod 4` sides carry `side_count` vertices, the others one fewer.

use crate::error::{Error, Result};
use crate::geom::{Canvas, Point, Vector, vector};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub index: usize,
    /// 1-based label drawn inside the vertex.
    pub label: usize,
    pub position: Point,
}

/// Per-side walk parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSide {
    pub count: usize,
    pub spacing: f64,
    pub direction: Vector,
}

const SIDE_DIRECTIONS: [(f64, f64); 4] = [(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0), (0.0, -1.0)];

/// Vertices per full side for a graph of `vertex_count` vertices.
pub fn side_count(vertex_count: usize) -> usize {
    ((vertex_count as f64 + 1.0) / 4.0).round() as usize
}

/// Length of one side of the ring square.
pub fn ring_path(vertex_count: usize, canvas: &Canvas) -> f64 {
    let per_side = side_count(vertex_count);
    canvas.height / (per_side as f64 + 1.0) * per_side as f64
}

pub fn ring_sides(vertex_count: usize, canvas: &Canvas) -> [RingSide; 4] {
    let per_side = side_count(vertex_count);
    let ring_spacing = canvas.height / (per_side as f64 + 1.0);
    let path = ring_spacing * per_side as f64;
    let reduced_spacing = if per_side > 1 {
        path / (per_side as f64 - 1.0)
    } else {
        ring_spacing
    };
    let full_sides = vertex_count.saturating_sub(1) % 4;

    std::array::from_fn(|side| {
        let (dx, dy) = SIDE_DIRECTIONS[side];
        if side < full_sides {
            RingSide {
                count: per_side,
                spacing: ring_spacing,
                direction: vector(dx, dy),
            }
        } else {
            RingSide {
                count: per_side.saturating_sub(1),
                spacing: reduced_spacing,
                direction: vector(dx, dy),
            }
        }
    })
}

/// Lays out `vertex_count` vertices. The returned list is indexed like the adjacency matrix.
pub fn ring_layout(vertex_count: usize, canvas: &Canvas) -> Result<Vec<Vertex>> {
    if vertex_count == 0 {
        return Err(Error::EmptyLayout);
    }
    if !canvas.is_valid() {
        return Err(Error::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let sides = ring_sides(vertex_count, canvas);
    let center = canvas.center();
    let half = ring_path(vertex_count, canvas) / 2.0;
    let mut cursor = center + vector(half, -half);

    tracing::debug!(
        vertex_count,
        side_count = side_count(vertex_count),
        counts = ?sides.map(|s| s.count),
        "ring layout"
    );

    let mut out = Vec::with_capacity(vertex_count);
    for side in &sides {
        let step = side.direction * side.spacing;
        for _ in 0..side.count {
            let index = out.len();
            out.push(Vertex {
                index,
                label: index + 1,
                position: cursor,
            });
            cursor += step;
        }
    }
    debug_assert_eq!(out.len(), vertex_count - 1);

    out.push(Vertex {
        index: vertex_count - 1,
        label: vertex_count,
        position: center,
    });
    Ok(out)
}
