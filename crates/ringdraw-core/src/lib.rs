#![forbid(unsafe_code)]

//! Geometry engine for drawing small graphs given as adjacency matrices.
//!
//! Vertices are laid out around a square ring with one hub vertex in the middle
//! ([`layout::ring_layout`]); each edge is then routed as a straight line, a curve around an
//! obstructing vertex, one half of an offset bidirectional pair, or a self-loop arc
//! ([`route::route_edge`], [`route::route_self_loop`]). Nothing here draws: the output is plain
//! geometry for a renderer to stroke.

pub mod config;
pub mod error;
pub mod geom;
pub mod graph;
pub mod layout;
pub mod route;

pub use config::{DrawConfig, LabelStyle};
pub use error::{Error, Result};
pub use geom::{Canvas, Point, Vector, point, vector};
pub use graph::Graph;
pub use layout::{Vertex, ring_layout};
pub use route::{
    Arrowhead, EdgeGeometry, EdgePath, RouteRequest, RouteStrategy, route_edge, route_self_loop,
};
