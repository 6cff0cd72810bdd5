use crate::renderer::Renderer;
use ringdraw_core::{LabelStyle, Point};
use serde::Serialize;

/// One renderer call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    BeginPath,
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    #[serde(rename_all = "camelCase")]
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Stroke,
    FillText {
        text: String,
        at: Point,
    },
}

/// Renderer that keeps the call sequence instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every coordinate and radius passed to the renderer is finite.
    pub fn is_finite(&self) -> bool {
        let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
        self.ops.iter().all(|op| match op {
            DrawOp::MoveTo { to } | DrawOp::LineTo { to } => finite(to),
            DrawOp::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                finite(center)
                    && radius.is_finite()
                    && start_angle.is_finite()
                    && end_angle.is_finite()
            }
            DrawOp::FillText { at, .. } => finite(at),
            DrawOp::BeginPath | DrawOp::Stroke => true,
        })
    }
}

impl Renderer for Recorder {
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, to: Point) {
        self.ops.push(DrawOp::MoveTo { to });
    }

    fn line_to(&mut self, to: Point) {
        self.ops.push(DrawOp::LineTo { to });
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.ops.push(DrawOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill_text(&mut self, text: &str, at: Point, _style: &LabelStyle) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            at,
        });
    }
}
