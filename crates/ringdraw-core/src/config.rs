use crate::error::{Error, Result};
use crate::geom::Canvas;
use serde::{Deserialize, Serialize};

/// Drawing options. Every field has a default, so a JSON override only needs the keys it changes:
///
/// ```json
/// { "canvas": { "width": 400, "height": 400 }, "vertexRadius": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawConfig {
    pub canvas: Canvas,
    pub vertex_radius: f64,
    pub label: LabelStyle,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            vertex_radius: 20.0,
            label: LabelStyle::default(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelStyle {
    pub font_size: f64,
    pub font_family: String,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            font_family: "Arial".to_string(),
        }
    }
}

impl DrawConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas::new(width, height);
        self
    }

    pub fn with_vertex_radius(mut self, radius: f64) -> Self {
        self.vertex_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.canvas.is_valid() {
            return Err(Error::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if !(self.vertex_radius.is_finite() && self.vertex_radius > 0.0) {
            return Err(Error::InvalidRadius {
                radius: self.vertex_radius,
            });
        }
        Ok(())
    }
}
