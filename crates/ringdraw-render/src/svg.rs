//! Standalone SVG backend.

use crate::renderer::Renderer;
use ringdraw_core::geom::unit;
use ringdraw_core::{Canvas, DrawConfig, LabelStyle, Point};
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

/// Sweeps this close to a full turn are drawn as a closed circle.
const FULL_TURN_SLACK: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    canvas: Canvas,
    stroke: String,
    stroke_width: f64,
    background: Option<String>,
    body: String,
    path: String,
    current: Option<Point>,
}

impl SvgRenderer {
    pub fn new(config: &DrawConfig) -> Self {
        Self {
            canvas: config.canvas,
            stroke: config.stroke.clone(),
            stroke_width: config.stroke_width,
            background: None,
            body: String::new(),
            path: String::new(),
            current: None,
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.background = (!color.trim().is_empty()).then_some(color);
        self
    }

    /// Serializes everything stroked so far as a complete document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let w = fmt_num(self.canvas.width);
        let h = fmt_num(self.canvas.height);
        let _ = write!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if let Some(bg) = &self.background {
            let _ = write!(
                &mut out,
                r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
                escape_xml(bg)
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Drops every stroked shape; canvas and background are kept.
    pub fn clear(&mut self) {
        self.body.clear();
        self.path.clear();
        self.current = None;
    }

    pub fn finish(self) -> String {
        self.to_svg_string()
    }

    fn push_point(&mut self, cmd: char, p: Point) {
        self.path.push(cmd);
        fmt_num_into(&mut self.path, p.x);
        self.path.push(',');
        fmt_num_into(&mut self.path, p.y);
    }

    fn push_arc_segment(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) {
        self.path.push('A');
        fmt_num_into(&mut self.path, radius);
        self.path.push(',');
        fmt_num_into(&mut self.path, radius);
        let _ = write!(
            &mut self.path,
            ",0,{},{},",
            u8::from(large_arc),
            u8::from(sweep)
        );
        fmt_num_into(&mut self.path, to.x);
        self.path.push(',');
        fmt_num_into(&mut self.path, to.y);
    }
}

/// Angular length of a canvas-style arc, always non-negative and capped at one full turn.
pub fn arc_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
    let raw = if anticlockwise {
        start_angle - end_angle
    } else {
        end_angle - start_angle
    };
    if raw >= TAU {
        TAU
    } else {
        raw.rem_euclid(TAU)
    }
}

impl Renderer for SvgRenderer {
    fn begin_path(&mut self) {
        self.path.clear();
        self.current = None;
    }

    fn move_to(&mut self, to: Point) {
        self.push_point('M', to);
        self.current = Some(to);
    }

    fn line_to(&mut self, to: Point) {
        if self.current.is_none() {
            self.move_to(to);
            return;
        }
        self.push_point('L', to);
        self.current = Some(to);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        let from = center + unit(start_angle) * radius;
        if self.current.is_some() {
            self.push_point('L', from);
        } else {
            self.push_point('M', from);
        }

        let sweep = arc_sweep(start_angle, end_angle, anticlockwise);
        let dir = if anticlockwise { -1.0 } else { 1.0 };
        let sweep_flag = !anticlockwise;
        if sweep >= TAU - FULL_TURN_SLACK {
            // A single SVG arc cannot close on itself.
            let opposite = center + unit(start_angle + PI) * radius;
            self.push_arc_segment(radius, false, sweep_flag, opposite);
            self.push_arc_segment(radius, false, sweep_flag, from);
            self.current = Some(from);
            return;
        }
        let to = center + unit(start_angle + dir * sweep) * radius;
        self.push_arc_segment(radius, sweep > PI, sweep_flag, to);
        self.current = Some(to);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        tracing::trace!(d = %self.path, "svg stroke");
        let _ = write!(
            &mut self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.path,
            escape_xml(&self.stroke),
            fmt_num(self.stroke_width)
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &LabelStyle) {
        let _ = write!(
            &mut self.body,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            escape_xml(&style.font_family),
            fmt_num(style.font_size),
            escape_xml(&self.stroke),
            escape_xml(text)
        );
    }
}

pub fn fmt_num(v: f64) -> String {
    let mut out = String::new();
    fmt_num_into(&mut out, v);
    out
}

/// Three fractional digits, trailing zeros trimmed, no `-0`.
pub fn fmt_num_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    let k = (v * 1000.0).round() as i64;
    if k == 0 {
        out.push('0');
        return;
    }
    if k < 0 {
        out.push('-');
    }
    let abs = k.unsigned_abs();
    let _ = write!(out, "{}", abs / 1000);
    let frac = abs % 1000;
    if frac == 0 {
        return;
    }
    let digits = format!("{frac:03}");
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
