//! Minimal standalone SVG emission for a laid-out level map.
//!
//! The engine's contract is the in-memory layout; this module is the
//! straightforward rendering consumer: one `<path>` per connector, one
//! `<circle>` plus label per node. All visual knobs come from the
//! [`SvgStyle`] value passed into the call; there is no ambient styling
//! state.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::model::{DrawCommand, LevelMapLayout, PathPrimitive};

/// Immutable style for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Optional page background; `None` leaves the canvas transparent.
    pub background: Option<String>,
    pub path_stroke: String,
    pub path_stroke_width: f64,
    pub node_fill_unlocked: String,
    pub node_fill_locked: String,
    pub node_stroke: String,
    pub node_stroke_width: f64,
    pub label_color: String,
    pub label_font_size: f64,
    pub font_family: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: None,
            path_stroke: "#b0bec5".to_string(),
            path_stroke_width: 6.0,
            node_fill_unlocked: "#ffb300".to_string(),
            node_fill_locked: "#78909c".to_string(),
            node_stroke: "#37474f".to_string(),
            node_stroke_width: 2.0,
            label_color: "#263238".to_string(),
            label_font_size: 14.0,
            font_family: "sans-serif".to_string(),
        }
    }
}

/// SVG path data for one connector primitive.
pub fn path_data(primitive: &PathPrimitive) -> String {
    let mut d = String::new();
    for cmd in primitive.commands() {
        match cmd {
            DrawCommand::MoveTo(p) => {
                let _ = write!(d, "M{},{}", fmt_path(p.x), fmt_path(p.y));
            }
            DrawCommand::LineTo(p) => {
                let _ = write!(d, "L{},{}", fmt_path(p.x), fmt_path(p.y));
            }
            DrawCommand::CubicTo { c1, c2, to } => {
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_path(c1.x),
                    fmt_path(c1.y),
                    fmt_path(c2.x),
                    fmt_path(c2.y),
                    fmt_path(to.x),
                    fmt_path(to.y)
                );
            }
            DrawCommand::Arc {
                radius,
                clockwise,
                to,
            } => {
                let sweep = if clockwise { 1 } else { 0 };
                let _ = write!(
                    d,
                    "A{},{},0,0,{},{},{}",
                    fmt_path(radius),
                    fmt_path(radius),
                    sweep,
                    fmt_path(to.x),
                    fmt_path(to.y)
                );
            }
        }
    }
    d
}

/// Renders the full map as a standalone `<svg>` document string.
pub fn render_svg(layout: &LevelMapLayout, style: &SvgStyle) -> String {
    let width = layout.viewport_width;
    let height = layout.total_height;
    let half = layout.node_size / 2.0;

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_path(width),
        h = fmt_path(height)
    );

    if let Some(bg) = &style.background {
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt_path(width),
            fmt_path(height),
            escape_attr(bg)
        );
    }

    out.push_str(r#"<g class="connectors">"#);
    for primitive in &layout.connectors {
        let _ = write!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path_data(primitive),
            escape_attr(&style.path_stroke),
            fmt_path(style.path_stroke_width)
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in &layout.nodes {
        let (class, fill) = if node.unlocked {
            ("level unlocked", style.node_fill_unlocked.as_str())
        } else {
            ("level locked", style.node_fill_locked.as_str())
        };
        let _ = write!(
            out,
            r#"<circle class="{}" data-icon="{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            class,
            escape_attr(&node.icon),
            fmt_path(node.x),
            fmt_path(node.y),
            fmt_path(half),
            escape_attr(fill),
            escape_attr(&style.node_stroke),
            fmt_path(style.node_stroke_width)
        );
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            fmt_path(node.x),
            fmt_path(node.y + half + style.label_font_size),
            escape_attr(&style.font_family),
            fmt_path(style.label_font_size),
            escape_attr(&style.label_color),
            escape_text(&node.label)
        );
    }
    out.push_str("</g>");

    out.push_str("</svg>");
    out
}

// D3's `d3-path` defaults to 3 fractional digits when stringifying path
// commands; the same trimmed form keeps attribute output stable.
fn fmt_path(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_path_trims_trailing_zeros() {
        assert_eq!(fmt_path(100.0), "100");
        assert_eq!(fmt_path(45.5), "45.5");
        assert_eq!(fmt_path(0.12349), "0.123");
        assert_eq!(fmt_path(-0.0001), "0");
        assert_eq!(fmt_path(f64::NAN), "0");
    }

    #[test]
    fn escaping_covers_markup_characters() {
        assert_eq!(escape_text("A & B <C>"), "A &amp; B &lt;C&gt;");
        assert_eq!(escape_attr(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
