//! SVG back end.

use std::fmt;

use super::scene::{Color, GradientAxis, Primitive, Scene, StrokeStyle, TextAnchor};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn paint_attr(name: &str, color: Option<Color>) -> String {
    match color {
        Some(c) if c.a == 255 => format!(r#" {}="{}""#, name, c.hex()),
        Some(c) => format!(
            r#" {name}="{}" {name}-opacity="{:.3}""#,
            c.hex(),
            c.opacity()
        ),
        None => format!(r#" {}="none""#, name),
    }
}

fn stroke_attrs(stroke: Option<&StrokeStyle>) -> String {
    let Some(style) = stroke else {
        return paint_attr("stroke", None);
    };
    let mut out = paint_attr("stroke", Some(style.color));
    out.push_str(&format!(r#" stroke-width="{}""#, style.width));
    if !style.dash.is_empty() {
        let dash: Vec<String> = style.dash.iter().map(|d| d.to_string()).collect();
        out.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(",")));
    }
    out
}

/// Serialize a scene as a standalone SVG document
pub fn scene_to_svg(scene: &Scene) -> String {
    SvgDocument(scene).to_string()
}

struct SvgDocument<'a>(&'a Scene);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, svg: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = scene.width,
            h = scene.height
        )?;
        writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{}" height="{}"{}/>"#,
            scene.width,
            scene.height,
            paint_attr("fill", Some(scene.background))
        )?;

        let mut gradients = 0usize;
        for primitive in &scene.primitives {
            match primitive {
                Primitive::Rect {
                    rect,
                    fill,
                    stroke,
                    radius,
                } => {
                    writeln!(
                        svg,
                        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{}"{}{}/>"#,
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        radius,
                        paint_attr("fill", *fill),
                        stroke_attrs(stroke.as_ref())
                    )?;
                }
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    stroke,
                } => {
                    writeln!(
                        svg,
                        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                        x1,
                        y1,
                        x2,
                        y2,
                        stroke_attrs(Some(stroke))
                    )?;
                }
                Primitive::Circle {
                    cx,
                    cy,
                    radius,
                    fill,
                    stroke,
                } => {
                    writeln!(
                        svg,
                        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}{}/>"#,
                        cx,
                        cy,
                        radius,
                        paint_attr("fill", *fill),
                        stroke_attrs(stroke.as_ref())
                    )?;
                }
                Primitive::Gradient {
                    rect,
                    from,
                    to,
                    axis,
                } => {
                    gradients += 1;
                    let id = format!("glow{}", gradients);
                    let (x2, y2) = match axis {
                        GradientAxis::Vertical => (0, 1),
                        GradientAxis::Horizontal => (1, 0),
                    };
                    writeln!(
                        svg,
                        r#"  <defs><linearGradient id="{id}" x1="0" y1="0" x2="{x2}" y2="{y2}"><stop offset="0" stop-color="{}" stop-opacity="{:.3}"/><stop offset="1" stop-color="{}" stop-opacity="{:.3}"/></linearGradient></defs>"#,
                        from.hex(),
                        from.opacity(),
                        to.hex(),
                        to.opacity()
                    )?;
                    writeln!(
                        svg,
                        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="url(#{id})"/>"#,
                        rect.x, rect.y, rect.width, rect.height
                    )?;
                }
                Primitive::Text {
                    x,
                    y,
                    text,
                    size,
                    color,
                    anchor,
                    rotation,
                } => {
                    let anchor = match anchor {
                        TextAnchor::Start => "start",
                        TextAnchor::Middle => "middle",
                        TextAnchor::End => "end",
                    };
                    let transform = if *rotation == 0.0 {
                        String::new()
                    } else {
                        format!(r#" transform="rotate({} {:.2} {:.2})""#, rotation, x, y)
                    };
                    writeln!(
                        svg,
                        r#"  <text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="{}"{}{}>{}</text>"#,
                        x,
                        y,
                        size,
                        anchor,
                        paint_attr("fill", Some(*color)),
                        transform,
                        escape(text)
                    )?;
                }
            }
        }

        writeln!(svg, "</svg>")
    }
}
