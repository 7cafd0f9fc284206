//! Raster back end
//! Draws a [`Scene`] into an RGBA image using tiny-skia for anti-aliased
//! 2D rendering and rusttype for labels.

use image::RgbaImage;
use rusttype::{point as rt_point, Font, Scale};
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Point,
    Rect, SpreadMode, Stroke, StrokeDash, Transform,
};

use super::scene::{Color, GradientAxis, Primitive, Scene, StrokeStyle, TextAnchor};
use crate::font_manager;
use crate::viewport::PixelRect;

fn sk_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn solid_paint(c: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(sk_color(c));
    paint.anti_alias = true;
    paint
}

fn sk_stroke(style: &StrokeStyle) -> Stroke {
    let mut stroke = Stroke {
        width: style.width as f32,
        ..Default::default()
    };
    if !style.dash.is_empty() {
        stroke.dash = StrokeDash::new(style.dash.iter().map(|d| *d as f32).collect(), 0.0);
    }
    stroke
}

fn rect_path(rect: &PixelRect, radius: f64) -> Option<Path> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0) as f32;
    let (x, y) = (rect.x as f32, rect.y as f32);
    let (w, h) = (rect.width as f32, rect.height as f32);
    if r <= 0.0 {
        return Rect::from_xywh(x, y, w, h).map(PathBuilder::from_rect);
    }

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}

fn fill_and_stroke(
    pixmap: &mut Pixmap,
    path: &Path,
    fill: Option<Color>,
    stroke: Option<&StrokeStyle>,
) {
    if let Some(fill) = fill {
        pixmap.fill_path(
            path,
            &solid_paint(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
    if let Some(style) = stroke {
        pixmap.stroke_path(
            path,
            &solid_paint(style.color),
            &sk_stroke(style),
            Transform::identity(),
            None,
        );
    }
}

/// Render a scene to an RGBA image
pub fn render_scene(scene: &Scene) -> RgbaImage {
    let Some(mut pixmap) = Pixmap::new(scene.width.max(1), scene.height.max(1)) else {
        return RgbaImage::new(scene.width, scene.height);
    };
    pixmap.fill(sk_color(scene.background));

    let font = font_manager::label_font();
    for primitive in &scene.primitives {
        draw_primitive(&mut pixmap, primitive, font);
    }

    to_image(&pixmap)
}

fn draw_primitive(pixmap: &mut Pixmap, primitive: &Primitive, font: Option<&Font<'static>>) {
    match primitive {
        Primitive::Rect {
            rect,
            fill,
            stroke,
            radius,
        } => {
            if let Some(path) = rect_path(rect, *radius) {
                fill_and_stroke(pixmap, &path, *fill, stroke.as_ref());
            }
        }
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            let mut pb = PathBuilder::new();
            pb.move_to(*x1 as f32, *y1 as f32);
            pb.line_to(*x2 as f32, *y2 as f32);
            if let Some(path) = pb.finish() {
                fill_and_stroke(pixmap, &path, None, Some(stroke));
            }
        }
        Primitive::Circle {
            cx,
            cy,
            radius,
            fill,
            stroke,
        } => {
            if let Some(path) = PathBuilder::from_circle(*cx as f32, *cy as f32, *radius as f32) {
                fill_and_stroke(pixmap, &path, *fill, stroke.as_ref());
            }
        }
        Primitive::Gradient {
            rect,
            from,
            to,
            axis,
        } => draw_gradient(pixmap, rect, *from, *to, *axis),
        Primitive::Text {
            x,
            y,
            text,
            size,
            color,
            anchor,
            rotation,
        } => {
            if let Some(font) = font {
                draw_text(pixmap, font, *x, *y, text, *size, *color, *anchor, *rotation);
            }
        }
    }
}

fn draw_gradient(pixmap: &mut Pixmap, rect: &PixelRect, from: Color, to: Color, axis: GradientAxis) {
    let Some(r) = Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    ) else {
        return;
    };
    let end = match axis {
        GradientAxis::Vertical => Point::from_xy(r.left(), r.bottom()),
        GradientAxis::Horizontal => Point::from_xy(r.right(), r.top()),
    };
    let Some(shader) = LinearGradient::new(
        Point::from_xy(r.left(), r.top()),
        end,
        vec![
            GradientStop::new(0.0, sk_color(from)),
            GradientStop::new(1.0, sk_color(to)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    ) else {
        return;
    };

    let paint = Paint {
        shader,
        anti_alias: true,
        ..Default::default()
    };
    pixmap.fill_rect(r, &paint, Transform::identity(), None);
}

/// Advance width of a text run
fn text_width(font: &Font<'static>, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, rt_point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Rasterize a text run into its own pixmap, then composite it at the anchor
/// with the requested rotation.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    pixmap: &mut Pixmap,
    font: &Font<'static>,
    x: f64,
    y: f64,
    text: &str,
    size: f64,
    color: Color,
    anchor: TextAnchor,
    rotation: f64,
) {
    let scale = Scale::uniform(size as f32);
    let v_metrics = font.v_metrics(scale);
    let width = text_width(font, scale, text).ceil() as u32 + 2;
    let height = (v_metrics.ascent - v_metrics.descent).ceil() as u32 + 2;
    let Some(mut label) = Pixmap::new(width, height) else {
        return;
    };

    let baseline = v_metrics.ascent + 1.0;
    let data = label.data_mut();
    for glyph in font.layout(text, scale, rt_point(1.0, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                return;
            }
            // Premultiplied RGBA
            let alpha = (v * color.a as f32).round().min(255.0) as u8;
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            let pixel = &mut data[idx..idx + 4];
            if alpha <= pixel[3] {
                return;
            }
            pixel[0] = (color.r as u16 * alpha as u16 / 255) as u8;
            pixel[1] = (color.g as u16 * alpha as u16 / 255) as u8;
            pixel[2] = (color.b as u16 * alpha as u16 / 255) as u8;
            pixel[3] = alpha;
        });
    }

    let offset = match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => width as f64 / 2.0,
        TextAnchor::End => width as f64,
    };
    let left = (x - offset).round() as i32;
    let top = (y - baseline as f64).round() as i32;
    let transform = if rotation == 0.0 {
        Transform::identity()
    } else {
        Transform::from_rotate_at(rotation as f32, x as f32, y as f32)
    };
    pixmap.draw_pixmap(
        left,
        top,
        label.as_ref(),
        &PixmapPaint::default(),
        transform,
        None,
    );
}

fn to_image(pixmap: &Pixmap) -> RgbaImage {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut buf = Vec::with_capacity((width * height * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, buf).unwrap_or_else(|| RgbaImage::new(width, height))
}
