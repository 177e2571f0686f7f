//! Declarative drawing layers and the rasterizers that paint them.
//!
//! Coordinates are inclusive bounding boxes in canvas pixels and may lie
//! partly or fully outside the canvas; anything off-canvas is clipped.

use image::{ImageBuffer, Rgb, RgbImage};
use lorecrafter_domain::Color;

pub type Point = (i32, i32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rect { x0: i32, y0: i32, x1: i32, y1: i32 },
    Ellipse { x0: i32, y0: i32, x1: i32, y1: i32 },
    Polygon(Vec<Point>),
}

impl Shape {
    pub const fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Shape::Rect { x0, y0, x1, y1 }
    }

    pub const fn ellipse(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Shape::Ellipse { x0, y0, x1, y1 }
    }

    pub fn polygon(points: &[Point]) -> Self {
        Shape::Polygon(points.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Color,
    pub width: u32,
}

/// A filled shape with an optional outline drawn inside its edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub shape: Shape,
    pub fill: Color,
    pub outline: Option<Stroke>,
}

impl Layer {
    pub fn filled(shape: Shape, fill: Color) -> Self {
        Self {
            shape,
            fill,
            outline: None,
        }
    }

    pub fn outlined(mut self, color: Color, width: u32) -> Self {
        self.outline = Some(Stroke { color, width });
        self
    }
}

pub fn blank(width: u32, height: u32, color: Color) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb(color.to_array()))
}

/// Paint layers in order; later layers cover earlier ones.
pub fn paint_all(canvas: &mut RgbImage, layers: &[Layer]) {
    for layer in layers {
        paint(canvas, layer);
    }
}

pub fn paint(canvas: &mut RgbImage, layer: &Layer) {
    match &layer.shape {
        Shape::Rect { x0, y0, x1, y1 } => paint_rect(canvas, (*x0, *y0), (*x1, *y1), layer),
        Shape::Ellipse { x0, y0, x1, y1 } => paint_ellipse(canvas, (*x0, *y0), (*x1, *y1), layer),
        Shape::Polygon(points) => paint_polygon(canvas, points, layer),
    }
}

fn put(canvas: &mut RgbImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < canvas.width() && y < canvas.height() {
        canvas.put_pixel(x, y, Rgb(color.to_array()));
    }
}

/// Visible part of a bounding box, or `None` when fully off-canvas.
fn clip(canvas: &RgbImage, (x0, y0): Point, (x1, y1): Point) -> Option<(Point, Point)> {
    let max_x = canvas.width() as i32 - 1;
    let max_y = canvas.height() as i32 - 1;
    let (cx0, cy0) = (x0.max(0), y0.max(0));
    let (cx1, cy1) = (x1.min(max_x), y1.min(max_y));
    (cx0 <= cx1 && cy0 <= cy1).then_some(((cx0, cy0), (cx1, cy1)))
}

fn paint_rect(canvas: &mut RgbImage, min: Point, max: Point, layer: &Layer) {
    let Some(((cx0, cy0), (cx1, cy1))) = clip(canvas, min, max) else {
        return;
    };
    for y in cy0..=cy1 {
        for x in cx0..=cx1 {
            let color = match layer.outline {
                Some(stroke) if edge_distance(x, y, min, max) < stroke.width as i32 => stroke.color,
                _ => layer.fill,
            };
            put(canvas, x, y, color);
        }
    }
}

fn edge_distance(x: i32, y: i32, (x0, y0): Point, (x1, y1): Point) -> i32 {
    (x - x0).min(x1 - x).min(y - y0).min(y1 - y)
}

fn paint_ellipse(canvas: &mut RgbImage, min: Point, max: Point, layer: &Layer) {
    let Some(((cx0, cy0), (cx1, cy1))) = clip(canvas, min, max) else {
        return;
    };
    let center_x = f64::from(min.0 + max.0) / 2.0;
    let center_y = f64::from(min.1 + max.1) / 2.0;
    let radius_x = f64::from(max.0 - min.0) / 2.0 + 0.5;
    let radius_y = f64::from(max.1 - min.1) / 2.0 + 0.5;

    let inside = |x: i32, y: i32, rx: f64, ry: f64| {
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (f64::from(x) - center_x) / rx;
        let dy = (f64::from(y) - center_y) / ry;
        dx * dx + dy * dy <= 1.0
    };

    for y in cy0..=cy1 {
        for x in cx0..=cx1 {
            if !inside(x, y, radius_x, radius_y) {
                continue;
            }
            let color = match layer.outline {
                Some(stroke) => {
                    let width = f64::from(stroke.width);
                    if inside(x, y, radius_x - width, radius_y - width) {
                        layer.fill
                    } else {
                        stroke.color
                    }
                }
                None => layer.fill,
            };
            put(canvas, x, y, color);
        }
    }
}

fn paint_polygon(canvas: &mut RgbImage, points: &[Point], layer: &Layer) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(0)
        .min(canvas.height() as i32 - 1);

    // Even-odd scanline fill at pixel rows.
    let mut crossings = Vec::with_capacity(points.len());
    for y in min_y..=max_y {
        crossings.clear();
        for (i, &(ax, ay)) in points.iter().enumerate() {
            let (bx, by) = points[(i + 1) % points.len()];
            if (ay <= y && y < by) || (by <= y && y < ay) {
                let t = f64::from(y - ay) / f64::from(by - ay);
                crossings.push(f64::from(ax) + t * f64::from(bx - ax));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let start = span[0].ceil() as i32;
            let end = span[1].floor() as i32;
            for x in start..=end {
                put(canvas, x, y, layer.fill);
            }
        }
    }

    // The boundary belongs to the shape: stroke it in the outline color, or in
    // the fill color so bottom and right edges are not lost.
    let edge_color = layer.outline.map_or(layer.fill, |stroke| stroke.color);
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_line(canvas, from, to, edge_color);
    }
}

/// Bresenham line, both endpoints included.
fn draw_line(canvas: &mut RgbImage, (mut x, mut y): Point, (x1, y1): Point, color: Color) {
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let step_x = if x < x1 { 1 } else { -1 };
    let step_y = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}
