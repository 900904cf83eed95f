//! Software rendering of a [`Document`] into a [`PixelBuffer`].
//!
//! The canvas starts transparent. Elements are drawn in order: paint strokes
//! and shape outlines are composited source-over, eraser strokes clear the
//! pixels they cover, and bitmaps replace the pixels they cover.
//!
//! Rendering is aliased on purpose: every pixel is either fully covered by a
//! stroke or not at all, so bucket fills see crisp region borders.

use egui::{Pos2, pos2};

use crate::document::Document;
use crate::element::{Bitmap, Blend, Element, distance_to_line_segment};
use crate::pixel::{PixelBuffer, Rgba};

/// Render the whole document from scratch
pub fn render(document: &Document) -> PixelBuffer {
    let mut pixels = PixelBuffer::new(document.width(), document.height(), Rgba::TRANSPARENT);
    let mut mask = Mask::new(pixels.width(), pixels.height());
    for element in document.elements() {
        draw_element(&mut pixels, &mut mask, element);
    }
    pixels
}

/// Draw one element on top of already rendered pixels
pub fn draw(pixels: &mut PixelBuffer, element: &Element) {
    let mut mask = Mask::new(pixels.width(), pixels.height());
    draw_element(pixels, &mut mask, element);
}

fn draw_element(pixels: &mut PixelBuffer, mask: &mut Mask, element: &Element) {
    match element {
        Element::Stroke(stroke) => {
            mask.cover_polyline(stroke.points(), stroke.width());
            match stroke.blend() {
                Blend::Paint => {
                    mask.apply(pixels, |pixels, x, y| pixels.blend(x, y, stroke.color()))
                }
                Blend::Erase => {
                    mask.apply(pixels, |pixels, x, y| pixels.set(x, y, Rgba::TRANSPARENT))
                }
            }
        }
        Element::Shape(shape) => {
            mask.cover_polyline(&shape.outline(), shape.width());
            mask.apply(pixels, |pixels, x, y| pixels.blend(x, y, shape.color()));
        }
        Element::Bitmap(bitmap) => draw_bitmap(pixels, bitmap),
    }
}

fn draw_bitmap(pixels: &mut PixelBuffer, bitmap: &Bitmap) {
    let source = bitmap.pixels();
    let width = source.width().min(pixels.width()) as i64;
    let height = source.height().min(pixels.height()) as i64;
    for y in 0..height {
        for x in 0..width {
            if let Some(color) = source.get(x, y) {
                pixels.set(x, y, color);
            }
        }
    }
}

/// Pixels covered by the element currently being drawn.
///
/// Coverage is collected first and applied once, so overlapping segments of a
/// translucent stroke don't darken where they meet.
struct Mask {
    width: usize,
    height: usize,
    covered: Vec<bool>,
    touched: Vec<usize>,
}

impl Mask {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            covered: vec![false; width * height],
            touched: Vec::new(),
        }
    }

    /// Mark every pixel whose center lies within `width / 2` of the polyline
    fn cover_polyline(&mut self, points: &[Pos2], width: f32) {
        let radius = (width / 2.0).max(0.5);
        match points {
            [] => {}
            [point] => self.cover_segment(*point, *point, radius),
            _ => {
                for segment in points.windows(2) {
                    self.cover_segment(segment[0], segment[1], radius);
                }
            }
        }
    }

    fn cover_segment(&mut self, a: Pos2, b: Pos2, radius: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        let x0 = (a.x.min(b.x) - radius).floor().clamp(0.0, max_x) as usize;
        let x1 = (a.x.max(b.x) + radius).ceil().clamp(0.0, max_x) as usize;
        let y0 = (a.y.min(b.y) - radius).floor().clamp(0.0, max_y) as usize;
        let y1 = (a.y.max(b.y) + radius).ceil().clamp(0.0, max_y) as usize;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let index = y * self.width + x;
                if self.covered[index] {
                    continue;
                }
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_line_segment(center, a, b) <= radius {
                    self.covered[index] = true;
                    self.touched.push(index);
                }
            }
        }
    }

    /// Run `paint` on every covered pixel, then reset the mask
    fn apply(
        &mut self,
        pixels: &mut PixelBuffer,
        mut paint: impl FnMut(&mut PixelBuffer, i64, i64),
    ) {
        for &index in &self.touched {
            let x = (index % self.width) as i64;
            let y = (index / self.width) as i64;
            paint(pixels, x, y);
            self.covered[index] = false;
        }
        self.touched.clear();
    }
}
