use egui::{Color32, ColorImage};
use serde::{Deserialize, Serialize};

/// An unpremultiplied 8-bit RGBA color.
///
/// Two colors are equal only when all four channels match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` (leading `#` optional) with the given opacity in `0.0..=1.0`.
    pub fn from_hex(hex: &str, opacity: f32) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: opacity_to_alpha(opacity),
        })
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// `round(opacity * 255)`, clamped.
pub fn opacity_to_alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A row-major grid of RGBA8 pixels, four bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Create a buffer filled with a single color
    pub fn new(width: usize, height: usize, color: Rgba) -> Self {
        let data = color.to_array().repeat(width * height);
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Color at `(x, y)`, or `None` outside the buffer
    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        if !self.contains(x, y) {
            return None;
        }
        let i = self.offset(x as usize, y as usize);
        let p = &self.data[i..i + 4];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Writes `color` at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgba) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.offset(x as usize, y as usize);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Source-over composite of `color` onto the pixel at `(x, y)`.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if color.a == 255 {
            self.set(x, y, color);
            return;
        }
        if color.a == 0 {
            return;
        }
        let Some(dst) = self.get(x, y) else {
            return;
        };

        let sa = color.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            self.set(x, y, Rgba::TRANSPARENT);
            return;
        }
        let mix = |s: u8, d: u8| {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        self.set(
            x,
            y,
            Rgba::new(
                mix(color.r, dst.r),
                mix(color.g, dst.g),
                mix(color.b, dst.b),
                (out_a * 255.0).round() as u8,
            ),
        );
    }

    /// Encode as a PNG image
    pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
        use image::ImageEncoder as _;

        let mut bytes = Vec::new();
        image::codecs::png::PngEncoder::new(&mut bytes).write_image(
            &self.data,
            self.width as u32,
            self.height as u32,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }

    /// Decode a PNG (any color type is converted to RGBA8)
    pub fn from_png(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded =
            image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width: width as usize,
            height: height as usize,
            data: decoded.into_raw(),
        })
    }

    /// Copy this buffer into an egui image for uploading as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.data)
    }
}
