use serde::{Deserialize, Serialize};

use crate::pixel::PixelBuffer;

/// A flattened raster covering the whole canvas, produced by a fill.
///
/// Serialized as PNG bytes so snapshots stay small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bitmap {
    #[serde(with = "png_pixels")]
    pixels: PixelBuffer,
}

impl Bitmap {
    pub fn new(pixels: PixelBuffer) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

mod png_pixels {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    use crate::pixel::PixelBuffer;

    pub fn serialize<S: Serializer>(
        pixels: &PixelBuffer,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let png = pixels.to_png().map_err(ser::Error::custom)?;
        serializer.serialize_bytes(&png)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PixelBuffer, D::Error> {
        let png = Vec::<u8>::deserialize(deserializer)?;
        PixelBuffer::from_png(&png).map_err(de::Error::custom)
    }
}
