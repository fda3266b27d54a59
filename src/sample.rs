//! Where circle colors come from.

use {
  crate::geometry::P2,
  image::{Pixel, Rgb, RgbaImage}
};

/// Color lookup for a circle centered at a surface point.
pub trait Sample: Sync {
  fn sample(&self, point: P2) -> Rgb<u8>;
}

/// Flat color, the surface is never consulted.
impl Sample for Rgb<u8> {
  fn sample(&self, _: P2) -> Rgb<u8> { *self }
}

/// Single-pixel lookup. Coordinates truncate toward zero; anything outside the raster, or left
/// uncovered by the placed image, reads as black.
impl Sample for RgbaImage {
  fn sample(&self, point: P2) -> Rgb<u8> {
    let (x, y) = (point.x.trunc(), point.y.trunc());
    let (width, height) = self.dimensions();
    if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
      return Rgb([0, 0, 0]);
    }
    self.get_pixel(x as u32, y as u32).to_rgb()
  }
}

/// The sampling strategy a mosaic is currently configured with.
#[derive(Debug, Clone)]
pub enum ColorSource {
  Constant(Rgb<u8>),
  /// Source image already placed on a raster of the surface's size.
  Surface(RgbaImage),
}

impl Sample for ColorSource {
  fn sample(&self, point: P2) -> Rgb<u8> {
    match self {
      ColorSource::Constant(color) => color.sample(point),
      ColorSource::Surface(image) => image.sample(point),
    }
  }
}
