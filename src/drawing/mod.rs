//! Raster backends the mosaic draws on and samples from.

use {
  crate::{
    fit::{Fit, FitMode},
    geometry::{PixelSpace, P2}
  },
  euclid::{Box2D, Size2D},
  image::{DynamicImage, GenericImageView, Rgb, RgbaImage}
};

mod impl_surface_rgbaimage;

/// Fixed-size raster the circles are painted onto.
pub trait Surface {
  fn dimensions(&self) -> Size2D<u32, PixelSpace>;
  /// Makes every pixel in `rect` fully transparent.
  fn clear_rect(&mut self, rect: Box2D<f32, PixelSpace>);
  /// Paints an opaque disc, antialiased on its edge.
  fn fill_circle(&mut self, center: P2, r: f32, color: Rgb<u8>);

  fn clear(&mut self) {
    let size = self.dimensions().to_f32();
    self.clear_rect(Box2D::from_size(size));
  }
}

/// Allocates a transparent square surface.
pub fn new_surface(side: u32) -> RgbaImage {
  use humansize::{FileSize, file_size_opts as options};

  let bytes = side as u64 * side as u64 * 4;
  tracing::debug!(
    side,
    memory = %bytes.file_size(options::BINARY).unwrap_or_default(),
    "allocating surface"
  );
  RgbaImage::new(side, side)
}

/// Draws `image` onto a transparent square of `side` pixels, placed according to `mode`.
///
/// Whatever the placement leaves uncovered stays transparent.
pub fn place_image(image: &DynamicImage, side: u32, mode: FitMode) -> RgbaImage {
  use image::imageops::{self, FilterType};

  let mut surface = new_surface(side);
  let origin: Size2D<f32, PixelSpace> = Size2D::from(image.dimensions()).to_f32();
  if origin.width <= 0.0 || origin.height <= 0.0 || side == 0 {
    return surface;
  }
  let fit = Fit::new(Size2D::splat(side as f32), origin, mode);
  let scaled = fit.size(origin).round().max(Size2D::splat(1.0)).to_u32();
  let scaled = image
    .resize_exact(scaled.width, scaled.height, FilterType::Triangle)
    .to_rgba8();
  imageops::overlay(
    &mut surface,
    &scaled,
    fit.offset.x.round() as i64,
    fit.offset.y.round() as i64
  );
  surface
}
