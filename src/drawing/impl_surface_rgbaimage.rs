#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgb, Rgba, RgbaImage},
  crate::{
    drawing::Surface,
    geometry::{PixelSpace, P2}
  }
};

impl Surface for RgbaImage {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    RgbaImage::dimensions(self).into()
  }

  fn clear_rect(&mut self, rect: Box2D<f32, PixelSpace>) {
    let bounding_box = match pixel_bounds(self, rect.round()) {
      Some(x) => x,
      None => return
    };
    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| self.put_pixel(x, y, Rgba([0, 0, 0, 0])));
  }

  fn fill_circle(&mut self, center: P2, r: f32, color: Rgb<u8>) {
    let bounds = Box2D::new(center - V2::splat(r), center + V2::splat(r));
    let bounding_box = match pixel_bounds(self, bounds.round_out()) {
      Some(x) => x,
      None => return // circle has no intersection with the surface at all
    };
    let color = color.to_rgba();
    let Δp = 1.0;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
      .for_each(|pixel| {
        let sample = pixel.to_f32() + V2::splat(0.5);
        let sdf = (sample - center).length() - r;
        let target = self.get_pixel_mut(pixel.x, pixel.y);
        *target = sdf_overlay_aa(sdf, Δp, *target, color);
      });
  }
}

fn pixel_bounds(image: &RgbaImage, rect: Box2D<f32, PixelSpace>) -> Option<Box2D<u32, PixelSpace>> {
  let size: Size2D<u32, PixelSpace> = image.dimensions().into();
  rect
    .intersection(&Box2D::from_size(size.to_f32()))
    .map(|x| x.to_u32())
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  if Δf >= Δp {
    return col2;
  }
  let alpha = Δf / Δp;
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
